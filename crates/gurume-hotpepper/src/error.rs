use thiserror::Error;

/// Errors returned by the HotPepper API client.
#[derive(Debug, Error)]
pub enum HotpepperError {
    /// Network or TLS failure from the underlying HTTP client, including
    /// non-2xx responses.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body could not be deserialized into the expected shape
    /// (for example, a missing `results` key).
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// A detail lookup returned an empty shop list.
    #[error("no shop found for id {0}")]
    NotFound(String),

    /// The configured base URL could not be parsed.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
}
