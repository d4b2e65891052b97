//! HTTP client for the HotPepper Gourmet Search API.
//!
//! Wraps `reqwest` with HotPepper-specific request construction and typed
//! response deserialization. Every request carries the API credential and
//! `format=json`; search requests add the geo/radius/filter parameters from
//! a [`SearchQuery`]. No retries and no caching — failures surface directly.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::HotpepperError;
use crate::params::SearchQuery;
use crate::types::{Restaurant, ShopResponse};

const DEFAULT_BASE_URL: &str = "https://webservice.recruit.co.jp/hotpepper/gourmet/v1/";

/// Maximum shops fetched per search; the provider caps a page at 100.
const RESULT_COUNT: &str = "100";

/// Client for the HotPepper Gourmet Search API.
///
/// Manages the HTTP client, API key, and base URL. Use
/// [`HotpepperClient::with_base_url`] to point at a mock server in tests.
pub struct HotpepperClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl HotpepperClient {
    /// Creates a new client pointed at the production HotPepper endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`HotpepperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, HotpepperError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with an explicit base URL (for testing with
    /// wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`HotpepperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`HotpepperError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, HotpepperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("gurume/0.1 (restaurant-search)")
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // query_pairs_mut writes to the endpoint path rather than replacing
        // the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| HotpepperError::InvalidBaseUrl(format!("'{base_url}': {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Runs a gourmet search and returns the shops in provider order.
    ///
    /// An empty or absent `shop` list in the response is a valid empty
    /// result, not an error.
    ///
    /// # Errors
    ///
    /// - [`HotpepperError::Http`] on network failure or non-2xx HTTP status.
    /// - [`HotpepperError::Deserialize`] if the response does not match the
    ///   expected envelope.
    pub async fn search_restaurants(
        &self,
        query: &SearchQuery,
    ) -> Result<Vec<Restaurant>, HotpepperError> {
        let mut params = query.query_pairs();
        params.push(("count", RESULT_COUNT.to_string()));
        let url = self.build_url(&params);

        let body = self.request_json(&url).await?;
        let envelope: ShopResponse =
            serde_json::from_value(body).map_err(|e| HotpepperError::Deserialize {
                context: format!(
                    "search(lat={}, lng={}, range={})",
                    query.coordinate.lat,
                    query.coordinate.lng,
                    query.radius.code()
                ),
                source: e,
            })?;

        tracing::debug!(shops = envelope.results.shop.len(), "gourmet search completed");
        Ok(envelope.results.shop)
    }

    /// Fetches a single shop by its provider ID.
    ///
    /// # Errors
    ///
    /// - [`HotpepperError::NotFound`] if the shop list comes back empty.
    /// - [`HotpepperError::Http`] on network failure or non-2xx HTTP status.
    /// - [`HotpepperError::Deserialize`] if the response does not match the
    ///   expected envelope.
    pub async fn get_restaurant_detail(&self, id: &str) -> Result<Restaurant, HotpepperError> {
        let url = self.build_url(&[("id", id.to_string())]);

        let body = self.request_json(&url).await?;
        let envelope: ShopResponse =
            serde_json::from_value(body).map_err(|e| HotpepperError::Deserialize {
                context: format!("detail(id={id})"),
                source: e,
            })?;

        envelope
            .results
            .shop
            .into_iter()
            .next()
            .ok_or_else(|| HotpepperError::NotFound(id.to_owned()))
    }

    /// Builds the full request URL with percent-encoded query parameters.
    ///
    /// Clones the stored base URL and appends `key`, `format=json`, and the
    /// caller's parameters via [`Url::query_pairs_mut`].
    fn build_url(&self, extra: &[(&str, String)]) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("key", &self.api_key);
            pairs.append_pair("format", "json");
            for (k, v) in extra {
                pairs.append_pair(k, v);
            }
        }
        url
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the body
    /// as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`HotpepperError::Http`] on network failure or a non-2xx
    /// status, [`HotpepperError::Deserialize`] if the body is not valid JSON.
    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, HotpepperError> {
        tracing::debug!(url = %redact_key(url), "hotpepper request");
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| HotpepperError::Deserialize {
            context: redact_key(url).to_string(),
            source: e,
        })
    }
}

/// Returns a copy of `url` with the `key` parameter value elided, safe for
/// logs and error messages.
fn redact_key(url: &Url) -> Url {
    let mut clean = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "key" { "***".into() } else { v };
            (k.into_owned(), v.into_owned())
        })
        .collect();
    {
        let mut writer = clean.query_pairs_mut();
        writer.clear();
        for (k, v) in &pairs {
            writer.append_pair(k, v);
        }
    }
    clean
}

#[cfg(test)]
mod tests {
    use gurume_core::Coordinate;

    use super::*;
    use crate::params::RadiusCode;

    fn test_client(base_url: &str) -> HotpepperClient {
        HotpepperClient::with_base_url("test-key", 30, base_url)
            .expect("client construction should not fail")
    }

    #[test]
    fn build_url_constructs_correct_query_string() {
        let client = test_client("https://webservice.recruit.co.jp/hotpepper/gourmet/v1");
        let url = client.build_url(&[("id", "J001".to_string())]);
        assert_eq!(
            url.as_str(),
            "https://webservice.recruit.co.jp/hotpepper/gourmet/v1/?key=test-key&format=json&id=J001"
        );
    }

    #[test]
    fn build_url_strips_trailing_slash() {
        let client = test_client("https://webservice.recruit.co.jp/hotpepper/gourmet/v1/");
        let url = client.build_url(&[]);
        assert!(url.as_str().starts_with(
            "https://webservice.recruit.co.jp/hotpepper/gourmet/v1/?key=test-key"
        ));
    }

    #[test]
    fn build_url_encodes_search_parameters() {
        let client = test_client("https://webservice.recruit.co.jp/hotpepper/gourmet/v1");
        let query = SearchQuery::new(Coordinate::new(35.66, 139.77), RadiusCode::R2km)
            .with_keyword("ラーメン 深夜");
        let mut params = query.query_pairs();
        params.push(("count", RESULT_COUNT.to_string()));
        let url = client.build_url(&params);
        assert!(url.as_str().contains("range=4"));
        assert!(url.as_str().contains("count=100"));
        // Multibyte keyword must be percent-encoded, never raw.
        assert!(!url.as_str().contains("ラーメン"));
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = HotpepperClient::with_base_url("k", 30, "not a url");
        assert!(matches!(result, Err(HotpepperError::InvalidBaseUrl(_))));
    }

    #[test]
    fn redact_key_elides_credential() {
        let client = test_client("https://webservice.recruit.co.jp/hotpepper/gourmet/v1");
        let url = client.build_url(&[("lat", "35.66".to_string())]);
        let logged = redact_key(&url).to_string();
        assert!(!logged.contains("test-key"), "credential leaked: {logged}");
        assert!(logged.contains("key=***"));
        assert!(logged.contains("lat=35.66"));
    }
}
