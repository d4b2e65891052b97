use gurume_hotpepper::HotpepperError;
use thiserror::Error;

/// Errors surfaced on the orchestrator's snapshot.
///
/// An empty result list is *not* an error; it is a valid state the
/// presentation layer renders as "no results".
#[derive(Debug, Error)]
pub enum SearchError {
    /// No live fix and no configured fallback coordinate when a search was
    /// triggered.
    #[error("location unavailable: no fix and no fallback coordinate configured")]
    LocationUnavailable,

    /// Transport, decode, or not-found failure from the API client.
    #[error(transparent)]
    Api(#[from] HotpepperError),
}
