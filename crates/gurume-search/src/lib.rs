//! Search orchestration and location state for the gurume workspace.
//!
//! The orchestrator is the single source of truth for one search context:
//! it turns discrete UI events (location fix, radius change, keyword submit,
//! refresh) into at most one API request each, and applies responses under a
//! request-sequence guard so a superseded request can never overwrite newer
//! results.

mod error;
mod location;
mod orchestrator;

pub use error::SearchError;
pub use location::{AuthorizationStatus, LocationError, LocationProvider};
pub use orchestrator::{
    InitialSearch, SearchBackend, SearchEvent, SearchOrchestrator, SearchRequest, SearchSnapshot,
};
