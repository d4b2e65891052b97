//! Event-driven search orchestration.
//!
//! One [`SearchOrchestrator`] owns the query/result state for one search
//! context. Triggering events are discrete inputs; each one either updates
//! selection state or yields a [`SearchRequest`] tagged with a monotonically
//! increasing sequence number. A completion is applied only while its
//! sequence number is still the latest issued, so overlapping requests
//! resolve as "last request wins" rather than "last to complete wins".

use gurume_core::Coordinate;
use gurume_hotpepper::{
    HotpepperClient, HotpepperError, RadiusCode, Restaurant, SearchQuery, BUDGET_ANY, GENRE_ALL,
};

use crate::error::SearchError;

/// Seam between the orchestrator and the HTTP client, so tests can inject
/// an in-memory backend.
///
/// State mutation is confined to a single UI-bound thread; the returned
/// futures are not required to be `Send`.
#[allow(async_fn_in_trait)]
pub trait SearchBackend {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Restaurant>, HotpepperError>;
}

impl SearchBackend for HotpepperClient {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Restaurant>, HotpepperError> {
        self.search_restaurants(query).await
    }
}

/// What the first location fix should search for.
///
/// This replaces the original per-screen view-model variants with one
/// orchestrator parameterized by its initial query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitialSearch {
    /// Everything nearby: empty keyword, no filters.
    Unfiltered,
    /// A fixed keyword plus whatever filters are currently selected.
    Keyword(String),
}

/// Discrete triggering events, evaluated independently.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// A location fix arrived. The first fix triggers the initial search if
    /// none has been issued yet; later fixes only refresh the stored
    /// coordinate.
    LocationReady(Coordinate),
    /// The user picked a new radius. Re-issues the last search at the new
    /// radius; a no-op if unchanged or before any search.
    RadiusChanged(RadiusCode),
    /// Selection-only: remembered for the next submitted search.
    GenreSelected(String),
    /// Selection-only: remembered for the next submitted search.
    BudgetSelected(String),
    /// Explicit submit. Empty keywords are ignored.
    KeywordSubmitted(String),
    /// Pull-to-refresh: re-issues the last search unchanged.
    RefreshRequested,
}

/// A search the orchestrator has decided to run, tagged with its sequence
/// number. Hand the result back via [`SearchOrchestrator::complete`].
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub seq: u64,
    pub query: SearchQuery,
}

/// The state the presentation layer renders.
#[derive(Debug, Default)]
pub struct SearchSnapshot {
    /// The most recently issued query, if any.
    pub query: Option<SearchQuery>,
    /// Results in provider order, replaced wholesale on each completion.
    pub restaurants: Vec<Restaurant>,
    pub is_loading: bool,
    pub error: Option<SearchError>,
    /// True once any search has completed, success or failure. Used to tell
    /// "no results" apart from "never searched".
    pub has_performed_search: bool,
}

pub struct SearchOrchestrator {
    initial: InitialSearch,
    /// Used when a search triggers before any fix has arrived. Absent means
    /// such a trigger surfaces [`SearchError::LocationUnavailable`] instead.
    fallback: Option<Coordinate>,
    coordinate: Option<Coordinate>,
    radius: RadiusCode,
    selected_genre: String,
    selected_budget: String,
    last_keyword: Option<String>,
    last_query: Option<SearchQuery>,
    latest_seq: u64,
    snapshot: SearchSnapshot,
}

impl SearchOrchestrator {
    #[must_use]
    pub fn new(initial: InitialSearch, fallback: Option<Coordinate>) -> Self {
        Self {
            initial,
            fallback,
            coordinate: None,
            radius: RadiusCode::default(),
            selected_genre: GENRE_ALL.to_string(),
            selected_budget: BUDGET_ANY.to_string(),
            last_keyword: None,
            last_query: None,
            latest_seq: 0,
            snapshot: SearchSnapshot::default(),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> &SearchSnapshot {
        &self.snapshot
    }

    #[must_use]
    pub fn radius(&self) -> RadiusCode {
        self.radius
    }

    #[must_use]
    pub fn selected_genre(&self) -> &str {
        &self.selected_genre
    }

    #[must_use]
    pub fn selected_budget(&self) -> &str {
        &self.selected_budget
    }

    #[must_use]
    pub fn last_keyword(&self) -> Option<&str> {
        self.last_keyword.as_deref()
    }

    /// Evaluates one event and returns the search it triggers, if any.
    ///
    /// When a request is returned the snapshot is already marked loading and
    /// its error cleared; run the request and feed the outcome to
    /// [`SearchOrchestrator::complete`].
    pub fn apply(&mut self, event: SearchEvent) -> Option<SearchRequest> {
        match event {
            SearchEvent::LocationReady(coordinate) => {
                self.coordinate = Some(coordinate);
                // Only the very first fix may trigger the initial search,
                // and only while no request has ever been issued.
                if self.latest_seq > 0 || self.snapshot.has_performed_search {
                    return None;
                }
                let query = match self.initial.clone() {
                    InitialSearch::Unfiltered => SearchQuery::new(coordinate, self.radius),
                    InitialSearch::Keyword(keyword) => {
                        self.last_keyword = Some(keyword.clone());
                        self.filtered_query(coordinate).with_keyword(&keyword)
                    }
                };
                Some(self.issue(query))
            }
            SearchEvent::RadiusChanged(radius) => {
                if radius == self.radius {
                    return None;
                }
                self.radius = radius;
                // Guard: nothing to re-issue before the first search.
                let mut query = self.last_query.clone()?;
                query.radius = radius;
                Some(self.issue(query))
            }
            SearchEvent::GenreSelected(label) => {
                self.selected_genre = label;
                None
            }
            SearchEvent::BudgetSelected(label) => {
                self.selected_budget = label;
                None
            }
            SearchEvent::KeywordSubmitted(keyword) => {
                let keyword = keyword.trim().to_string();
                if keyword.is_empty() {
                    return None;
                }
                let coordinate = self.resolve_coordinate()?;
                self.last_keyword = Some(keyword.clone());
                let query = self.filtered_query(coordinate).with_keyword(&keyword);
                Some(self.issue(query))
            }
            SearchEvent::RefreshRequested => {
                let query = self.last_query.clone()?;
                Some(self.issue(query))
            }
        }
    }

    /// Applies a finished request's outcome to the snapshot.
    ///
    /// A completion whose sequence number is no longer the latest issued is
    /// discarded: a newer request supersedes it regardless of which HTTP
    /// response lands first.
    pub fn complete(
        &mut self,
        request: &SearchRequest,
        result: Result<Vec<Restaurant>, HotpepperError>,
    ) {
        if request.seq != self.latest_seq {
            tracing::debug!(
                seq = request.seq,
                latest = self.latest_seq,
                "discarding stale search response"
            );
            return;
        }

        self.snapshot.is_loading = false;
        self.snapshot.has_performed_search = true;
        match result {
            Ok(restaurants) => {
                tracing::debug!(seq = request.seq, shops = restaurants.len(), "search completed");
                self.snapshot.restaurants = restaurants;
                self.snapshot.error = None;
            }
            Err(err) => {
                tracing::warn!(seq = request.seq, error = %err, "search failed");
                self.snapshot.error = Some(SearchError::Api(err));
                self.snapshot.restaurants.clear();
            }
        }
    }

    /// Convenience for callers without overlapping requests: evaluate the
    /// event, run any triggered search on `backend`, apply the outcome.
    pub async fn dispatch<B: SearchBackend>(
        &mut self,
        event: SearchEvent,
        backend: &B,
    ) -> &SearchSnapshot {
        if let Some(request) = self.apply(event) {
            let result = backend.search(&request.query).await;
            self.complete(&request, result);
        }
        self.snapshot()
    }

    fn filtered_query(&self, coordinate: Coordinate) -> SearchQuery {
        SearchQuery::new(coordinate, self.radius)
            .with_genre_label(&self.selected_genre)
            .with_budget_label(&self.selected_budget)
    }

    /// Live fix if one has arrived, else the configured fallback. With
    /// neither, records `LocationUnavailable` on the snapshot and yields
    /// nothing.
    fn resolve_coordinate(&mut self) -> Option<Coordinate> {
        let resolved = self.coordinate.or(self.fallback);
        if resolved.is_none() {
            self.snapshot.error = Some(SearchError::LocationUnavailable);
        }
        resolved
    }

    fn issue(&mut self, query: SearchQuery) -> SearchRequest {
        self.latest_seq += 1;
        self.snapshot.is_loading = true;
        self.snapshot.error = None;
        self.snapshot.query = Some(query.clone());
        self.last_query = Some(query.clone());
        tracing::debug!(seq = self.latest_seq, "search issued");
        SearchRequest {
            seq: self.latest_seq,
            query,
        }
    }
}
