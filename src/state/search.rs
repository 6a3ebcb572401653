//! Pagination and search state machine.
//!
//! [`SearchState`] owns everything a keyword session accumulates. It is
//! mutated only through [`SearchState::update`], which returns the fetch to
//! issue, if any. Fetch results come back as [`SearchEvent::Completed`]
//! tagged with the [`RequestToken`] they were issued under; completions for
//! any token other than the current one are dropped.
//!
//! ```text
//!            Submit / NextPage / Begin
//!   Idle ─────────────────────────────▶ Loading
//!                                       │     │
//!                           Completed(Ok)     Completed(Err)
//!                                       ▼     ▼
//!                                  Loaded     Failed
//! ```

use crate::client::LaunchQuery;
use crate::domain::{LaunchError, LaunchPage, LaunchRecord};

// ============================================================================
// Request Tokens
// ============================================================================

/// Identifies one issued fetch. Tokens increase monotonically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// A fetch the caller must perform and report back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub token: RequestToken,
    pub query: LaunchQuery,
}

// ============================================================================
// Events and Phases
// ============================================================================

/// Inputs to the state machine.
#[derive(Debug)]
pub enum SearchEvent {
    /// Issue the startup fetch for the current keywords and page.
    Begin,
    /// Start a new keyword session.
    Submit(String),
    /// Load the next page of the current session.
    NextPage,
    /// A fetch finished.
    Completed {
        token: RequestToken,
        result: Result<LaunchPage, LaunchError>,
    },
}

/// Where the most recent fetch stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    /// Nothing issued yet.
    #[default]
    Idle,
    Loading,
    Loaded,
    /// The last fetch failed; the next page request retries it.
    Failed,
}

// ============================================================================
// Search State
// ============================================================================

#[derive(Debug)]
pub struct SearchState {
    /// Keywords of the current session.
    keywords: String,
    /// Page of the current (or last) request, starting at 1.
    page: u32,
    /// Records accumulated during the session, in request order.
    results: Vec<LaunchRecord>,
    is_loading: bool,
    has_next_page: bool,
    /// Message of the last failed fetch.
    error: Option<String>,
    phase: SearchPhase,
    /// Total matching records reported by the API.
    total_docs: Option<u64>,
    /// Token of the only fetch whose completion is accepted.
    current: Option<RequestToken>,
    /// Last token handed out.
    last_token: u64,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchState {
    /// Initial state: empty keywords, page 1, loading, more pages assumed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_keywords("")
    }

    /// Initial state for a session that starts with `keywords`.
    #[must_use]
    pub fn with_keywords(keywords: impl Into<String>) -> Self {
        Self {
            keywords: keywords.into(),
            page: 1,
            results: Vec::new(),
            is_loading: true,
            has_next_page: true,
            error: None,
            phase: SearchPhase::Idle,
            total_docs: None,
            current: None,
            last_token: 0,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[must_use]
    pub fn keywords(&self) -> &str {
        &self.keywords
    }

    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    #[must_use]
    pub fn results(&self) -> &[LaunchRecord] {
        &self.results
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.is_loading
    }

    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.has_next_page
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub const fn phase(&self) -> SearchPhase {
        self.phase
    }

    #[must_use]
    pub const fn total_docs(&self) -> Option<u64> {
        self.total_docs
    }

    #[must_use]
    pub const fn current_token(&self) -> Option<RequestToken> {
        self.current
    }

    // ========================================================================
    // Update
    // ========================================================================

    /// Applies one event and returns the fetch to issue, if any.
    pub fn update(&mut self, event: SearchEvent) -> Option<FetchRequest> {
        match event {
            SearchEvent::Begin => Some(self.start_fetch()),
            SearchEvent::Submit(keywords) => {
                self.results.clear();
                self.page = 1;
                self.keywords = keywords;
                self.has_next_page = true;
                self.total_docs = None;
                self.error = None;
                tracing::info!(keywords = %self.keywords, "New search session");
                Some(self.start_fetch())
            }
            SearchEvent::NextPage => {
                if !self.has_next_page || self.is_loading {
                    return None;
                }
                if self.phase != SearchPhase::Failed {
                    self.page += 1;
                }
                Some(self.start_fetch())
            }
            SearchEvent::Completed { token, result } => {
                self.complete(token, result);
                None
            }
        }
    }

    fn start_fetch(&mut self) -> FetchRequest {
        self.last_token += 1;
        let token = RequestToken(self.last_token);
        self.current = Some(token);
        self.is_loading = true;
        self.phase = SearchPhase::Loading;

        FetchRequest {
            token,
            query: LaunchQuery::new(self.keywords.clone(), self.page),
        }
    }

    fn complete(&mut self, token: RequestToken, result: Result<LaunchPage, LaunchError>) {
        if self.current_token() != Some(token) {
            tracing::debug!(
                token = token.value(),
                current = self.current_token().map(RequestToken::value),
                "Dropping stale launch response"
            );
            return;
        }
        self.current = None;
        self.is_loading = false;

        match result {
            Ok(page) => {
                self.results.extend(page.docs);
                self.has_next_page = page.has_next_page;
                if page.total_docs.is_some() {
                    self.total_docs = page.total_docs;
                }
                self.error = None;
                self.phase = SearchPhase::Loaded;
            }
            Err(e) => {
                tracing::warn!(page = self.page, kind = e.kind(), "Launch fetch failed: {e}");
                self.error = Some(e.to_string());
                self.phase = SearchPhase::Failed;
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
