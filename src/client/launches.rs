//! Launch-query API client.

use std::future::Future;

use super::http::{HttpClient, HttpConfig};
use super::query::LaunchQuery;
use crate::domain::{LaunchError, LaunchPage};

// ============================================================================
// Constants
// ============================================================================

/// Public SpaceX launch-query endpoint.
pub const DEFAULT_API_URL: &str = "https://api.spacexdata.com/v4/launches/query";

// ============================================================================
// Fetcher Trait
// ============================================================================

/// Anything that can fetch one page of launches.
///
/// The application talks to [`LaunchClient`]; tests substitute canned
/// fetchers.
pub trait LaunchFetcher: Clone + Send + Sync + 'static {
    /// Fetch the page described by `query`.
    fn fetch_page(
        &self,
        query: &LaunchQuery,
    ) -> impl Future<Output = Result<LaunchPage, LaunchError>> + Send;
}

// ============================================================================
// Launch Client
// ============================================================================

#[derive(Debug, Clone)]
pub struct LaunchClient {
    /// The launch-query endpoint URL.
    api_url: String,
    /// HTTP client for requests.
    http: HttpClient,
}

impl LaunchClient {
    /// Creates a client for the given endpoint.
    ///
    /// # Errors
    ///
    /// Returns `LaunchError::ClientInit` if the HTTP client fails to initialize.
    pub fn new(api_url: impl Into<String>, config: HttpConfig) -> Result<Self, LaunchError> {
        let http = HttpClient::with_config(config)?;
        tracing::debug!(timeout = ?http.config().timeout, "Launch client ready");
        Ok(Self {
            api_url: api_url.into(),
            http,
        })
    }

    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// POST the query and decode one page of launches.
    ///
    /// # Errors
    ///
    /// - `LaunchError::Network` when the request cannot be sent or the body
    ///   cannot be read
    /// - `LaunchError::Status` for non-2xx responses
    /// - `LaunchError::Parse` when the body is not a launch page
    pub async fn query_launches(&self, query: &LaunchQuery) -> Result<LaunchPage, LaunchError> {
        tracing::debug!(
            keywords = %query.keywords,
            page = query.page,
            "Querying launches"
        );

        let response = self
            .http
            .post_json(&self.api_url, &query.payload())
            .send()
            .await
            .inspect_err(|e| tracing::warn!("Launch query failed to send: {e}"))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Launch query returned status {status}");
            return Err(LaunchError::status(status.as_u16()));
        }

        let body = response.text().await?;
        let page = parse_launch_page(&body)?;

        tracing::debug!(
            docs = page.docs.len(),
            has_next_page = page.has_next_page,
            page = ?page.page,
            total_pages = ?page.total_pages,
            "Launch page received"
        );
        Ok(page)
    }
}

impl LaunchFetcher for LaunchClient {
    async fn fetch_page(&self, query: &LaunchQuery) -> Result<LaunchPage, LaunchError> {
        self.query_launches(query).await
    }
}

/// Decode a launch page from a response body.
///
/// # Errors
///
/// Returns `LaunchError::Parse` if the body is not JSON or lacks `docs`,
/// `hasNextPage`, or a record's required fields.
pub fn parse_launch_page(body: &str) -> Result<LaunchPage, LaunchError> {
    serde_json::from_str(body).map_err(|e| LaunchError::parse(e.to_string()))
}
