//! HTTP client for the launch-query API.
//!
//! - [`query`] - Builds request payloads from keywords and a page number
//! - [`launches`] - Sends queries and decodes result pages
//! - [`http`] - Shared reqwest wrapper
//!
//! # Example
//!
//! ```ignore
//! use crate::client::{HttpConfig, LaunchClient, LaunchQuery, DEFAULT_API_URL};
//!
//! let client = LaunchClient::new(DEFAULT_API_URL, HttpConfig::default())?;
//! let page = client.query_launches(&LaunchQuery::new("falcon", 1)).await?;
//! ```

pub mod http;
pub mod launches;
pub mod query;


// ============================================================================
// Re-exports
// ============================================================================

pub use http::{HttpClient, HttpConfig};
pub use launches::{DEFAULT_API_URL, LaunchClient, LaunchFetcher, parse_launch_page};
pub use query::LaunchQuery;
