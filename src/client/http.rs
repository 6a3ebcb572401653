//! HTTP client abstraction for launch API requests.

use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

use crate::domain::LaunchError;

// ============================================================================
// Constants
// ============================================================================

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Idle connections kept per host
const POOL_MAX_IDLE_PER_HOST: usize = 4;

/// Seconds an idle pooled connection is kept
const POOL_IDLE_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// Configuration
// ============================================================================

/// HTTP client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    /// Request timeout
    pub timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl HttpConfig {
    /// Create config with custom timeout
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }
}

// ============================================================================
// HTTP Client
// ============================================================================

/// Base HTTP client wrapper with connection pooling.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
    config: HttpConfig,
}

impl HttpClient {
    /// Create a new HTTP client with custom configuration
    ///
    /// # Errors
    ///
    /// Returns `LaunchError::ClientInit` if the TLS backend or connection
    /// pool cannot be set up.
    pub fn with_config(config: HttpConfig) -> Result<Self, LaunchError> {
        let inner = Client::builder()
            .pool_max_idle_per_host(POOL_MAX_IDLE_PER_HOST)
            .pool_idle_timeout(Duration::from_secs(POOL_IDLE_TIMEOUT_SECS))
            .timeout(config.timeout)
            .build()
            .map_err(|e| LaunchError::client_init(e.to_string()))?;

        Ok(Self { inner, config })
    }

    /// Get the configuration
    #[must_use]
    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    /// Build a JSON POST request with standard headers
    pub fn post_json<T: Serialize + ?Sized>(&self, url: &str, body: &T) -> reqwest::RequestBuilder {
        self.inner
            .post(url)
            .header("accept", "application/json")
            .timeout(self.config.timeout)
            .json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        assert_eq!(
            HttpConfig::default().timeout,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS)
        );
    }

    #[test]
    fn test_client_keeps_config() {
        let config = HttpConfig::with_timeout(Duration::from_secs(3));
        let client = HttpClient::with_config(config.clone()).expect("client should build");
        assert_eq!(client.config(), &config);
    }
}
