//! Error types for launch queries.
//!
//! Every failure mode of a launch fetch maps to its own variant so the
//! search state machine can report it instead of treating it as the end of
//! the result set.

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for launch API operations.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// Transport-level failure (DNS, connect, timeout, body read).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered with a non-success HTTP status.
    #[error("Launch API returned HTTP {status}")]
    Status {
        /// The HTTP status code returned by the API.
        status: u16,
    },

    /// The response body did not have the expected shape.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of what failed to parse.
        message: String,
    },

    /// The HTTP client could not be constructed.
    #[error("Failed to initialize HTTP client: {0}")]
    ClientInit(String),
}

impl LaunchError {
    /// Create a new parse error with the given message.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new status error.
    #[must_use]
    pub const fn status(status: u16) -> Self {
        Self::Status { status }
    }

    /// Create a new client initialization error.
    #[must_use]
    pub fn client_init(message: impl Into<String>) -> Self {
        Self::ClientInit(message.into())
    }

    /// Short user-facing label for the error class.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Network(_) => "network",
            Self::Status { .. } => "status",
            Self::Parse { .. } => "parse",
            Self::ClientInit(_) => "client",
        }
    }

    /// Convert to a `color_eyre::Report`.
    #[must_use = "this converts the error into a Report for display"]
    pub fn into_report(self) -> color_eyre::Report {
        color_eyre::eyre::eyre!("{}", self)
    }
}

// ============================================================================
// Tests
// ============================================================================
