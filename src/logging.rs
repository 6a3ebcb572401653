//! File-backed tracing setup.
//!
//! The UI owns stdout, so events are only recorded when a log file is given.
//! `RUST_LOG` controls the filter, defaulting to [`DEFAULT_FILTER`].

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use color_eyre::Result;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const DEFAULT_FILTER: &str = "launchscope=info";

/// Installs a subscriber writing plain-text events to `log_file`.
///
/// Does nothing when `log_file` is `None`.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or a global subscriber is
/// already installed.
pub fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let env_filter = build_filter(std::env::var("RUST_LOG").ok().as_deref());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(Mutex::new(file)),
        )
        .try_init()?;

    tracing::info!(path = %path.display(), "Logging initialised");
    Ok(())
}

fn build_filter(directive: Option<&str>) -> EnvFilter {
    directive
        .filter(|value| !value.trim().is_empty())
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::unset(None, DEFAULT_FILTER)]
    #[case::blank(Some("  "), DEFAULT_FILTER)]
    #[case::custom(Some("launchscope=debug"), "launchscope=debug")]
    fn test_build_filter(#[case] directive: Option<&str>, #[case] expected: &str) {
        assert_eq!(build_filter(directive).to_string(), expected);
    }

    #[test]
    fn test_init_logging_without_file_is_noop() {
        assert!(init_logging(None).is_ok());
    }
}
