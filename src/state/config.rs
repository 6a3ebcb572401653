//! Application configuration with persistence.
//!
//! # Configuration File Location
//!
//! The configuration file is stored at:
//! - Linux: `~/.config/launchscope/config.json`
//! - macOS: `~/Library/Application Support/launchscope/config.json`
//! - Windows: `%APPDATA%/launchscope/config.json`
//!
//! Missing fields fall back to their defaults, so a partial file is valid.

use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::client::{DEFAULT_API_URL, HttpConfig};

// ============================================================================
// Constants
// ============================================================================

/// Application name used for configuration directory.
const APP_NAME: &str = "launchscope";

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

const DEFAULT_TICK_RATE_MS: u64 = 100;

// ============================================================================
// AppConfig
// ============================================================================

/// Application configuration structure for persistence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Launch-query endpoint.
    pub api_url: String,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// UI redraw interval in milliseconds.
    pub tick_rate_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
        }
    }
}

impl AppConfig {
    /// Returns the path to the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined
    /// or created.
    pub fn config_path() -> Result<PathBuf> {
        let mut path = dirs::config_dir().ok_or_else(|| {
            color_eyre::eyre::eyre!(
                "Could not determine config directory. Expected XDG_CONFIG_HOME or ~/.config on Linux, ~/Library/Application Support on macOS, %APPDATA% on Windows"
            )
        })?;
        path.push(APP_NAME);
        fs::create_dir_all(&path)?;
        path.push(CONFIG_FILE);
        Ok(path)
    }

    /// Loads the configuration from disk.
    ///
    /// If the configuration file doesn't exist or cannot be parsed,
    /// returns the default configuration.
    #[must_use]
    pub fn load() -> Self {
        match Self::config_path().and_then(|path| Self::try_load_from(&path)) {
            Ok(config) => config,
            Err(err) => {
                tracing::info!("Config load failed, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Attempts to load the configuration from `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn try_load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Saves the configuration to the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined or written.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Saves the configuration to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// HTTP settings derived from this configuration.
    #[must_use]
    pub fn http_config(&self) -> HttpConfig {
        HttpConfig::with_timeout(Duration::from_secs(self.request_timeout_secs.max(1)))
    }

    /// UI tick interval.
    #[must_use]
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(10))
    }
}

// ============================================================================
// Tests
// ============================================================================
