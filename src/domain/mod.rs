//! Domain types for the launchscope explorer.
//!
//! # Module Organization
//!
//! - [`error`] - Error types for launch queries
//! - [`launch`] - Launch records and result pages

// ============================================================================
// Module Declarations
// ============================================================================

pub mod error;
pub mod launch;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::LaunchError;

pub use launch::{
    DETAILS_PLACEHOLDER, FALLBACK_LAUNCH_YEAR, FlickrLinks, ImageSource, LaunchLinks, LaunchPage,
    LaunchRecord,
};
