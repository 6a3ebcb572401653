//! Reusable, stateless UI components.
//!
//! - [`toast`] - toast notification overlay for non-blocking messages

pub mod toast;

pub use toast::render_toast;
