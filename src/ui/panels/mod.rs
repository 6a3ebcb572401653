//! Main content panels.

pub mod launches;
