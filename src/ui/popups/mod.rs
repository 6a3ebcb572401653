//! Modal overlays drawn on top of the main UI.

pub mod help;
