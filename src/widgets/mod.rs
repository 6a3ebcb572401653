//! Widgets for rendering launch records.
//!
//! - [`helpers`]: text truncation and clamped wrapping
//! - [`launch_card`]: one launch as a fixed-height card
//! - [`launch_list`]: scrolled stack of cards with a scrollbar

pub mod helpers;
pub mod launch_card;
pub mod launch_list;

pub use launch_card::LaunchCard;
pub use launch_list::LaunchListWidget;
