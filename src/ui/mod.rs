//! UI rendering module for the launchscope TUI.
//!
//! # Module Structure
//!
//! - `layout` - Layout calculations shared with scroll geometry
//! - `header` - Logo and session status
//! - `search_bar` - Keyword input
//! - `panels` - Launch card list with its status row
//! - `footer` - Contextual shortcuts
//! - `popups` - Help overlay
//! - `components` - Toast notifications
//! - `helpers` - Styled block constructors

pub mod components;
pub mod footer;
pub mod header;
pub mod helpers;
pub mod layout;
pub mod panels;
pub mod popups;
pub mod search_bar;

use ratatui::Frame;

use crate::state::App;

use layout::calculate_app_layout;

// ============================================================================
// Main Render Entry Point
// ============================================================================

/// Draws the whole application, overlays last.
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();
    let layout = calculate_app_layout(size);

    header::render(frame, layout.header, app);
    search_bar::render(frame, layout.search, app);
    panels::launches::render(frame, layout.list, app);
    footer::render(frame, layout.footer, app);

    if app.ui.show_help {
        popups::help::render(frame, size);
    }

    if let Some((message, _)) = &app.ui.toast {
        components::render_toast(frame, size, message);
    }
}
