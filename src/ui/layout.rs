//! Layout calculations for the launchscope TUI.
//!
//! ```text
//! ┌ header ─────────────────────────────┐  HEADER_HEIGHT
//! ┌ search ─────────────────────────────┐  SEARCH_BAR_HEIGHT
//! ┌ launches ───────────────────────────┐
//! │ cards                               │  list_viewport_height()
//! │ status row                          │  1
//! └─────────────────────────────────────┘
//!   footer                                 FOOTER_HEIGHT
//! ```

use ratatui::layout::{Constraint, Direction, Layout, Rect};

// ============================================================================
// Constants
// ============================================================================

/// Height of the header area in terminal rows
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the search bar
pub const SEARCH_BAR_HEIGHT: u16 = 3;

/// Height of the footer area in terminal rows
pub const FOOTER_HEIGHT: u16 = 1;

/// Status row below the cards (loading, end marker, error).
pub const STATUS_HEIGHT: u16 = 1;

/// Top and bottom border of the launch panel.
const PANEL_BORDER_HEIGHT: u16 = 2;

// ============================================================================
// Layout Structs
// ============================================================================

/// Main application layout areas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub header: Rect,
    pub search: Rect,
    /// Bordered launch panel
    pub list: Rect,
    pub footer: Rect,
}

/// Areas inside the launch panel border
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListLayout {
    pub cards: Rect,
    pub status: Rect,
}

// ============================================================================
// Layout Functions
// ============================================================================

/// Calculate the main application layout from the terminal area
#[must_use]
pub fn calculate_app_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(SEARCH_BAR_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        search: chunks[1],
        list: chunks[2],
        footer: chunks[3],
    }
}

/// Split the inside of the launch panel into cards and the status row
#[must_use]
pub fn calculate_list_layout(inner: Rect) -> ListLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(STATUS_HEIGHT)])
        .split(inner);

    ListLayout {
        cards: chunks[0],
        status: chunks[1],
    }
}

/// Rows available to cards for a terminal `terminal_height` rows tall.
///
/// Matches the `cards` area produced by [`calculate_app_layout`] and
/// [`calculate_list_layout`].
#[must_use]
pub const fn list_viewport_height(terminal_height: u16) -> u16 {
    terminal_height.saturating_sub(
        HEADER_HEIGHT + SEARCH_BAR_HEIGHT + FOOTER_HEIGHT + PANEL_BORDER_HEIGHT + STATUS_HEIGHT,
    )
}

/// Calculate a centered popup area within a parent area
///
/// # Arguments
/// * `parent` - The parent area to center within
/// * `width` - Desired popup width in columns
/// * `height` - Desired popup height in rows
#[must_use]
pub fn centered_popup_area(parent: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(parent.width.saturating_sub(4));
    let popup_height = height.min(parent.height.saturating_sub(4));

    let popup_x = parent.x + (parent.width.saturating_sub(popup_width)) / 2;
    let popup_y = parent.y + (parent.height.saturating_sub(popup_height)) / 2;

    Rect::new(popup_x, popup_y, popup_width, popup_height)
}

// ============================================================================
// Tests
// ============================================================================
