//! UI helper functions for creating styled blocks.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    symbols::border,
    widgets::{Block, Borders},
};

use crate::theme::{ACCENT_COLOR, BORDER_STYLE, FOCUSED_BORDER_STYLE, FOCUSED_TITLE_STYLE};

// ============================================================================
// Border Block Helpers
// ============================================================================

/// Creates a bordered block with styling based on focus state.
///
/// Focused blocks get a double border and a `●` marker in the title.
///
/// # Example
///
/// ```ignore
/// let focused_block = create_border_block("Launches", true);
/// let unfocused_block = create_border_block("Search", false);
/// ```
#[must_use]
pub fn create_border_block(title: &str, focused: bool) -> Block<'static> {
    let (border_style, border_set, title_style, display_title) = if focused {
        (
            FOCUSED_BORDER_STYLE,
            border::DOUBLE,
            FOCUSED_TITLE_STYLE,
            if title.is_empty() {
                String::new()
            } else {
                format!(" ● {title} ")
            },
        )
    } else {
        (
            BORDER_STYLE,
            border::ROUNDED,
            Style::new()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
            if title.is_empty() {
                String::new()
            } else {
                format!(" {title} ")
            },
        )
    };

    Block::default()
        .borders(Borders::ALL)
        .title(display_title)
        .title_style(title_style)
        .border_set(border_set)
        .border_style(border_style)
}

/// Creates a popup block with a centered title and rounded borders.
#[must_use]
pub fn create_popup_block(title: &str) -> Block<'static> {
    Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(ACCENT_COLOR))
}

// ============================================================================
// Tests
// ============================================================================
