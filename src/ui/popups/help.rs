//! Help popup showing the keybindings of each input context.
//!
//! Toggled with `?`, closed with Esc, Enter, `q` or `?`.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
};

use crate::theme::ACCENT_COLOR;
use crate::ui::helpers::create_popup_block;
use crate::ui::layout::centered_popup_area;

// ============================================================================
// Keybinding Data
// ============================================================================

const HELP_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Launches",
        &[
            ("↑ / k", "Previous launch"),
            ("↓ / j", "Next launch (loads more at the bottom)"),
            ("PgUp / PgDn", "Page up / down"),
            ("g / Home", "First launch"),
            ("G / End", "Last launch"),
            ("o / Enter", "Open webcast or article"),
            ("r", "Reload current search"),
        ],
    ),
    (
        "Search",
        &[
            ("/ / f", "Focus search bar"),
            ("Enter", "Search for the keywords"),
            ("Esc / Tab", "Back to launches"),
            ("↑ / ↓", "Search history"),
            ("← / →", "Move cursor"),
        ],
    ),
    (
        "Global",
        &[
            ("?", "Toggle help"),
            ("q / Ctrl+C", "Quit"),
        ],
    ),
];

// ============================================================================
// Public API
// ============================================================================

/// Renders the help popup centered in `area`.
pub fn render(frame: &mut Frame, area: Rect) {
    let width = (area.width * 7 / 10).max(50).min(area.width);
    let height = (help_lines(0).len() as u16 + 2).min(area.height);
    let popup_area = centered_popup_area(area, width, height);

    frame.render_widget(Clear, popup_area);

    let block = create_popup_block("Key Bindings (? to close)");
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let paragraph = Paragraph::new(help_lines(inner.width)).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}

// ============================================================================
// Internal Helpers
// ============================================================================

fn help_lines(width: u16) -> Vec<Line<'static>> {
    let heading = Style::default()
        .fg(ACCENT_COLOR)
        .add_modifier(Modifier::BOLD);
    let mut lines = Vec::new();

    for (section_title, bindings) in HELP_SECTIONS {
        lines.push(Line::from(Span::styled(*section_title, heading)));
        lines.push(Line::from("─".repeat(width.saturating_sub(2) as usize)));

        for (key, description) in *bindings {
            lines.push(Line::from(vec![
                Span::styled(format!("{key:<14}"), Style::default().fg(ACCENT_COLOR)),
                Span::raw(*description),
            ]));
        }
        lines.push(Line::raw(""));
    }
    lines.pop();
    lines
}

// ============================================================================
// Tests
// ============================================================================
