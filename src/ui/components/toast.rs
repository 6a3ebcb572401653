//! Toast notification component.
//!
//! A non-blocking overlay in the bottom-right corner. The text color follows
//! the message prefix: `[+]` success, `[x]` error, anything else white.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    symbols::border,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::theme::{ERROR_COLOR, SUCCESS_COLOR};

// ============================================================================
// Constants
// ============================================================================

const MIN_TOAST_WIDTH: u16 = 20;

const TOAST_HEIGHT: u16 = 3;

/// Distance from the right edge.
const TOAST_PADDING_RIGHT: u16 = 2;

/// Distance from the bottom edge, keeps the footer visible.
const TOAST_PADDING_BOTTOM: u16 = 2;

/// Borders plus one space either side.
const TOAST_WIDTH_PADDING: u16 = 4;

// ============================================================================
// Public API
// ============================================================================

/// Renders `message` as a toast inside `area`.
pub fn render_toast(frame: &mut Frame, area: Rect, message: &str) {
    let toast_area = calculate_toast_position(area, message);
    frame.render_widget(Clear, toast_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(Color::DarkGray))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(toast_area);
    frame.render_widget(block, toast_area);

    let text = Paragraph::new(message)
        .style(Style::default().fg(determine_text_color(message)))
        .alignment(Alignment::Center);
    frame.render_widget(text, inner);
}

// ============================================================================
// Internal Helpers
// ============================================================================

fn calculate_toast_position(area: Rect, message: &str) -> Rect {
    let message_len = message.chars().count() as u16;
    let toast_width = (message_len + TOAST_WIDTH_PADDING)
        .min(area.width / 2)
        .max(MIN_TOAST_WIDTH)
        .min(area.width);
    let toast_height = TOAST_HEIGHT.min(area.height);

    let toast_x = area.x + area.width.saturating_sub(toast_width + TOAST_PADDING_RIGHT);
    let toast_y = area.y
        + area
            .height
            .saturating_sub(toast_height + TOAST_PADDING_BOTTOM);

    Rect::new(toast_x, toast_y, toast_width, toast_height)
}

fn determine_text_color(message: &str) -> Color {
    if message.starts_with("[+]") {
        SUCCESS_COLOR
    } else if message.starts_with("[x]") {
        ERROR_COLOR
    } else {
        Color::White
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::rstest;

    #[rstest]
    #[case::short(Rect::new(0, 0, 100, 50), "Hi", MIN_TOAST_WIDTH)]
    #[case::normal(Rect::new(0, 0, 100, 50), "[+] Opened in browser", 25)]
    #[case::long(Rect::new(0, 0, 100, 50), &"x".repeat(80), 50)]
    #[case::narrow(Rect::new(0, 0, 12, 10), "Test", 12)]
    fn test_toast_width(#[case] area: Rect, #[case] message: &str, #[case] expected: u16) {
        let toast = calculate_toast_position(area, message);
        assert_eq!(toast.width, expected);
        assert!(toast.right() <= area.right());
        assert!(toast.bottom() <= area.bottom());
    }

    #[test]
    fn test_toast_sits_above_footer() {
        let toast = calculate_toast_position(Rect::new(0, 0, 100, 50), "Saved");
        assert_eq!(toast.y, 50 - TOAST_HEIGHT - TOAST_PADDING_BOTTOM);
        assert_eq!(toast.x, 100 - MIN_TOAST_WIDTH - TOAST_PADDING_RIGHT);
    }

    #[rstest]
    #[case::success("[+] Opened in browser", SUCCESS_COLOR)]
    #[case::error("[x] No link for this launch", ERROR_COLOR)]
    #[case::info("Loading", Color::White)]
    #[case::empty("", Color::White)]
    fn test_determine_text_color(#[case] message: &str, #[case] expected: Color) {
        assert_eq!(determine_text_color(message), expected);
    }

    #[test]
    fn test_render_toast_draws_message() {
        let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
        terminal
            .draw(|frame| render_toast(frame, frame.area(), "[+] Opened"))
            .unwrap();
        assert!(buffer_to_string(terminal.backend().buffer()).contains("[+] Opened"));
    }
}
