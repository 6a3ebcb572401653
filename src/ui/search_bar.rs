//! Search bar rendering.
//!
//! Shows the uncommitted draft, or the placeholder when it is empty. The
//! terminal cursor is placed in the draft while the bar has focus.

use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::constants::SEARCH_PLACEHOLDER;
use crate::state::App;
use crate::theme::{MUTED_COLOR, PLACEHOLDER_STYLE};

use super::helpers::create_border_block;

/// Prompt drawn before the draft.
const PROMPT: &str = "🔍 ";

/// Columns taken by [`PROMPT`].
const PROMPT_WIDTH: u16 = 3;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.ui.is_search_focused();
    let block = create_border_block("Search", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.is_empty() {
        return;
    }

    let draft = &app.ui.draft;
    let mut spans = vec![Span::raw(PROMPT)];
    if draft.text.is_empty() {
        spans.push(Span::styled(SEARCH_PLACEHOLDER, PLACEHOLDER_STYLE));
    } else {
        spans.push(Span::raw(draft.text.as_str()));
    }
    if focused && draft.text.trim() != app.search.keywords() {
        spans.push(Span::styled(
            "  (Enter to search)",
            Style::default().fg(MUTED_COLOR),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), inner);

    if focused {
        let cursor_column = draft.text[..draft.cursor].chars().count() as u16;
        let x = (inner.x + PROMPT_WIDTH + cursor_column).min(inner.right().saturating_sub(1));
        frame.set_cursor_position(Position::new(x, inner.y));
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{AppConfig, StartupOptions};
    use crate::test_utils::buffer_to_string;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(app: &App) -> (String, Position) {
        let mut terminal = Terminal::new(TestBackend::new(50, 3)).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), app))
            .unwrap();
        let cursor = terminal.get_cursor_position().unwrap();
        (buffer_to_string(terminal.backend().buffer()), cursor)
    }

    fn test_app() -> App {
        App::new(StartupOptions::default(), AppConfig::default()).unwrap()
    }

    #[test]
    fn test_placeholder_when_draft_empty() {
        let (content, _) = draw(&test_app());
        assert!(content.contains("Enter keywords"));
    }

    #[test]
    fn test_focused_draft_shows_hint_and_cursor() {
        let mut app = test_app();
        app.ui.focus_search();
        for c in "Falcon".chars() {
            app.ui.draft.insert_char(c);
        }

        let (content, cursor) = draw(&app);
        assert!(content.contains("Falcon"));
        assert!(content.contains("(Enter to search)"));
        assert!(!content.contains("Enter keywords"));
        assert_eq!(cursor, Position::new(1 + PROMPT_WIDTH + 6, 1));
    }

    #[test]
    fn test_committed_draft_has_no_hint() {
        let options = StartupOptions {
            keywords: Some("Dragon".into()),
            api_url: None,
        };
        let mut app = App::new(options, AppConfig::default()).unwrap();
        app.ui.focus_search();

        let (content, _) = draw(&app);
        assert!(content.contains("Dragon"));
        assert!(!content.contains("(Enter to search)"));
    }
}
