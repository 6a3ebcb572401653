//! Footer rendering module for the launchscope TUI.
//!
//! Displays the keyboard shortcuts of the active input context.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::commands::InputContext;
use crate::state::App;
use crate::theme::MUTED_COLOR;

// ============================================================================
// Footer Rendering
// ============================================================================

/// Renders the footer bar with keyboard shortcuts.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let footer = Paragraph::new(shortcuts(app.input_context()))
        .style(Style::default().fg(MUTED_COLOR))
        .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}

const fn shortcuts(context: InputContext) -> &'static str {
    match context {
        InputContext::Browse => "q:Quit  /:Search  ↑↓:Scroll  o:Open  r:Refresh  ?:Help",
        InputContext::SearchInput => "Enter:Search  Esc:Back  ↑↓:History",
        InputContext::HelpPopup => "Esc:Close help",
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
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &App, width: u16) -> String {
        let backend = TestBackend::new(width, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), app))
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    /// Tests footer displays all browse shortcuts.
    #[test]
    fn test_footer_displays_browse_shortcuts() {
        let app = App::new(StartupOptions::default(), AppConfig::default()).unwrap();
        let content = draw(&app, 80);

        for shortcut in ["q:Quit", "/:Search", "o:Open", "r:Refresh", "?:Help"] {
            assert!(
                content.contains(shortcut),
                "Footer should contain '{shortcut}', got: {content}"
            );
        }
    }

    #[test]
    fn test_footer_follows_input_context() {
        let mut app = App::new(StartupOptions::default(), AppConfig::default()).unwrap();
        app.ui.focus_search();
        let content = draw(&app, 80);
        assert!(content.contains("Enter:Search"));
        assert!(!content.contains("q:Quit"));
    }

    /// Tests footer rendering handles narrow widths and stays centered.
    #[test]
    fn test_footer_rendering_robustness() {
        let app = App::new(StartupOptions::default(), AppConfig::default()).unwrap();
        let _ = draw(&app, 20);

        let mut terminal = Terminal::new(TestBackend::new(80, 1)).unwrap();
        terminal
            .draw(|frame| render(frame, Rect::new(0, 0, 80, 0), &app))
            .unwrap();

        let mut app = app;
        app.ui.toggle_help();
        let content = draw(&app, 80);
        let leading = content.len() - content.trim_start().len();
        let trailing = content.len() - content.trim_end().len();
        assert!(leading.abs_diff(trailing) <= 1, "footer should be centered");
    }
}
