//! Header rendering for the launchscope TUI.
//!
//! Renders the logo on the left and the search status on the right.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::App;
use crate::theme::SUCCESS_COLOR;

use super::helpers::create_border_block;

/// Render the application header
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let header_block = create_border_block("", false);
    frame.render_widget(header_block, area);

    if area.height <= 2 {
        return;
    }

    // Glow while a fetch is in flight
    let title = if app.search.is_loading() {
        create_animated_logo(app.animation_tick)
    } else {
        create_static_logo()
    };

    let title_area = Rect::new(
        area.x + 2,
        area.y + 1,
        14.min(area.width.saturating_sub(2)),
        1,
    );
    frame.render_widget(Paragraph::new(title), title_area);

    if area.width > 40 {
        let status = Paragraph::new(status_text(app))
            .style(
                Style::default()
                    .fg(SUCCESS_COLOR)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Right);
        let status_area = Rect::new(area.x + 17, area.y + 1, area.width - 19, 1);
        frame.render_widget(status, status_area);
    }
}

/// Session summary: keywords, page, loaded count and API total.
#[must_use]
pub fn status_text(app: &App) -> String {
    let search = &app.search;
    let keywords = if search.keywords().is_empty() {
        "all launches".to_string()
    } else {
        format!("\"{}\"", search.keywords())
    };
    let mut text = format!(
        "{keywords} · page {} · {} loaded",
        search.page(),
        search.results().len()
    );
    if let Some(total) = search.total_docs() {
        text.push_str(&format!(" of {total}"));
    }
    text
}

/// Create the animated logo with a shimmer effect
fn create_animated_logo(animation_tick: u64) -> Line<'static> {
    let time = animation_tick as f32 * 0.15;

    let bracket_glow = ((time * 0.8).sin() + 1.0) / 2.0;
    let launch_glow = ((time * 0.8 + 0.5).sin() + 1.0) / 2.0;
    let scope_glow = ((time * 0.8 + 1.0).sin() + 1.0) / 2.0;

    let launch_red = (150.0 + launch_glow * 105.0) as u8;
    let launch_color = Color::Rgb(launch_red, (90.0 + launch_glow * 60.0) as u8, 40);

    let scope_blue = (140.0 + scope_glow * 115.0) as u8;
    let scope_color = Color::Rgb((100.0 * scope_glow) as u8, 200, scope_blue);

    let bracket_intensity = (100.0 + bracket_glow * 155.0) as u8;
    let bracket_color = Color::Rgb(bracket_intensity, bracket_intensity, bracket_intensity);

    Line::from(vec![
        Span::styled("[", Style::default().fg(bracket_color)),
        Span::styled(
            "launch",
            Style::default()
                .fg(launch_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "scope",
            Style::default().fg(scope_color).add_modifier(Modifier::BOLD),
        ),
        Span::styled("]", Style::default().fg(bracket_color)),
    ])
}

/// Create the static logo
fn create_static_logo() -> Line<'static> {
    Line::from(vec![
        "[".into(),
        "launch".yellow().bold(),
        "scope".cyan().bold(),
        "]".into(),
    ])
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{AppConfig, SearchEvent, StartupOptions};
    use crate::test_utils::LaunchMother;

    #[test]
    fn test_logos_have_four_spans() {
        assert_eq!(create_static_logo().spans.len(), 4);
        assert_eq!(create_animated_logo(0).spans.len(), 4);
        assert_eq!(create_animated_logo(100).spans.len(), 4);
    }

    #[test]
    fn test_status_text_reports_session() {
        let mut app = App::new(StartupOptions::default(), AppConfig::default()).unwrap();
        assert_eq!(status_text(&app), "all launches · page 1 · 0 loaded");

        let request = app
            .handle_search_event(SearchEvent::Submit("Falcon".into()))
            .unwrap();
        let mut page = LaunchMother::page(LaunchMother::batch(1, 2), true);
        page.total_docs = Some(205);
        app.handle_message(crate::state::AppMessage::LaunchesFetched {
            token: request.token,
            result: Ok(page),
        });

        assert_eq!(status_text(&app), "\"Falcon\" · page 1 · 2 loaded of 205");
    }
}
