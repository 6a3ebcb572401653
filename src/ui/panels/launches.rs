//! Launch list panel.
//!
//! Cards fill the panel; the last inner row is a status row that shows the
//! loading spinner, the failure message, or the end-of-results marker.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
};

use crate::constants::{END_OF_RESULTS_MESSAGE, SPINNER_FRAMES};
use crate::state::{App, SearchPhase};
use crate::theme::{ERROR_COLOR, MUTED_COLOR, PRIMARY_COLOR, SUCCESS_COLOR, WARNING_COLOR};
use crate::ui::helpers::create_border_block;
use crate::ui::layout::calculate_list_layout;
use crate::widgets::LaunchListWidget;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = create_border_block("Launches", !app.ui.is_search_focused());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.is_empty() {
        return;
    }
    let layout = calculate_list_layout(inner);
    let launches = app.search.results();

    if launches.is_empty() && app.search.phase() == SearchPhase::Loaded {
        let message = Paragraph::new("No launches match this search")
            .style(Style::default().fg(WARNING_COLOR))
            .alignment(Alignment::Center);
        let y = layout.cards.y + layout.cards.height / 2;
        frame.render_widget(message, Rect::new(layout.cards.x, y, layout.cards.width, 1));
    } else {
        frame.render_widget(
            LaunchListWidget::new(launches)
                .selected(app.nav.selected)
                .offset(app.nav.first_visible),
            layout.cards,
        );
    }

    frame.render_widget(status_line(app), layout.status);
}

/// Status row contents for the current search state.
fn status_line(app: &App) -> Paragraph<'static> {
    let search = &app.search;

    if search.is_loading() {
        let frame_index = (app.animation_tick as usize) % SPINNER_FRAMES.len();
        return Paragraph::new(Line::from(format!(
            "{} Loading launches...",
            SPINNER_FRAMES[frame_index]
        )))
        .style(Style::default().fg(PRIMARY_COLOR))
        .alignment(Alignment::Center);
    }

    if let Some(error) = search.error() {
        return Paragraph::new(format!("✗ {error} (scroll down or press r to retry)"))
            .style(Style::default().fg(ERROR_COLOR));
    }

    if !search.has_next_page() {
        return Paragraph::new(END_OF_RESULTS_MESSAGE)
            .style(
                Style::default()
                    .fg(SUCCESS_COLOR)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
    }

    Paragraph::new("↓ scroll for more")
        .style(Style::default().fg(MUTED_COLOR))
        .alignment(Alignment::Center)
}

// ============================================================================
// Tests
// ============================================================================
