//! Launch list widget.
//!
//! Stacks [`LaunchCard`]s from a scroll offset and draws a scrollbar when
//! the list is longer than the area.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    symbols::scrollbar,
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget},
};

use crate::constants::CARD_HEIGHT;
use crate::domain::LaunchRecord;

use super::launch_card::LaunchCard;

// ============================================================================
// LaunchListWidget
// ============================================================================

#[derive(Debug)]
pub struct LaunchListWidget<'a> {
    launches: &'a [LaunchRecord],
    selected: Option<usize>,
    /// Index of the first visible card.
    offset: usize,
}

impl<'a> LaunchListWidget<'a> {
    #[must_use]
    pub const fn new(launches: &'a [LaunchRecord]) -> Self {
        Self {
            launches,
            selected: None,
            offset: 0,
        }
    }

    #[must_use]
    pub const fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }

    #[must_use]
    pub const fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }
}

impl Widget for LaunchListWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.launches.is_empty() || area.is_empty() {
            return;
        }

        let per_page = usize::from((area.height / CARD_HEIGHT).max(1));
        let overflow = self.launches.len() > per_page;
        let cards_width = if overflow {
            area.width.saturating_sub(1)
        } else {
            area.width
        };

        let start = self.offset.min(self.launches.len() - 1);
        let mut y = area.y;
        for (index, launch) in self.launches.iter().enumerate().skip(start) {
            if y >= area.bottom() {
                break;
            }
            let height = CARD_HEIGHT.min(area.bottom() - y);
            let card_area = Rect::new(area.x, y, cards_width, height);
            LaunchCard::new(launch)
                .selected(self.selected == Some(index))
                .render(card_area, buf);
            y += height;
        }

        if overflow {
            render_list_scrollbar(area, buf, self.launches.len(), per_page, start);
        }
    }
}

/// Draws a vertical scrollbar along the right edge of `area`.
pub fn render_list_scrollbar(
    area: Rect,
    buf: &mut Buffer,
    total_items: usize,
    items_per_page: usize,
    first_visible: usize,
) {
    if total_items <= items_per_page {
        return;
    }

    let scrollbar = Scrollbar::default()
        .orientation(ScrollbarOrientation::VerticalRight)
        .symbols(scrollbar::VERTICAL)
        .track_symbol(None)
        .begin_symbol(None)
        .end_symbol(None)
        .style(Style::default().fg(Color::Gray))
        .track_style(Style::default().fg(Color::DarkGray));

    let card = usize::from(CARD_HEIGHT);
    let mut scrollbar_state = ScrollbarState::default()
        .content_length((total_items - items_per_page) * card)
        .viewport_content_length(items_per_page * card)
        .position(first_visible * card);

    scrollbar.render(area, buf, &mut scrollbar_state);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{LaunchMother, buffer_to_string};

    #[test]
    fn test_renders_cards_from_offset() {
        let launches = LaunchMother::batch(1, 10);
        let area = Rect::new(0, 0, 70, CARD_HEIGHT * 3);
        let mut buf = Buffer::empty(area);

        LaunchListWidget::new(&launches)
            .offset(4)
            .selected(Some(5))
            .render(area, &mut buf);
        let content = buffer_to_string(&buf);

        assert!(!content.contains("Flight 4:"));
        assert!(content.contains("Flight 5:"));
        assert!(content.contains("Flight 7:"));
        assert!(!content.contains("Flight 8:"));
        assert_eq!(buf[(0, CARD_HEIGHT)].symbol(), "▶");
    }

    #[test]
    fn test_partial_last_card_is_clipped() {
        let launches = LaunchMother::batch(1, 3);
        let area = Rect::new(0, 0, 70, CARD_HEIGHT + 2);
        let mut buf = Buffer::empty(area);

        LaunchListWidget::new(&launches).render(area, &mut buf);
        let content = buffer_to_string(&buf);

        assert!(content.contains("Flight 1:"));
        assert!(content.contains("Flight 2:"));
        assert!(!content.contains("Flight 3:"));
    }

    #[test]
    fn test_empty_list_draws_nothing() {
        let area = Rect::new(0, 0, 40, 12);
        let mut buf = Buffer::empty(area);
        LaunchListWidget::new(&[]).offset(3).render(area, &mut buf);
        assert_eq!(buf, Buffer::empty(area));
    }

    #[test]
    fn test_offset_past_end_is_clamped() {
        let launches = LaunchMother::batch(1, 2);
        let area = Rect::new(0, 0, 70, CARD_HEIGHT * 2);
        let mut buf = Buffer::empty(area);
        LaunchListWidget::new(&launches).offset(99).render(area, &mut buf);
        assert!(buffer_to_string(&buf).contains("Flight 2:"));
    }
}
