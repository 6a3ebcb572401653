//! Selection and scroll position of the launch card list.
//!
//! The list scrolls in whole cards. Scroll geometry is exposed as
//! [`ViewportMetrics`] in lines so the scroll trigger sees the same numbers
//! a document would report.

use super::scroll::ViewportMetrics;
use crate::constants::CARD_HEIGHT;

// ============================================================================
// List Navigation
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListNavigation {
    /// Index of the selected card.
    pub selected: Option<usize>,
    /// Index of the first visible card.
    pub first_visible: usize,
}

impl ListNavigation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets selection and scroll position.
    pub fn reset(&mut self) {
        self.selected = None;
        self.first_visible = 0;
    }

    /// Number of whole cards that fit in `viewport_height` lines (at least one).
    #[must_use]
    pub fn cards_per_page(viewport_height: u16) -> usize {
        (viewport_height / CARD_HEIGHT).max(1) as usize
    }

    /// Current scroll geometry for a list of `len` cards.
    ///
    /// The visible height is counted in whole cards, matching how far
    /// navigation can scroll, so a viewport shorter than one card still
    /// reaches the bottom.
    #[must_use]
    pub fn metrics(&self, len: usize, viewport_height: u16) -> ViewportMetrics {
        let card = u32::from(CARD_HEIGHT);
        ViewportMetrics::new(
            self.first_visible as u32 * card,
            Self::cards_per_page(viewport_height) as u32 * card,
            len as u32 * card,
        )
    }

    pub fn move_down(&mut self, len: usize, viewport_height: u16) {
        self.move_by(1, len, viewport_height);
    }

    pub fn move_up(&mut self, len: usize, viewport_height: u16) {
        self.move_by(-1, len, viewport_height);
    }

    pub fn page_down(&mut self, len: usize, viewport_height: u16) {
        let step = Self::cards_per_page(viewport_height) as isize;
        self.move_by(step, len, viewport_height);
    }

    pub fn page_up(&mut self, len: usize, viewport_height: u16) {
        let step = Self::cards_per_page(viewport_height) as isize;
        self.move_by(-step, len, viewport_height);
    }

    pub fn go_to_top(&mut self, len: usize) {
        if len == 0 {
            self.reset();
            return;
        }
        self.selected = Some(0);
        self.first_visible = 0;
    }

    pub fn go_to_bottom(&mut self, len: usize, viewport_height: u16) {
        if len == 0 {
            self.reset();
            return;
        }
        self.selected = Some(len - 1);
        self.ensure_visible(viewport_height);
    }

    /// Keeps the selection inside `len` items and visible.
    pub fn clamp(&mut self, len: usize, viewport_height: u16) {
        if len == 0 {
            self.reset();
            return;
        }
        if let Some(selected) = self.selected {
            self.selected = Some(selected.min(len - 1));
        }
        self.first_visible = self.first_visible.min(len - 1);
        self.ensure_visible(viewport_height);
    }

    fn move_by(&mut self, delta: isize, len: usize, viewport_height: u16) {
        if len == 0 {
            self.reset();
            return;
        }
        let next = match self.selected {
            None if delta >= 0 => 0,
            None => len - 1,
            Some(current) => current.saturating_add_signed(delta).min(len - 1),
        };
        self.selected = Some(next);
        self.ensure_visible(viewport_height);
    }

    fn ensure_visible(&mut self, viewport_height: u16) {
        let Some(selected) = self.selected else {
            return;
        };
        let per_page = Self::cards_per_page(viewport_height);
        if selected < self.first_visible {
            self.first_visible = selected;
        } else if selected >= self.first_visible + per_page {
            self.first_visible = selected + 1 - per_page;
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Three cards fit.
    const VIEWPORT: u16 = CARD_HEIGHT * 3;

    #[test]
    fn test_first_move_selects_first_card() {
        let mut nav = ListNavigation::new();
        nav.move_down(10, VIEWPORT);
        assert_eq!(nav.selected, Some(0));
        assert_eq!(nav.first_visible, 0);
    }

    #[test]
    fn test_scrolls_to_keep_selection_visible() {
        let mut nav = ListNavigation::new();
        for _ in 0..5 {
            nav.move_down(10, VIEWPORT);
        }
        assert_eq!(nav.selected, Some(4));
        assert_eq!(nav.first_visible, 2);

        for _ in 0..4 {
            nav.move_up(10, VIEWPORT);
        }
        assert_eq!(nav.selected, Some(0));
        assert_eq!(nav.first_visible, 0);
    }

    #[test]
    fn test_selection_stops_at_ends() {
        let mut nav = ListNavigation::new();
        nav.go_to_bottom(4, VIEWPORT);
        nav.move_down(4, VIEWPORT);
        assert_eq!(nav.selected, Some(3));

        nav.go_to_top(4);
        nav.move_up(4, VIEWPORT);
        assert_eq!(nav.selected, Some(0));
    }

    #[test]
    fn test_bottom_reports_at_bottom_metrics() {
        let mut nav = ListNavigation::new();
        assert!(!nav.metrics(10, VIEWPORT).at_bottom());

        nav.go_to_bottom(10, VIEWPORT);
        let metrics = nav.metrics(10, VIEWPORT);
        assert_eq!(metrics.scroll_top, 7 * u32::from(CARD_HEIGHT));
        assert!(metrics.at_bottom());
    }

    #[test]
    fn test_short_viewport_reaches_bottom() {
        let short = CARD_HEIGHT - 2;
        let mut nav = ListNavigation::new();
        nav.go_to_bottom(3, short);

        let metrics = nav.metrics(3, short);
        assert_eq!(nav.first_visible, 2);
        assert_eq!(metrics.client_height, u32::from(CARD_HEIGHT));
        assert!(metrics.at_bottom());
    }

    #[test]
    fn test_partial_card_rows_are_not_scrollable() {
        let mut nav = ListNavigation::new();
        nav.go_to_bottom(10, VIEWPORT + 2);
        let metrics = nav.metrics(10, VIEWPORT + 2);
        assert_eq!(metrics.client_height, u32::from(VIEWPORT));
        assert!(metrics.at_bottom());
    }

    #[test]
    fn test_paging_moves_by_visible_cards() {
        let mut nav = ListNavigation::new();
        nav.go_to_top(10);
        nav.page_down(10, VIEWPORT);
        assert_eq!(nav.selected, Some(3));
        nav.page_up(10, VIEWPORT);
        assert_eq!(nav.selected, Some(0));
    }

    #[test]
    fn test_empty_list_resets() {
        let mut nav = ListNavigation {
            selected: Some(4),
            first_visible: 2,
        };
        nav.move_down(0, VIEWPORT);
        assert_eq!(nav, ListNavigation::default());
    }

    #[test]
    fn test_tiny_viewport_still_shows_one_card() {
        assert_eq!(ListNavigation::cards_per_page(1), 1);
        assert_eq!(ListNavigation::cards_per_page(0), 1);
    }
}
