//! Launch card widget.
//!
//! ```text
//!   ┌────────┐  Flight 1: Mission FalconSat (2006)
//!   │   /\   │  Details: Engine failure at 33 seconds and loss of
//!   │  |  |  │  vehicle
//!   │  /__\  │
//!   └────────┘  Image: none
//! ```

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use crate::constants::{DETAILS_MAX_LINES, PHOTO_ART, PLACEHOLDER_ART, THUMBNAIL_WIDTH};
use crate::domain::{ImageSource, LaunchRecord};
use crate::theme::{MUTED_COLOR, PRIMARY_COLOR, SECONDARY_COLOR, SELECTED_STYLE};

use super::helpers::{truncate_with_ellipsis, wrap_clamped};

/// Columns left of the thumbnail (selection marker and a space).
const MARKER_WIDTH: u16 = 2;

/// Row of the image line within a card.
const IMAGE_ROW: u16 = 1 + DETAILS_MAX_LINES as u16;

// ============================================================================
// LaunchCard
// ============================================================================

/// One launch rendered as a fixed-height card.
#[derive(Debug, Clone, Copy)]
pub struct LaunchCard<'a> {
    launch: &'a LaunchRecord,
    selected: bool,
}

impl<'a> LaunchCard<'a> {
    #[must_use]
    pub const fn new(launch: &'a LaunchRecord) -> Self {
        Self {
            launch,
            selected: false,
        }
    }

    #[must_use]
    pub const fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Details body, clamped to the card's detail rows.
    #[must_use]
    pub fn details_lines(&self, width: usize) -> Vec<String> {
        wrap_clamped(
            &format!("Details: {}", self.launch.details_text()),
            width,
            DETAILS_MAX_LINES,
        )
    }

    /// Text of the image row.
    #[must_use]
    pub fn image_line(&self) -> String {
        match self.launch.image() {
            ImageSource::Remote(url) => format!("Image: {url}"),
            ImageSource::Placeholder => "Image: none".to_string(),
        }
    }
}

impl Widget for LaunchCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width <= MARKER_WIDTH || area.height == 0 {
            return;
        }

        if self.selected {
            buf.set_style(area, SELECTED_STYLE);
            buf.set_string(area.x, area.y, "▶", Style::default().fg(PRIMARY_COLOR));
        }

        // Thumbnail
        let art = match self.launch.image() {
            ImageSource::Remote(_) => &PHOTO_ART,
            ImageSource::Placeholder => &PLACEHOLDER_ART,
        };
        let art_style = Style::default().fg(MUTED_COLOR);
        for (row, line) in (0..area.height).zip(art.iter()) {
            buf.set_stringn(
                area.x + MARKER_WIDTH,
                area.y + row,
                line,
                usize::from(area.width - MARKER_WIDTH),
                art_style,
            );
        }

        // Text column
        let text_x = area.x + MARKER_WIDTH + THUMBNAIL_WIDTH;
        if text_x >= area.right() {
            return;
        }
        let text_width = usize::from(area.right() - text_x);

        let title_style = Style::default()
            .fg(PRIMARY_COLOR)
            .add_modifier(Modifier::BOLD);
        buf.set_string(
            text_x,
            area.y,
            truncate_with_ellipsis(&self.launch.title(), text_width),
            title_style,
        );

        for (row, line) in (1..area.height).zip(self.details_lines(text_width)) {
            buf.set_string(text_x, area.y + row, line, Style::default());
        }

        if IMAGE_ROW < area.height {
            buf.set_string(
                text_x,
                area.y + IMAGE_ROW,
                truncate_with_ellipsis(&self.image_line(), text_width),
                Style::default().fg(SECONDARY_COLOR),
            );
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
