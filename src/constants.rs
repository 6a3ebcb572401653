//! Application constants for the launchscope TUI.
//!
//! Card geometry lives here because both the renderer and the scroll
//! geometry in `state` depend on it.

// ============================================================================
// Card Geometry
// ============================================================================

/// Height of each launch card in the list (in rows).
///
/// - Line 1: flight title
/// - Lines 2-4: details, clamped
/// - Line 5: image source
/// - Line 6: empty spacer
pub const CARD_HEIGHT: u16 = 6;

/// Maximum number of details lines shown on a card.
pub const DETAILS_MAX_LINES: usize = 3;

/// Width of the thumbnail column on the left of each card.
pub const THUMBNAIL_WIDTH: u16 = 12;

// ============================================================================
// Thumbnails
// ============================================================================

/// Bundled placeholder shown when a launch has no photos.
pub const PLACEHOLDER_ART: [&str; 5] = [
    "┌────────┐",
    "│   /\\   │",
    "│  |  |  │",
    "│  /__\\  │",
    "└────────┘",
];

/// Thumbnail frame shown when a launch has a photo.
pub const PHOTO_ART: [&str; 5] = [
    "┌────────┐",
    "│ ▗▄▄▄▖  │",
    "│ ▐ ◉ ▌  │",
    "│ ▝▀▀▀▘  │",
    "└────────┘",
];

// ============================================================================
// Messages
// ============================================================================

/// Shown below the last card once the API reports no further pages.
pub const END_OF_RESULTS_MESSAGE: &str = "🚀 You have viewed all launches!";

/// Placeholder text of the empty search bar.
pub const SEARCH_PLACEHOLDER: &str = "Enter keywords";

/// Ticks a toast stays on screen.
pub const TOAST_TICKS: u8 = 20;

/// Spinner frames for the loading indicator.
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_fits_thumbnail() {
        assert!(PLACEHOLDER_ART.len() < CARD_HEIGHT as usize);
        assert!(DETAILS_MAX_LINES + 2 < CARD_HEIGHT as usize);
        for line in PLACEHOLDER_ART.iter().chain(PHOTO_ART.iter()) {
            assert!(line.chars().count() < THUMBNAIL_WIDTH as usize);
        }
    }
}
