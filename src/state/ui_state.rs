//! UI presentation state: focus, the search draft, toasts and help.
//!
//! Nothing here influences which launches are loaded. The search draft is
//! only handed to the search state machine when it is committed.

// ============================================================================
// Constants
// ============================================================================

/// Maximum number of remembered searches.
const MAX_SEARCH_HISTORY: usize = 20;

// ============================================================================
// Focus
// ============================================================================

/// Which element receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The launch card list.
    #[default]
    Results,
    /// The search bar.
    Search,
}

// ============================================================================
// Search Draft
// ============================================================================

/// Uncommitted contents of the search bar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchDraft {
    /// Current text.
    pub text: String,
    /// Cursor position (byte offset, always on a char boundary).
    pub cursor: usize,
    /// Committed searches, most recent first.
    pub history: Vec<String>,
    /// Position while browsing history.
    history_index: Option<usize>,
}

impl SearchDraft {
    /// Creates a draft pre-filled with `text`, cursor at the end.
    #[must_use]
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            cursor: text.len(),
            text,
            ..Self::default()
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.history_index = None;
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Removes the character before the cursor.
    pub fn backspace(&mut self) {
        self.history_index = None;
        if let Some((prev, _)) = self.text[..self.cursor].char_indices().next_back() {
            self.text.remove(prev);
            self.cursor = prev;
        }
    }

    /// Removes the character under the cursor.
    pub fn delete(&mut self) {
        self.history_index = None;
        if self.cursor < self.text.len() {
            self.text.remove(self.cursor);
        }
    }

    pub fn cursor_left(&mut self) {
        if let Some((prev, _)) = self.text[..self.cursor].char_indices().next_back() {
            self.cursor = prev;
        }
    }

    pub fn cursor_right(&mut self) {
        if let Some(c) = self.text[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Returns the trimmed draft as committed keywords and records it in
    /// the history. The draft text stays in the bar.
    pub fn commit(&mut self) -> String {
        self.history_index = None;
        let keywords = self.text.trim().to_string();
        if !keywords.is_empty() {
            self.history.retain(|entry| entry != &keywords);
            self.history.insert(0, keywords.clone());
            self.history.truncate(MAX_SEARCH_HISTORY);
        }
        keywords
    }

    /// Replaces the draft with the previous (older) history entry.
    pub fn history_prev(&mut self) {
        let next = match self.history_index {
            None => 0,
            Some(i) => i + 1,
        };
        if let Some(entry) = self.history.get(next) {
            self.text = entry.clone();
            self.cursor = self.text.len();
            self.history_index = Some(next);
        }
    }

    /// Replaces the draft with the next (newer) history entry, or clears it
    /// when leaving the history.
    pub fn history_next(&mut self) {
        match self.history_index {
            None => {}
            Some(0) => {
                self.history_index = None;
                self.text.clear();
                self.cursor = 0;
            }
            Some(i) => {
                self.text = self.history[i - 1].clone();
                self.cursor = self.text.len();
                self.history_index = Some(i - 1);
            }
        }
    }
}

// ============================================================================
// UI State
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Which element has focus.
    pub focus: Focus,
    /// Search bar contents.
    pub draft: SearchDraft,
    /// Toast message and remaining ticks.
    pub toast: Option<(String, u8)>,
    /// Whether the help popup is open.
    pub show_help: bool,
}

impl UiState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_search_focused(&self) -> bool {
        self.focus == Focus::Search
    }

    pub fn focus_search(&mut self) {
        self.focus = Focus::Search;
        self.draft.cursor_end();
    }

    pub fn focus_results(&mut self) {
        self.focus = Focus::Results;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn show_toast(&mut self, message: impl Into<String>, ticks: u8) {
        self.toast = Some((message.into(), ticks));
    }

    /// Decrements the toast countdown.
    ///
    /// # Returns
    ///
    /// `true` if the toast was removed (countdown reached zero).
    pub fn tick_toast(&mut self) -> bool {
        if let Some((_, ref mut ticks)) = self.toast {
            if *ticks > 1 {
                *ticks -= 1;
                false
            } else {
                self.toast = None;
                true
            }
        } else {
            false
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_and_editing() {
        let mut draft = SearchDraft::default();
        for c in "falcn".chars() {
            draft.insert_char(c);
        }
        draft.cursor_left();
        draft.insert_char('o');
        assert_eq!(draft.text, "falcon");
        assert_eq!(draft.cursor, 5);

        draft.cursor_end();
        draft.backspace();
        assert_eq!(draft.text, "falco");

        draft.cursor_home();
        draft.delete();
        assert_eq!(draft.text, "alco");
        assert_eq!(draft.cursor, 0);

        draft.backspace();
        assert_eq!(draft.text, "alco");
    }

    #[test]
    fn test_multibyte_cursor_movement() {
        let mut draft = SearchDraft::with_text("été");
        draft.cursor_left();
        draft.backspace();
        assert_eq!(draft.text, "éé");
        assert_eq!(draft.cursor, 2);
        draft.cursor_right();
        assert_eq!(draft.cursor, draft.text.len());
    }

    #[test]
    fn test_commit_trims_and_records_history() {
        let mut draft = SearchDraft::with_text("  Falcon  ");
        assert_eq!(draft.commit(), "Falcon");
        assert_eq!(draft.text, "  Falcon  ");

        draft = SearchDraft {
            text: "Dragon".into(),
            cursor: 6,
            ..draft
        };
        draft.commit();
        draft.text = "Falcon".into();
        draft.commit();
        assert_eq!(draft.history, vec!["Falcon", "Dragon"]);

        draft.text = "   ".into();
        assert_eq!(draft.commit(), "");
        assert_eq!(draft.history.len(), 2);
    }

    #[test]
    fn test_history_navigation() {
        let mut draft = SearchDraft::default();
        draft.history = vec!["newest".into(), "older".into()];

        draft.history_prev();
        assert_eq!(draft.text, "newest");
        draft.history_prev();
        assert_eq!(draft.text, "older");
        draft.history_prev();
        assert_eq!(draft.text, "older");

        draft.history_next();
        assert_eq!(draft.text, "newest");
        draft.history_next();
        assert_eq!(draft.text, "");
    }

    #[test]
    fn test_toast_countdown() {
        let mut ui = UiState::new();
        ui.show_toast("Opened", 2);
        assert!(!ui.tick_toast());
        assert!(ui.tick_toast());
        assert!(ui.toast.is_none());
    }

    #[test]
    fn test_focus_search_moves_cursor_to_end() {
        let mut ui = UiState::new();
        ui.draft = SearchDraft::with_text("crs");
        ui.draft.cursor_home();
        ui.focus_search();
        assert!(ui.is_search_focused());
        assert_eq!(ui.draft.cursor, 3);
    }
}
