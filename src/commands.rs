//! Command pattern for key event handling in the TUI application.
//!
//! Key events are translated to [`AppCommand`]s by [`KeyMapper`] according
//! to the current [`InputContext`]. The mapping is pure and tested in
//! isolation from the application state.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// ============================================================================
// Input Context
// ============================================================================

/// Which keybindings are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Browsing the launch card list.
    Browse,
    /// Typing in the search bar.
    SearchInput,
    /// Help popup is open.
    HelpPopup,
}

// ============================================================================
// App Commands
// ============================================================================

/// All possible commands the application can execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    // === Application Control ===
    Quit,
    /// Re-run the current search from page one.
    Refresh,
    ToggleHelp,

    // === Focus ===
    FocusSearch,
    /// Leave the search bar or close transient UI.
    Dismiss,

    // === Navigation ===
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    GoToTop,
    GoToBottom,

    // === Card Actions ===
    /// Open the selected launch's link in the browser.
    OpenInBrowser,

    // === Search Input Actions ===
    TypeChar(char),
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    HistoryPrev,
    HistoryNext,
    /// Commit the draft as the new keywords.
    SubmitSearch,

    /// No action to perform (unhandled key).
    Noop,
}

// ============================================================================
// Key Mapper
// ============================================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct KeyMapper;

impl KeyMapper {
    /// Maps a key event to an application command based on the current context.
    #[must_use]
    pub fn map_key(key: KeyEvent, context: &InputContext) -> AppCommand {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return AppCommand::Quit;
        }

        match context {
            InputContext::Browse => Self::map_browse_keys(key),
            InputContext::SearchInput => Self::map_search_input_keys(key),
            InputContext::HelpPopup => Self::map_help_keys(key),
        }
    }

    fn map_browse_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Char('q') => AppCommand::Quit,
            KeyCode::Char('r') => AppCommand::Refresh,
            KeyCode::Char('/' | 'f' | 's') => AppCommand::FocusSearch,
            KeyCode::Char('?') => AppCommand::ToggleHelp,
            KeyCode::Char('o') => AppCommand::OpenInBrowser,
            KeyCode::Up | KeyCode::Char('k') => AppCommand::MoveUp,
            KeyCode::Down | KeyCode::Char('j') => AppCommand::MoveDown,
            KeyCode::PageUp => AppCommand::PageUp,
            KeyCode::PageDown | KeyCode::Char(' ') => AppCommand::PageDown,
            KeyCode::Home | KeyCode::Char('g') => AppCommand::GoToTop,
            KeyCode::End | KeyCode::Char('G') => AppCommand::GoToBottom,
            KeyCode::Enter => AppCommand::OpenInBrowser,
            KeyCode::Esc => AppCommand::Dismiss,
            _ => AppCommand::Noop,
        }
    }

    fn map_search_input_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Enter => AppCommand::SubmitSearch,
            KeyCode::Esc | KeyCode::Tab => AppCommand::Dismiss,
            KeyCode::Backspace => AppCommand::Backspace,
            KeyCode::Delete => AppCommand::Delete,
            KeyCode::Left => AppCommand::CursorLeft,
            KeyCode::Right => AppCommand::CursorRight,
            KeyCode::Home => AppCommand::CursorHome,
            KeyCode::End => AppCommand::CursorEnd,
            KeyCode::Up => AppCommand::HistoryPrev,
            KeyCode::Down => AppCommand::HistoryNext,
            KeyCode::Char(c) => AppCommand::TypeChar(c),
            _ => AppCommand::Noop,
        }
    }

    fn map_help_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?' | 'q') => AppCommand::ToggleHelp,
            _ => AppCommand::Noop,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
