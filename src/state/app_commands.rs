//! Command execution and input handling.
//!
//! Key and mouse input is mapped to [`AppCommand`]s and executed against the
//! application state. Execution never touches the network: commands that
//! need a fetch return the [`FetchRequest`] and the caller spawns it.

use crossterm::event::{KeyEvent, MouseEvent, MouseEventKind};

use super::{App, FetchRequest, SearchEvent};
use crate::commands::{AppCommand, InputContext, KeyMapper};

impl App {
    pub(crate) fn handle_key_event(&mut self, key_event: KeyEvent) {
        let context = self.input_context();
        let command = KeyMapper::map_key(key_event, &context);
        if let Some(request) = self.execute_command(command) {
            self.spawn_request(request);
        }
    }

    pub(crate) fn handle_mouse_input(&mut self, mouse: MouseEvent) {
        if self.ui.show_help {
            return;
        }
        let command = match mouse.kind {
            MouseEventKind::ScrollUp => AppCommand::MoveUp,
            MouseEventKind::ScrollDown => AppCommand::MoveDown,
            _ => return,
        };
        if let Some(request) = self.execute_command(command) {
            self.spawn_request(request);
        }
    }

    /// Determines which keybindings are active.
    #[must_use]
    pub fn input_context(&self) -> InputContext {
        if self.ui.show_help {
            InputContext::HelpPopup
        } else if self.ui.is_search_focused() {
            InputContext::SearchInput
        } else {
            InputContext::Browse
        }
    }

    /// Executes an application command.
    ///
    /// # Returns
    ///
    /// The fetch to spawn, if the command started one.
    pub(crate) fn execute_command(&mut self, command: AppCommand) -> Option<FetchRequest> {
        let len = self.search.results().len();
        let viewport = self.list_viewport_height();

        match command {
            // === Application Control ===
            AppCommand::Quit => {
                self.exit = true;
                None
            }
            AppCommand::Refresh => {
                let keywords = self.search.keywords().to_string();
                self.handle_search_event(SearchEvent::Submit(keywords))
            }
            AppCommand::ToggleHelp => {
                self.ui.toggle_help();
                None
            }

            // === Focus ===
            AppCommand::FocusSearch => {
                self.ui.focus_search();
                None
            }
            AppCommand::Dismiss => {
                self.ui.focus_results();
                None
            }

            // === Navigation ===
            AppCommand::MoveUp
            | AppCommand::MoveDown
            | AppCommand::PageUp
            | AppCommand::PageDown
            | AppCommand::GoToTop
            | AppCommand::GoToBottom => {
                match command {
                    AppCommand::MoveUp => self.nav.move_up(len, viewport),
                    AppCommand::MoveDown => self.nav.move_down(len, viewport),
                    AppCommand::PageUp => self.nav.page_up(len, viewport),
                    AppCommand::PageDown => self.nav.page_down(len, viewport),
                    AppCommand::GoToTop => self.nav.go_to_top(len),
                    _ => self.nav.go_to_bottom(len, viewport),
                }
                self.sample_scroll()
            }

            // === Card Actions ===
            AppCommand::OpenInBrowser => {
                self.open_selected_in_browser();
                None
            }

            // === Search Input ===
            AppCommand::TypeChar(c) => {
                self.ui.draft.insert_char(c);
                None
            }
            AppCommand::Backspace => {
                self.ui.draft.backspace();
                None
            }
            AppCommand::Delete => {
                self.ui.draft.delete();
                None
            }
            AppCommand::CursorLeft => {
                self.ui.draft.cursor_left();
                None
            }
            AppCommand::CursorRight => {
                self.ui.draft.cursor_right();
                None
            }
            AppCommand::CursorHome => {
                self.ui.draft.cursor_home();
                None
            }
            AppCommand::CursorEnd => {
                self.ui.draft.cursor_end();
                None
            }
            AppCommand::HistoryPrev => {
                self.ui.draft.history_prev();
                None
            }
            AppCommand::HistoryNext => {
                self.ui.draft.history_next();
                None
            }
            AppCommand::SubmitSearch => {
                let keywords = self.ui.draft.commit();
                self.ui.focus_results();
                self.handle_search_event(SearchEvent::Submit(keywords))
            }

            AppCommand::Noop => None,
        }
    }
}
