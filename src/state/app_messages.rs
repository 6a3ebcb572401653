//! Message processing for fetch completions.

use super::{App, AppMessage, SearchEvent, SearchPhase};

impl App {
    pub(crate) fn process_messages(&mut self) {
        while let Ok(message) = self.message_rx.try_recv() {
            self.handle_message(message);
        }
    }

    pub(crate) fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::LaunchesFetched { token, result } => {
                let is_current = self.search.current_token() == Some(token);
                let loaded_before = self.search.results().len();
                // Completions never issue a fetch.
                let _ = self.search.update(SearchEvent::Completed { token, result });
                let loaded = self.search.results().len();
                let viewport = self.list_viewport_height();
                self.nav.clamp(loaded, viewport);
                match self.search.phase() {
                    _ if !self.search.has_next_page() => self.scroll.detach(),
                    // Scrolling at the same bottom retries the failed page.
                    SearchPhase::Failed => self.scroll.reset(),
                    // An empty page leaves the content height unchanged.
                    SearchPhase::Loaded if is_current && loaded == loaded_before => {
                        self.scroll.reset();
                    }
                    _ => {}
                }
            }
        }
    }
}
