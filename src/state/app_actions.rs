//! Fetch spawning, scroll sampling and browser actions.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::{App, AppMessage, FetchRequest, SearchEvent};
use crate::client::LaunchFetcher;
use crate::constants::TOAST_TICKS;
use crate::ui::layout::list_viewport_height;

// ============================================================================
// Fetch Tasks
// ============================================================================

/// Runs `request` on a background task and reports the outcome on `tx`.
pub fn spawn_fetch<F: LaunchFetcher>(
    fetcher: F,
    request: FetchRequest,
    tx: mpsc::UnboundedSender<AppMessage>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let FetchRequest { token, query } = request;
        let result = fetcher.fetch_page(&query).await;
        // Receiver may be dropped during shutdown - safe to ignore
        let _ = tx.send(AppMessage::LaunchesFetched { token, result });
    })
}

impl App {
    pub(crate) fn spawn_request(&self, request: FetchRequest) {
        tracing::debug!(
            token = request.token.value(),
            page = request.query.page,
            "Spawning launch fetch"
        );
        spawn_fetch(self.client.clone(), request, self.message_tx.clone());
    }

    // ========================================================================
    // Search Session
    // ========================================================================

    /// Feeds `event` to the search state, resetting view state for new sessions.
    pub(crate) fn handle_search_event(&mut self, event: SearchEvent) -> Option<FetchRequest> {
        if matches!(event, SearchEvent::Submit(_)) {
            self.nav.reset();
            self.scroll.reset();
        }
        self.search.update(event)
    }

    /// Samples the list viewport and requests the next page at the bottom.
    pub(crate) fn sample_scroll(&mut self) -> Option<FetchRequest> {
        let metrics = self
            .nav
            .metrics(self.search.results().len(), self.list_viewport_height());
        if self
            .scroll
            .observe(&metrics, self.search.has_next_page(), self.search.is_loading())
        {
            tracing::debug!(page = self.search.page(), "Reached list bottom");
            self.search.update(SearchEvent::NextPage)
        } else {
            None
        }
    }

    /// Height of the card list in rows for the current terminal size.
    #[must_use]
    pub fn list_viewport_height(&self) -> u16 {
        list_viewport_height(self.terminal_size.1)
    }

    /// Records the new size and samples the list, which may now reach the bottom.
    pub(crate) fn handle_resize(&mut self, width: u16, height: u16) -> Option<FetchRequest> {
        self.terminal_size = (width, height);
        let viewport = self.list_viewport_height();
        self.nav.clamp(self.search.results().len(), viewport);
        self.sample_scroll()
    }

    // ========================================================================
    // Browser
    // ========================================================================

    /// Best link of the selected launch.
    #[must_use]
    pub fn selected_link(&self) -> Option<&str> {
        let index = self.nav.selected?;
        self.search.results().get(index)?.primary_link()
    }

    pub(crate) fn open_selected_in_browser(&mut self) {
        let Some(url) = self.selected_link().map(str::to_string) else {
            self.ui.show_toast("[x] No link for this launch", TOAST_TICKS);
            return;
        };

        match open::that(&url) {
            Ok(()) => {
                tracing::info!(%url, "Opened launch link");
                self.ui.show_toast("[+] Opened in browser", TOAST_TICKS);
            }
            Err(e) => {
                tracing::warn!(%url, "Failed to open browser: {e}");
                self.ui
                    .show_toast(format!("[x] Failed to open browser: {e}"), TOAST_TICKS);
            }
        }
    }
}
