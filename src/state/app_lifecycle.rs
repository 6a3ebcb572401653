//! Application lifecycle management.
//!
//! - `new()` - builds the application from startup options and config
//! - `run()` - main event loop

use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

use crate::client::LaunchClient;
use crate::tui::Tui;
use crate::ui;

use super::{
    App, AppConfig, ListNavigation, ScrollTrigger, SearchDraft, SearchEvent, SearchState,
    StartupOptions, UiState,
};

// ============================================================================
// Lifecycle Methods
// ============================================================================

impl App {
    /// Creates a new App instance.
    ///
    /// The startup keywords become the first search session and are shown
    /// in the search bar.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(startup_options: StartupOptions, mut config: AppConfig) -> Result<Self> {
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        if let Some(api_url) = startup_options.api_url {
            config.api_url = api_url;
        }
        let client = LaunchClient::new(config.api_url.clone(), config.http_config())
            .map_err(|e| e.into_report())?;

        let keywords = startup_options
            .keywords
            .map(|k| k.trim().to_string())
            .unwrap_or_default();

        let mut ui = UiState::new();
        ui.draft = SearchDraft::with_text(keywords.clone());

        tracing::info!(api_url = %config.api_url, keywords = %keywords, "Starting launchscope");

        Ok(Self {
            search: SearchState::with_keywords(keywords),
            scroll: ScrollTrigger::new(),
            nav: ListNavigation::new(),
            ui,
            config,
            exit: false,
            animation_tick: 0,
            terminal_size: (0, 0),
            message_tx,
            message_rx,
            client,
        })
    }

    /// Runs the main application loop.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal operations fail.
    pub async fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        let size = terminal.size()?;
        self.terminal_size = (size.width, size.height);

        if let Some(request) = self.search.update(SearchEvent::Begin) {
            self.spawn_request(request);
        }

        let tick_rate = self.config.tick_rate();
        let mut last_tick = Instant::now();
        terminal.draw(|frame| ui::render(self, frame))?;

        while !self.exit {
            self.process_messages();

            let timeout = tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::from_secs(0));

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key)
                        if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                    {
                        self.handle_key_event(key);
                    }
                    Event::Mouse(mouse) => {
                        self.handle_mouse_input(mouse);
                    }
                    Event::Resize(width, height) => {
                        if let Some(request) = self.handle_resize(width, height) {
                            self.spawn_request(request);
                        }
                        terminal.draw(|frame| ui::render(self, frame))?;
                    }
                    _ => {}
                }
            }

            if last_tick.elapsed() >= tick_rate {
                self.animation_tick = self.animation_tick.wrapping_add(1);
                self.ui.tick_toast();
                terminal.draw(|frame| ui::render(self, frame))?;
                last_tick = Instant::now();
            }
        }

        self.scroll.detach();
        tracing::info!(loaded = self.search.results().len(), "Exiting launchscope");
        Ok(())
    }
}
