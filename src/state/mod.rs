//! State management for the launchscope TUI.
//!
//! The state is split by concern:
//!
//! - [`SearchState`] - keyword session, accumulated launches, pagination flags
//! - [`ScrollTrigger`] - fires the next-page request when the list bottom is reached
//! - [`ListNavigation`] - selected card and scroll offset
//! - [`UiState`] - focus, search draft, toasts, help
//! - [`AppConfig`] - persistent configuration
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                           App                             │
//! ├──────────────┬───────────────┬──────────────┬─────────────┤
//! │ SearchState  │ ScrollTrigger │ ListNavigation│  UiState   │
//! │  - keywords  │  - attached   │  - selected   │  - focus   │
//! │  - results   │  - last fire  │  - offset     │  - draft   │
//! │  - page      │               │               │  - toast   │
//! └──────────────┴───────────────┴──────────────┴─────────────┘
//! ```
//!
//! Fetches run on spawned tasks and report back through [`AppMessage`].

use tokio::sync::mpsc;

use crate::client::LaunchClient;
use crate::domain::{LaunchError, LaunchPage};

// ============================================================================
// Module Declarations
// ============================================================================

mod app_lifecycle;

pub mod config;
pub mod navigation;
pub mod scroll;
pub mod search;
pub mod ui_state;

// ============================================================================
// Re-exports
// ============================================================================

pub use app_actions::spawn_fetch;
pub use config::AppConfig;
pub use navigation::ListNavigation;
pub use scroll::{ScrollTrigger, Viewport, ViewportMetrics};
pub use search::{FetchRequest, RequestToken, SearchEvent, SearchPhase, SearchState};
pub use ui_state::{Focus, SearchDraft, UiState};

// ============================================================================
// App Message Types
// ============================================================================

/// Messages sent from background fetch tasks to the main app loop.
#[derive(Debug)]
pub enum AppMessage {
    /// A launch page request finished.
    LaunchesFetched {
        token: RequestToken,
        result: Result<LaunchPage, LaunchError>,
    },
}

// ============================================================================
// Startup Options
// ============================================================================

/// Options passed on the command line.
#[derive(Debug, Clone, Default)]
pub struct StartupOptions {
    /// Keywords of the first search session.
    pub keywords: Option<String>,
    /// Overrides the configured launch-query endpoint.
    pub api_url: Option<String>,
}

// ============================================================================
// Main App State
// ============================================================================

/// The main application state container.
#[derive(Debug)]
pub struct App {
    // ========================================================================
    // Sub-states
    // ========================================================================
    /// Search session and accumulated launches.
    pub search: SearchState,

    /// Infinite-scroll trigger for the card list.
    pub scroll: ScrollTrigger,

    /// Selection and scroll offset of the card list.
    pub nav: ListNavigation,

    /// Focus, search draft, toasts.
    pub ui: UiState,

    // ========================================================================
    // App-level state
    // ========================================================================
    pub config: AppConfig,

    /// Whether the application should exit.
    pub exit: bool,

    /// Animation tick counter for the loading spinner.
    pub animation_tick: u64,

    /// Last known terminal size `(width, height)`.
    pub terminal_size: (u16, u16),

    // ========================================================================
    // Async Communication Channels
    // ========================================================================
    // Sends use `let _ = tx.send(...)`: the receiver is gone only during shutdown.
    pub(crate) message_tx: mpsc::UnboundedSender<AppMessage>,

    pub(crate) message_rx: mpsc::UnboundedReceiver<AppMessage>,

    // ========================================================================
    // Launch API Client
    // ========================================================================
    pub(crate) client: LaunchClient,
}

// ============================================================================
// Implementation Modules
// ============================================================================

// Completion handling
mod app_messages;

// Command execution, input handling
mod app_commands;

// Fetch spawning, scroll sampling, browser actions
mod app_actions;

// ============================================================================
// Tests
// ============================================================================
