//! Terminal setup and teardown.
//!
//! The terminal runs in raw mode on the alternate screen with mouse capture
//! so the wheel can scroll the launch list. A panic hook restores it before
//! the report is printed.

use std::io::{self, Stdout};

use color_eyre::Result;
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        cursor::Show,
        event::{DisableMouseCapture, EnableMouseCapture},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Switches the terminal into TUI mode.
///
/// # Errors
///
/// Returns an error if raw mode or the alternate screen cannot be entered.
pub fn init() -> Result<Tui> {
    install_panic_hook();

    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;

    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.clear()?;
    Ok(terminal)
}

/// Returns the terminal to its normal state.
///
/// # Errors
///
/// Returns an error if the terminal cannot be restored.
pub fn restore() -> Result<()> {
    execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen, Show)?;
    disable_raw_mode()?;
    Ok(())
}

fn install_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        if let Err(err) = restore() {
            tracing::warn!("Failed to restore terminal after panic: {err}");
        }
        hook(panic_info);
    }));
}
