use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::Result;

mod client;
mod commands;
mod constants;
mod domain;
mod logging;
mod state;
mod theme;
mod tui;
mod ui;
mod widgets;

#[cfg(test)]
mod test_utils;

use crate::state::{App, AppConfig, StartupOptions};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const LOGO: &str = r"
  /\    _                      _
 |  |  | | __ _ _  _ _ _  __| |_  ___ __ ___ _ __  ___
 |  |  | |/ _` | || | ' \/ _| ' \(_-</ _/ _ \ '_ \/ -_)
/____\ |_|\__,_|\_,_|_||_\__|_||_/__/\__\___/ .__/\___|
  ||                                         |_|
";

/// launchscope - Terminal UI for searching rocket launches
#[derive(Parser)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Start with a search for these keywords
    #[arg(short, long)]
    keywords: Option<String>,

    /// Launch-query endpoint, overrides the configuration file
    #[arg(long)]
    api_url: Option<String>,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Display version with ASCII art
    Version,
    /// Show the configuration file location
    Config {
        /// Write the default configuration to that location
        #[arg(long)]
        init: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    if let Some(command) = &cli.command {
        return handle_cli_command(command);
    }

    logging::init_logging(cli.log_file.as_deref())?;

    let startup_options = StartupOptions {
        keywords: cli.keywords,
        api_url: cli.api_url,
    };
    let mut app = App::new(startup_options, AppConfig::load())?;

    let mut terminal = tui::init()?;
    let result = app.run(&mut terminal).await;
    tui::restore()?;

    result
}

/// Handles subcommands that run without the TUI.
fn handle_cli_command(command: &Commands) -> Result<()> {
    match command {
        Commands::Version => {
            println!("{LOGO}");
            println!("launchscope v{VERSION}");
            println!("A terminal UI for searching and browsing rocket launches");
        }
        Commands::Config { init } => {
            if *init {
                let path = AppConfig::default().save()?;
                println!("Wrote default configuration to {}", path.display());
            } else {
                println!("{}", AppConfig::config_path()?.display());
            }
        }
    }
    Ok(())
}
