//! wellness-logger library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::{AppError, AppResult};
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, cfg_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, cfg_path),
        Commands::Session { .. } => cli::commands::session::handle(&cli.command, cfg),
        Commands::Status { .. } => cli::commands::status::handle(&cli.command),
        Commands::Check { .. } => cli::commands::check::handle(&cli.command),
        Commands::Remind => {
            cli::commands::remind::handle();
            Ok(())
        }
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let cfg_path = Config::resolve_path(cli.config.as_deref());

    // `init` must work even over a broken config file
    let cfg = match (&cli.command, Config::load(&cfg_path)) {
        (Commands::Init { .. }, Err(_)) => Config::default(),
        (_, loaded) => loaded?,
    };

    dispatch(&cli, &cfg, &cfg_path)
}

/// Print an error the way the CLI reports it, one line per validation rule.
pub fn report_error(e: &AppError) {
    match e {
        AppError::Validation(errs) => {
            for fe in errs.errors() {
                ui::messages::error(fe);
            }
        }
        AppError::NoSelectionForDelete => ui::messages::warning(e),
        other => ui::messages::error(other),
    }
}
