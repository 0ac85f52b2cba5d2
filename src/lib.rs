//! punchcat library root.
//! Exposes the CLI parser, the high-level run() function and the
//! categorize/pivot pipeline.

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
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        // these two must work on a missing or broken configuration file
        Commands::Init { .. } => cli::commands::init::handle(&cli.command, config_path),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, config_path),
        Commands::Process { .. } => {
            let cfg = Config::load_from(config_path)?;
            cli::commands::process::handle(&cli.command, &cfg)
        }
        Commands::Classify { .. } => {
            let cfg = Config::load_from(config_path)?;
            cli::commands::classify::handle(&cli.command, &cfg)
        }
        Commands::Windows => {
            let cfg = Config::load_from(config_path)?;
            cli::commands::windows::handle(&cfg)
        }
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let config_path = Config::resolve_path(cli.config.as_deref());
    dispatch(&cli, &config_path)
}
