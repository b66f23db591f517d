//! bikeshare library root.
//! Exposes the CLI parser, the high-level run() function, and the loader,
//! calculators and renderers used by it.

pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod errors;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use tracing::debug;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        None | Some(Commands::Explore) => cli::commands::explore::handle(cfg),
        Some(cmd @ Commands::Report { .. }) => cli::commands::report::handle(cmd, cfg),
        Some(cmd @ Commands::Config { .. }) => cli::commands::config::handle(cmd, cfg),
        Some(cmd @ Commands::Init { .. }) => cli::commands::init::handle(cmd),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let mut cfg = Config::load()?;

    // 3️⃣ command-line overrides
    if let Some(dir) = &cli.data_dir {
        cfg.data_dir = dir.clone();
    }
    if cli.no_timing {
        cfg.show_timing = false;
    }

    // 4️⃣ diagnostics on stderr
    logging::init(cli.log_level.as_deref(), &cfg.log_level)?;
    debug!(?cfg, "configuration resolved");

    // 5️⃣ hand over to the dispatcher
    dispatch(&cli, &cfg)
}
