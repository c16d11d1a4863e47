//! rTimeReport library root.
//! Report calculators over an activity log (day segmentation, summary
//! metrics, interruption analytics, daily details, timeline, planning),
//! plus the CLI parser and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod logging;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Summary { .. } => cli::commands::summary::handle(cli, cfg),
        Commands::Interruptions { .. } => cli::commands::interruptions::handle(cli, cfg),
        Commands::Details { .. } => cli::commands::details::handle(cli, cfg),
        Commands::Timeline { .. } => cli::commands::timeline::handle(cli, cfg),
        Commands::Planning { .. } => cli::commands::planning::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once (explicit --conf wins)
    let cfg = match &cli.conf {
        Some(path) => Config::load_from(Path::new(path))?,
        None => Config::load()?,
    };

    // 3️⃣ diagnostics to stderr
    logging::init(&cfg.log_level)?;

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
