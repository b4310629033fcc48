//! agrimpact library root.
//! Exposes the CLI parser, the high-level run() function, and the store,
//! reporting and export modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Event { .. } => cli::commands::event::handle(&cli.command, cfg),
        Commands::Attendee { .. } => cli::commands::attendee::handle(&cli.command, cfg),
        Commands::Report => cli::commands::report::handle(cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    if let Some(custom_db) = &cli.db {
        cfg.database = Config::resolve_database(custom_db, cli.test)
            .to_string_lossy()
            .to_string();
    }

    dispatch(&cli, &cfg)
}
