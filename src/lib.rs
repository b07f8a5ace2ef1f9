//! kpiview library root.
//! Exposes the CLI parser, the high-level run() function and the
//! login / KPI lookup core used by the binary and the tests.

pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod errors;
pub mod export;
pub mod logging;
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
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Data { .. } => cli::commands::data::handle(&cli.command, cfg),
        Commands::Login { .. } => cli::commands::login::handle(&cli.command, cfg),
        Commands::View { .. } => cli::commands::view::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Config is loaded once; --data wins over the configured source.
    let mut cfg = Config::load()?;
    if let Some(custom) = &cli.data {
        cfg.data_source = custom.clone();
    }

    logging::init(cli.verbose, &cfg.log_level);

    dispatch(&cli, &cfg)
}
