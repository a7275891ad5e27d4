//! webreg2ics library root.
//! Exposes the CLI parser, the high-level run() function, and the
//! schedule interpreter / calendar serializer modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod ingest;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use utils::path::expand_tilde;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Convert { .. } => cli::commands::convert::handle(&cli.command, cfg),
        Commands::Preview { .. } => cli::commands::preview::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Rows { .. } => cli::commands::rows::handle(&cli.command),
    }
}

/// Entry point usato da main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ `init` scrive il file: non deve fallire su una config rotta
    if matches!(cli.command, Commands::Init { .. }) {
        return dispatch(&cli, &Config::default());
    }

    // 3️⃣ carica config UNA sola volta (override da --config)
    let path = cli.config.as_deref().map(expand_tilde);
    let cfg = Config::load(path.as_deref())?;

    // 4️⃣ passa tutto al dispatcher
    dispatch(&cli, &cfg)
}
