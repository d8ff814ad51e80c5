//! babybirthdays library root.
//! Exposes the CLI parser, the high-level run() function and the
//! age formatter, store and row binding used by the commands.

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

pub use crate::core::age::{Age, AgeBucket, AgeLabels, compute_age, compute_age_utc, format_age};
pub use crate::core::row::{DisplayRow, RowFormat};
pub use crate::db::BirthdayStore;
pub use crate::models::{BirthdayRecord, SortOrder};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::Edit { .. } => cli::commands::edit::handle(&cli.command, cfg),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Show { .. } => cli::commands::show::handle(&cli.command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let mut cli = Cli::parse();

    // config is loaded once and shared by every command
    let mut cfg = Config::load()?;

    // init and every other command must agree on where --db points
    if let Some(custom_db) = cli.db.take() {
        let resolved = Config::resolve_database(&custom_db)
            .to_string_lossy()
            .to_string();
        cfg.database = resolved.clone();
        cli.db = Some(resolved);
    }

    dispatch(&cli, &cfg)
}
