use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::BirthdayStore;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use crate::utils::date::format_iso;

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    io::stdout().flush().ok();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let store = BirthdayStore::open(&cfg.database_path())?;

        let record = store
            .fetch_one(*id)?
            .ok_or(AppError::BirthdayNotFound(*id))?;

        if !*yes {
            let prompt = format!(
                "Delete birthday #{} ({}, {})? This action is irreversible.",
                record.id,
                record.name,
                format_iso(record.birthdate)
            );
            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        let removed = DeleteLogic::apply(&store, *id)?;
        success(format!("Birthday #{} ({}) has been deleted.", removed.id, removed.name));
    }

    Ok(())
}
