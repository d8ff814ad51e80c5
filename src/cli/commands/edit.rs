use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::EditLogic;
use crate::db::BirthdayStore;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date::{format_iso, parse_date_millis};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit { id, name, date } = cmd {
        let birthdate = date.as_deref().map(parse_date_millis).transpose()?;

        let store = BirthdayStore::open(&cfg.database_path())?;
        let updated = EditLogic::apply(&store, *id, name.as_deref(), birthdate)?;

        success(format!(
            "Updated #{}: {} born {}",
            updated.id,
            updated.name,
            format_iso(updated.birthdate)
        ));
    }

    Ok(())
}
