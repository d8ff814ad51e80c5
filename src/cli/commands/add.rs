use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::age::compute_age_utc;
use crate::core::save::SaveLogic;
use crate::db::BirthdayStore;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::date::{format_iso, parse_date_millis, reference_millis};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { name, date } = cmd {
        let birthdate = parse_date_millis(date)?;
        let now = reference_millis(None)?;

        if birthdate > now {
            warning(format!(
                "Birth date {} is in the future: its age will show as a negative day count.",
                format_iso(birthdate)
            ));
        }

        let store = BirthdayStore::open(&cfg.database_path())?;
        let id = SaveLogic::save(&store, None, name, birthdate)?;

        let age = compute_age_utc(birthdate, now);
        success(format!(
            "Added #{}: {} born {} ({})",
            id,
            name,
            format_iso(birthdate),
            age.render(&cfg.labels)
        ));
    }

    Ok(())
}
