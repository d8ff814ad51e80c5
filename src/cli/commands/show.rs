use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::row::DisplayRow;
use crate::db::BirthdayStore;
use crate::errors::{AppError, AppResult};
use crate::utils::colors::{CYAN, RESET, color_for_age, paint};
use crate::utils::date::{format_iso, reference_millis};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id, today } = cmd {
        let now = reference_millis(today.as_deref())?;
        let row_format = cfg.row_format()?;

        let store = BirthdayStore::open(&cfg.database_path())?;
        let record = store
            .fetch_one(*id)?
            .ok_or(AppError::BirthdayNotFound(*id))?;

        let row = DisplayRow::bind(&record, now, &row_format);

        println!("{}• Id:{}         {}", CYAN, RESET, row.id);
        println!("{}• Name:{}       {}", CYAN, RESET, row.name);
        println!(
            "{}• Born:{}       {} ({})",
            CYAN,
            RESET,
            format_iso(record.birthdate),
            row.date_text
        );
        println!(
            "{}• Age:{}        {}",
            CYAN,
            RESET,
            paint(&row.age_text, color_for_age(row.age.bucket, row.age.magnitude))
        );
    }

    Ok(())
}
