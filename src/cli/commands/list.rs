use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::ListLogic;
use crate::db::BirthdayStore;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::date::reference_millis;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { sort, today } = cmd {
        let now = reference_millis(today.as_deref())?;
        let row_format = cfg.row_format()?;
        let order = sort.unwrap_or(cfg.default_sort);

        let store = BirthdayStore::open(&cfg.database_path())?;
        let rows = ListLogic::rows(&store, order, now, &row_format)?;

        if rows.is_empty() {
            info("No birthdays saved yet. Add one with `babybirthdays add <NAME> <YYYY-MM-DD>`.");
            return Ok(());
        }

        println!("🎂 Birthdays ({}):\n", rows.len());
        print!("{}", ListLogic::render(&rows, cfg.separator()));
    }

    Ok(())
}
