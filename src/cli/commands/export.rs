use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::BirthdayStore;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::date::reference_millis;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        sort,
        today,
        force,
    } = cmd
    {
        let now = reference_millis(today.as_deref())?;
        let row_format = cfg.row_format()?;
        let order = sort.unwrap_or(cfg.default_sort);

        let store = BirthdayStore::open(&cfg.database_path())?;
        ExportLogic::export(&store, *format, file, order, now, &row_format, *force)?;
    }

    Ok(())
}
