use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::db::BirthdayStore;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let store = BirthdayStore::open(&cfg.database_path())?;
        LogLogic::print_log(&store)?;
    }

    Ok(())
}
