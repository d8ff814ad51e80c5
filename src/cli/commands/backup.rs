use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::db::BirthdayStore;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = cmd
    {
        let db_path = cfg.database_path();
        let store = BirthdayStore::open(&db_path)?;
        BackupLogic::backup(&store, &db_path, file, *compress, *force)?;
    }

    Ok(())
}
