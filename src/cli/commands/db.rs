use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::BirthdayStore;
use crate::db::migrate::{run_pending_migrations, schema_version};
use crate::db::stats;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = cmd
    {
        let db_path = cfg.database_path();

        // opening the store already brings the schema up to date
        let store = BirthdayStore::open(&db_path)?;

        //
        // 1) MIGRATE
        //
        if *migrate {
            println!("{}▶ Running migrations…{}", CYAN, RESET);
            run_pending_migrations(store.conn())?;
            println!(
                "{}✔ Schema is at version {}.{}\n",
                GREEN,
                schema_version(store.conn())?,
                RESET
            );
        }

        //
        // 2) INFO
        //
        if *info {
            stats::print_db_info(&store, &db_path)?;
        }

        //
        // 3) CHECK
        //
        if *check {
            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            let integrity: String =
                store
                    .conn()
                    .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                println!("{}✔ Integrity check passed.{}\n", GREEN, RESET);
            } else {
                println!("{}✘ Integrity check failed:{} {}\n", RED, RESET, integrity);
            }
        }

        //
        // 4) VACUUM
        //
        if *vacuum {
            println!("{}▶ Running VACUUM…{}", CYAN, RESET);
            store.conn().execute_batch("VACUUM;")?;
            println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);
        }
    }

    Ok(())
}
