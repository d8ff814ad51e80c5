use crate::db::BirthdayStore;
use crate::db::migrate::schema_version;
use crate::errors::AppResult;
use crate::models::BirthdayRecord;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::date::format_iso;
use rusqlite::OptionalExtension;
use std::fs;

fn record_at(store: &BirthdayStore, order: &str) -> AppResult<Option<BirthdayRecord>> {
    let sql = format!("SELECT _id, name, birthdate FROM birthdays ORDER BY birthdate {order} LIMIT 1");
    let record = store
        .conn()
        .query_row(&sql, [], |row| {
            Ok(BirthdayRecord {
                id: row.get(0)?,
                name: row.get(1)?,
                birthdate: row.get(2)?,
            })
        })
        .optional()?;
    Ok(record)
}

fn describe(record: Option<BirthdayRecord>) -> String {
    match record {
        Some(r) => format!("{} ({})", r.name, format_iso(r.birthdate)),
        None => format!("{GREY}--{RESET}"),
    }
}

pub fn print_db_info(store: &BirthdayStore, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} KB", CYAN, RESET, file_kb);
    println!(
        "{}• Schema version:{} {}",
        CYAN,
        RESET,
        schema_version(store.conn())?
    );

    //
    // 2) TOTAL BIRTHDAYS
    //
    println!(
        "{}• Total birthdays:{} {}{}{}",
        CYAN,
        RESET,
        GREEN,
        store.count()?,
        RESET
    );

    //
    // 3) OLDEST / YOUNGEST
    //
    println!("{}• Oldest:{}   {}", CYAN, RESET, describe(record_at(store, "ASC")?));
    println!("{}• Youngest:{} {}", CYAN, RESET, describe(record_at(store, "DESC")?));

    println!();
    Ok(())
}
