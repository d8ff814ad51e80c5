use crate::db::log::{Operation, ttlog};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use rusqlite::{Connection, OptionalExtension, Result};

/// Current schema version, stored in `PRAGMA user_version`.
pub const DATABASE_VERSION: i32 = 2;

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `birthdays` table exists.
fn birthdays_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='birthdays'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

pub fn schema_version(conn: &Connection) -> Result<i32> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
}

/// Create the `birthdays` table and stamp the current version.
fn create_birthdays_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(&format!(
        r#"
        BEGIN;
        CREATE TABLE birthdays (
            _id       INTEGER PRIMARY KEY AUTOINCREMENT,
            name      TEXT NOT NULL,
            birthdate INTEGER NOT NULL
        );
        PRAGMA user_version = {DATABASE_VERSION};
        COMMIT;
        "#
    ))
}

/// Any version change drops the table: stored birthdays are lost.
// TODO: carry rows over with ALTER TABLE once a version adds columns
fn recreate_birthdays_table(conn: &Connection, from: i32) -> AppResult<()> {
    warning(format!(
        "Upgrading database from version {} to {}, which will destroy all old data",
        from, DATABASE_VERSION
    ));

    conn.execute_batch("DROP TABLE IF EXISTS birthdays;")?;
    create_birthdays_table(conn)?;

    ttlog(
        conn,
        Operation::MigrationApplied,
        &format!("v{}", DATABASE_VERSION),
        &format!("Recreated birthdays table (was version {})", from),
    )?;

    success(format!("Migration applied: schema version {}", DATABASE_VERSION));
    Ok(())
}

/// Public entry point: bring the schema to [`DATABASE_VERSION`].
///
/// Invoked by db::init_db() and by every store open.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    let version = schema_version(conn)?;

    if version > DATABASE_VERSION {
        return Err(AppError::Migration(format!(
            "database schema version {} is newer than the supported version {}",
            version, DATABASE_VERSION
        )));
    }

    if !birthdays_table_exists(conn)? {
        create_birthdays_table(conn)?;
        return Ok(());
    }

    if version != DATABASE_VERSION {
        recreate_birthdays_table(conn, version)?;
    }

    Ok(())
}
