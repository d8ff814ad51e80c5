//! CRUD access to the `birthdays` table.

use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::{BirthdayRecord, SortOrder};
use rusqlite::{Connection, OptionalExtension, Row, params};

pub const KEY_ROWID: &str = "_id";
pub const KEY_NAME: &str = "name";
pub const KEY_BIRTHDATE: &str = "birthdate";

pub struct BirthdayStore {
    pool: DbPool,
}

fn map_row(row: &Row) -> rusqlite::Result<BirthdayRecord> {
    Ok(BirthdayRecord {
        id: row.get(KEY_ROWID)?,
        name: row.get(KEY_NAME)?,
        birthdate: row.get(KEY_BIRTHDATE)?,
    })
}

impl BirthdayStore {
    /// Open (or create) the database file and apply pending migrations.
    pub fn open(path: &str) -> AppResult<Self> {
        Self::from_pool(DbPool::new(path)?)
    }

    pub fn open_in_memory() -> AppResult<Self> {
        Self::from_pool(DbPool::in_memory()?)
    }

    fn from_pool(pool: DbPool) -> AppResult<Self> {
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }

    /// Insert a new birthday and return its row id.
    pub fn create(&self, name: &str, birthdate: i64) -> AppResult<i64> {
        let mut stmt = self
            .conn()
            .prepare_cached("INSERT INTO birthdays (name, birthdate) VALUES (?1, ?2)")?;
        stmt.execute(params![name, birthdate])?;
        Ok(self.conn().last_insert_rowid())
    }

    /// Returns false when no row has the given id.
    pub fn update(&self, id: i64, name: &str, birthdate: i64) -> AppResult<bool> {
        let mut stmt = self
            .conn()
            .prepare_cached("UPDATE birthdays SET name = ?1, birthdate = ?2 WHERE _id = ?3")?;
        let changed = stmt.execute(params![name, birthdate, id])?;
        Ok(changed > 0)
    }

    /// Returns false when no row has the given id.
    pub fn delete(&self, id: i64) -> AppResult<bool> {
        let mut stmt = self
            .conn()
            .prepare_cached("DELETE FROM birthdays WHERE _id = ?1")?;
        let changed = stmt.execute([id])?;
        Ok(changed > 0)
    }

    pub fn fetch_all(&self, order: SortOrder) -> AppResult<Vec<BirthdayRecord>> {
        let sql = format!(
            "SELECT _id, name, birthdate FROM birthdays ORDER BY {}",
            order.to_sql()
        );
        let mut stmt = self.conn().prepare_cached(&sql)?;
        let rows = stmt.query_map([], map_row)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    pub fn fetch_one(&self, id: i64) -> AppResult<Option<BirthdayRecord>> {
        let mut stmt = self
            .conn()
            .prepare_cached("SELECT _id, name, birthdate FROM birthdays WHERE _id = ?1")?;
        let record = stmt.query_row([id], map_row).optional()?;
        Ok(record)
    }

    pub fn count(&self) -> AppResult<i64> {
        let count = self
            .conn()
            .query_row("SELECT COUNT(*) FROM birthdays", [], |row| row.get(0))?;
        Ok(count)
    }
}
