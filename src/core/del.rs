use crate::db::BirthdayStore;
use crate::db::log::{Operation, ttlog};
use crate::errors::{AppError, AppResult};
use crate::models::BirthdayRecord;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete a birthday and return the removed record.
    pub fn apply(store: &BirthdayStore, id: i64) -> AppResult<BirthdayRecord> {
        let record = store
            .fetch_one(id)?
            .ok_or(AppError::BirthdayNotFound(id))?;

        if !store.delete(id)? {
            return Err(AppError::BirthdayNotFound(id));
        }

        ttlog(
            store.conn(),
            Operation::Del,
            &format!("#{id}"),
            &format!("Deleted birthday for '{}'", record.name),
        )?;

        Ok(record)
    }
}
