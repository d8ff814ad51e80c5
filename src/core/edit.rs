use crate::core::save::SaveLogic;
use crate::db::BirthdayStore;
use crate::errors::{AppError, AppResult};
use crate::models::BirthdayRecord;

pub struct EditLogic;

impl EditLogic {
    /// Replace the given fields of an existing birthday, keeping the others.
    pub fn apply(
        store: &BirthdayStore,
        id: i64,
        name: Option<&str>,
        birthdate: Option<i64>,
    ) -> AppResult<BirthdayRecord> {
        if name.is_none() && birthdate.is_none() {
            return Err(AppError::NothingToUpdate(id));
        }

        let current = store
            .fetch_one(id)?
            .ok_or(AppError::BirthdayNotFound(id))?;

        let updated = BirthdayRecord {
            id,
            name: name.map(str::to_string).unwrap_or(current.name),
            birthdate: birthdate.unwrap_or(current.birthdate),
        };

        SaveLogic::save(store, Some(id), &updated.name, updated.birthdate)?;
        Ok(updated)
    }
}
