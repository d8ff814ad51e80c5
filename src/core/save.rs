use crate::db::BirthdayStore;
use crate::db::log::{Operation, ttlog};
use crate::errors::{AppError, AppResult};

/// Create-or-update entry point for the birthday form.
///
/// The row being edited is an explicit argument: `None` inserts a new
/// birthday, `Some(id)` overwrites that row. The id of the saved row is
/// returned so the caller can keep editing it.
pub struct SaveLogic;

impl SaveLogic {
    pub fn save(
        store: &BirthdayStore,
        row_id: Option<i64>,
        name: &str,
        birthdate: i64,
    ) -> AppResult<i64> {
        match row_id {
            None => {
                let id = store.create(name, birthdate)?;
                ttlog(
                    store.conn(),
                    Operation::Add,
                    &format!("#{id}"),
                    &format!("Added birthday for '{}'", name),
                )?;
                Ok(id)
            }
            Some(id) => {
                if !store.update(id, name, birthdate)? {
                    return Err(AppError::BirthdayNotFound(id));
                }
                ttlog(
                    store.conn(),
                    Operation::Edit,
                    &format!("#{id}"),
                    &format!("Updated birthday for '{}'", name),
                )?;
                Ok(id)
            }
        }
    }
}
