use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;

/// One row of the `birthdays` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BirthdayRecord {
    pub id: i64,
    pub name: String,
    /// Birth instant in epoch milliseconds.
    pub birthdate: i64,
}

impl BirthdayRecord {
    pub fn birth_instant(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.birthdate).single()
    }
}
