//! Binding of a stored birthday to the three texts shown per list row.

use crate::core::age::{Age, AgeLabels, compute_age_utc};
use crate::errors::{AppError, AppResult};
use crate::models::BirthdayRecord;
use crate::utils::date::format_iso;
use chrono::format::{Item, StrftimeItems};
use serde::Serialize;

/// Default birthday column pattern: abbreviated month and day, e.g. `Mar-10`.
pub const DEFAULT_DATE_FORMAT: &str = "%b-%d";

#[derive(Debug, Clone)]
pub struct RowFormat {
    date_format: String,
    labels: AgeLabels,
}

impl Default for RowFormat {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            labels: AgeLabels::default(),
        }
    }
}

impl RowFormat {
    /// Fails when `date_format` contains an unknown strftime specifier.
    pub fn new(date_format: &str, labels: AgeLabels) -> AppResult<Self> {
        if StrftimeItems::new(date_format).any(|item| matches!(item, Item::Error)) {
            return Err(AppError::Config(format!(
                "invalid date_format '{}'",
                date_format
            )));
        }
        Ok(Self {
            date_format: date_format.to_string(),
            labels,
        })
    }

    pub fn labels(&self) -> &AgeLabels {
        &self.labels
    }

    pub fn format_date(&self, record: &BirthdayRecord) -> String {
        match record.birth_instant() {
            Some(dt) => dt.format(&self.date_format).to_string(),
            None => format_iso(record.birthdate),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRow {
    pub id: i64,
    pub name: String,
    /// Birth instant in epoch milliseconds.
    pub birthdate: i64,
    pub date_text: String,
    pub age_text: String,
    pub age: Age,
}

impl DisplayRow {
    pub fn bind(record: &BirthdayRecord, now_ms: i64, format: &RowFormat) -> Self {
        let age = compute_age_utc(record.birthdate, now_ms);
        Self {
            id: record.id,
            name: record.name.clone(),
            birthdate: record.birthdate,
            date_text: format.format_date(record),
            age_text: age.render(format.labels()),
            age,
        }
    }

    pub fn bind_all(records: &[BirthdayRecord], now_ms: i64, format: &RowFormat) -> Vec<Self> {
        records
            .iter()
            .map(|r| Self::bind(r, now_ms, format))
            .collect()
    }
}
