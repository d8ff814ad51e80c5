use crate::core::row::DisplayRow;
use crate::errors::AppResult;
use crate::utils::date::format_iso;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct JsonBirthday<'a> {
    id: i64,
    name: &'a str,
    birthdate: String,
    birthdate_millis: i64,
    birthday: &'a str,
    age: &'a str,
    age_unit: &'static str,
    age_value: i64,
}

/// Pretty-printed JSON array of birthdays.
pub fn write_json(path: &Path, rows: &[DisplayRow]) -> AppResult<()> {
    let items: Vec<JsonBirthday> = rows
        .iter()
        .map(|row| JsonBirthday {
            id: row.id,
            name: &row.name,
            birthdate: format_iso(row.birthdate),
            birthdate_millis: row.birthdate,
            birthday: &row.date_text,
            age: &row.age_text,
            age_unit: row.age.bucket.as_str(),
            age_value: row.age.magnitude,
        })
        .collect();

    let json = serde_json::to_string_pretty(&items)?;
    std::fs::write(path, json)?;
    Ok(())
}
