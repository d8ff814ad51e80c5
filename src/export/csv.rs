use crate::core::row::DisplayRow;
use crate::errors::AppResult;
use crate::utils::date::format_iso;
use csv::Writer;
use std::path::Path;

/// Write one line per birthday: id, name, ISO birth date, display date and age.
pub fn write_csv(path: &Path, rows: &[DisplayRow]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["id", "name", "birthdate", "birthday", "age"])?;

    for row in rows {
        wtr.write_record([
            row.id.to_string(),
            row.name.clone(),
            format_iso(row.birthdate),
            row.date_text.clone(),
            row.age_text.clone(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
