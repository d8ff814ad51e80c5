use crate::core::row::{DisplayRow, RowFormat};
use crate::db::BirthdayStore;
use crate::db::log::{Operation, ttlog};
use crate::errors::AppResult;
use crate::export::{ExportFormat, csv, ensure_writable, json, notify_export_success};
use crate::models::SortOrder;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export every birthday, with its display date and age at `now_ms`.
    pub fn export(
        store: &BirthdayStore,
        format: ExportFormat,
        file: &str,
        order: SortOrder,
        now_ms: i64,
        row_format: &RowFormat,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        let records = store.fetch_all(order)?;
        let rows = DisplayRow::bind_all(&records, now_ms, row_format);

        match format {
            ExportFormat::Csv => csv::write_csv(path, &rows)?,
            ExportFormat::Json => json::write_json(path, &rows)?,
        }

        ttlog(
            store.conn(),
            Operation::Export,
            file,
            &format!("Exported {} birthdays as {}", rows.len(), format.as_str()),
        )?;

        notify_export_success(&format.as_str().to_uppercase(), path, rows.len());
        Ok(rows.len())
    }
}
