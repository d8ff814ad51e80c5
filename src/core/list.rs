use crate::core::row::{DisplayRow, RowFormat};
use crate::db::BirthdayStore;
use crate::errors::AppResult;
use crate::models::SortOrder;
use crate::utils::colors::color_for_age;
use crate::utils::table::{Cell, Column, Table};

pub struct ListLogic;

impl ListLogic {
    pub fn rows(
        store: &BirthdayStore,
        order: SortOrder,
        now_ms: i64,
        format: &RowFormat,
    ) -> AppResult<Vec<DisplayRow>> {
        let records = store.fetch_all(order)?;
        Ok(DisplayRow::bind_all(&records, now_ms, format))
    }

    /// Name / Birthday / Age table, one line per row.
    pub fn render(rows: &[DisplayRow], separator: char) -> String {
        let mut table = Table::new(
            vec![
                Column::right("ID"),
                Column::left("Name"),
                Column::left("Birthday"),
                Column::right("Age"),
            ],
            separator,
        );

        for row in rows {
            table.add_row(vec![
                row.id.to_string().into(),
                row.name.clone().into(),
                row.date_text.clone().into(),
                Cell::colored(
                    row.age_text.clone(),
                    color_for_age(row.age.bucket, row.age.magnitude),
                ),
            ]);
        }

        table.render()
    }
}
