use crate::db::BirthdayStore;
use crate::db::log::{LogEntry, load_log};
use crate::errors::AppResult;
use ansi_term::Colour;
use regex::Regex;
use std::sync::LazyLock;

const MAX_OP_WIDTH: usize = 40;

static ANSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI pattern"));

fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}

fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "migration_applied" => Colour::Purple,
        "backup" => Colour::Blue,
        "export" => Colour::Cyan,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// Operation colored, followed by its target when present.
fn op_target(entry: &LogEntry) -> String {
    let op = color_for_operation(&entry.operation)
        .paint(entry.operation.as_str())
        .to_string();
    if entry.target.is_empty() {
        op
    } else {
        format!("{op} ({})", entry.target)
    }
}

fn display_date(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%FT%T%:z").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

pub struct LogLogic;

impl LogLogic {
    pub fn render(entries: &[LogEntry]) -> String {
        let cols: Vec<(String, String, String)> = entries
            .iter()
            .map(|e| (e.id.to_string(), display_date(&e.date), op_target(e)))
            .collect();

        let id_w = cols.iter().map(|(id, _, _)| id.len()).max().unwrap_or(1);
        let date_w = cols.iter().map(|(_, d, _)| d.len()).max().unwrap_or(10);
        let op_w = cols
            .iter()
            .map(|(_, _, op)| strip_ansi(op).chars().count())
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);

        let mut out = String::new();
        for ((id, date, op), entry) in cols.iter().zip(entries) {
            let visible = strip_ansi(op).chars().count();
            let padding = " ".repeat(op_w.saturating_sub(visible));
            out.push_str(&format!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}\n",
                id, date, op, padding, entry.message
            ));
        }
        out
    }

    pub fn print_log(store: &BirthdayStore) -> AppResult<()> {
        let entries = load_log(store.conn())?;

        println!("📜 Internal log:\n");
        if entries.is_empty() {
            println!("(empty)");
        } else {
            print!("{}", Self::render(&entries));
        }

        Ok(())
    }
}
