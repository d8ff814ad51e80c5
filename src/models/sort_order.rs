use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Ordering of the birthday list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Insertion order
    #[default]
    Id,
    Name,
    Birthdate,
}

impl SortOrder {
    /// SQL `ORDER BY` clause for this ordering.
    pub fn to_sql(&self) -> &'static str {
        match self {
            SortOrder::Id => "_id ASC",
            SortOrder::Name => "name COLLATE NOCASE ASC, _id ASC",
            SortOrder::Birthdate => "birthdate ASC, _id ASC",
        }
    }
}
