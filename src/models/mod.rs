pub mod birthday;
pub mod sort_order;

pub use birthday::BirthdayRecord;
pub use sort_order::SortOrder;
