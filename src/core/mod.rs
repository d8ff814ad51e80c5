pub mod age;
pub mod backup;
pub mod del;
pub mod edit;
pub mod list;
pub mod log;
pub mod row;
pub mod save;
