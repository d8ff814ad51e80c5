#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Command for the binary, with HOME pointed at a scratch directory so the
/// user's real configuration is never read or written.
pub fn bb() -> Command {
    bb_with_home(&test_home("shared"))
}

pub fn bb_with_home(home: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("babybirthdays");
    cmd.env("HOME", home);
    cmd
}

/// Fresh HOME directory for one test.
pub fn test_home(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_babybirthdays_home", name));
    let home = path.to_string_lossy().to_string();
    if name != "shared" {
        fs::remove_dir_all(&home).ok();
    }
    fs::create_dir_all(&home).expect("create test home");
    home
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_babybirthdays.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Epoch milliseconds of midnight UTC for the given calendar date.
pub fn ms(y: i32, m: u32, d: u32) -> i64 {
    NaiveDate::from_ymd_opt(y, m, d)
        .expect("valid date")
        .and_hms_opt(0, 0, 0)
        .expect("valid time")
        .and_utc()
        .timestamp_millis()
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    bb().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    bb().args(["--db", db_path, "add", "Alice", "2020-01-01"])
        .assert()
        .success();

    bb().args(["--db", db_path, "add", "Bruno", "2019-01-15"])
        .assert()
        .success();
}
