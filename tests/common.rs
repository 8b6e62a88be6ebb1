#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use rworklog::models::settings::Settings;
use rworklog::models::work_record::{Timestamp, WorkRecord};
use rworklog::utils::time::parse_time_on;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rwl() -> Command {
    cargo_bin_cmd!("rworklog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rworklog.sqlite", name));
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

pub fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

/// Local timestamp for `date` at `hhmm`.
pub fn at(date: &str, hhmm: &str) -> Timestamp {
    parse_time_on(day(date), hhmm).expect("valid test time")
}

/// Settings with the stock rates (3000 / 3750, 480 min).
pub fn default_settings() -> Settings {
    Settings::with_timestamp(at("2025-01-01", "00:00"))
}

pub fn fresh_record(date: &str) -> WorkRecord {
    WorkRecord::new_for_date(day(date), at(date, "00:00"))
}

/// Initialize DB and punch a full day on 2025-06-02 (09-12, 13-18) and
/// a 09-19 day on 2025-06-03.
pub fn init_db_with_data(db_path: &str) {
    rwl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    for (cmd, date, time) in [
        ("in", "2025-06-02", "09:00"),
        ("break", "2025-06-02", "12:00"),
        ("resume", "2025-06-02", "13:00"),
        ("out", "2025-06-02", "18:00"),
        ("in", "2025-06-03", "09:00"),
        ("out", "2025-06-03", "19:00"),
    ] {
        rwl()
            .args(["--db", db_path, cmd, "--date", date, "--at", time])
            .assert()
            .success();
    }
}
