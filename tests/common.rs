#![allow(dead_code)]
use agrimpact::db::Store;
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, with HOME pointed at a scratch directory so a real
/// user configuration never leaks into the run.
pub fn agri() -> Command {
    let mut cmd = cargo_bin_cmd!("agrimpact");
    cmd.env("HOME", env::temp_dir().join("agrimpact_test_home"));
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_agrimpact.sqlite", name));
    fs::remove_file(&path).ok();
    path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    fs::remove_file(&path).ok();
    path
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

/// Fresh, initialized store.
pub fn fresh_store(name: &str) -> Store {
    let store = Store::new(setup_test_db(name));
    store.initialize().expect("initialize store");
    store
}

/// The Soil Health Day dataset: one event with two attendees.
/// Returns the event id.
pub fn seed_soil_health_day(store: &Store) -> i64 {
    let id = store
        .add_event("Soil Health Day", date("2024-03-01"), "Nairobi", "soil")
        .expect("add event");
    store
        .add_attendee(id, "Amina", "Female", "Nairobi")
        .expect("add Amina");
    store
        .add_attendee(id, "Kofi", "Male", "Kiambu")
        .expect("add Kofi");
    id
}

/// Initialize a database through the CLI without touching the config file.
pub fn cli_init(db_path: &str) {
    agri()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}
