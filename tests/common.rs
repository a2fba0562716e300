#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use eventbuddy::models::event::{Event, EventDraft};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn eb() -> Command {
    cargo_bin_cmd!("eventbuddy")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_eventbuddy.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_eventbuddy_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a fresh DB through the CLI (test mode: no config file written)
pub fn init_db(db_path: &str) {
    eb().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub fn login(db_path: &str, email: &str, password: &str) {
    eb().args(["--db", db_path, "login", "--email", email, "--password", password])
        .assert()
        .success();
}

pub fn login_admin(db_path: &str) {
    login(db_path, "admin@example.com", "admin123");
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

pub fn at(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").expect("valid test datetime")
}

pub fn event(id: i64, day: &str, title: &str) -> Event {
    Event {
        id,
        title: title.to_string(),
        date: date(day),
        time: "10:00 AM – 12:00 PM".to_string(),
        description: format!("{} description", title),
        location: "Main Hall".to_string(),
        capacity: 50,
        tags: vec!["Tech".to_string()],
        image: "/img.png".to_string(),
        spots_left: 50,
        is_past: false,
    }
}

pub fn draft(title: &str, day: &str, capacity: i64) -> EventDraft {
    EventDraft {
        title: title.to_string(),
        date: day.to_string(),
        time: "09:00 AM – 11:00 AM".to_string(),
        description: "A draft event".to_string(),
        location: "Room 101".to_string(),
        capacity,
        tags: "Tech, Workshop".to_string(),
        image: None,
    }
}
