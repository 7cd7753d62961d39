#![allow(dead_code)]

use chrono::{Local, NaiveDate, TimeZone};
use fitfocus::db::Database;
use fitfocus::models::{ExtractedFields, Kind, LogRecord};
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary store for testing.
pub fn setup_db() -> (TempDir, Database) {
    let dir = TempDir::new().unwrap();
    let db = Database::open(&db_path(&dir)).unwrap();
    (dir, db)
}

pub fn db_path(dir: &TempDir) -> PathBuf {
    dir.path().join("test.db")
}

/// Open a second handle on the same store file.
pub fn reopen(dir: &TempDir) -> Database {
    Database::open(&db_path(dir)).unwrap()
}

/// Epoch milliseconds for local noon on `date`.
pub fn local_noon(date: NaiveDate) -> i64 {
    let dt = date.and_hms_opt(12, 0, 0).unwrap();
    Local.from_local_datetime(&dt).unwrap().timestamp_millis()
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn meal(calories: f64, protein: f64, carbs: f64, fats: f64, score: u8) -> LogRecord {
    LogRecord::build_at(
        ExtractedFields {
            kind: Kind::Meal,
            label: "meal".into(),
            calories,
            protein,
            carbs,
            fats,
            nutrient_score: score,
            duration_minutes: 0.0,
        },
        local_noon(today()),
    )
}

pub fn exercise(calories: f64, minutes: f64) -> LogRecord {
    LogRecord::build_at(
        ExtractedFields {
            kind: Kind::Exercise,
            label: "workout".into(),
            calories,
            protein: 0.0,
            carbs: 0.0,
            fats: 0.0,
            nutrient_score: 75,
            duration_minutes: minutes,
        },
        local_noon(today()),
    )
}

/// Same record, created at local noon on `date`.
pub fn on(mut r: LogRecord, date: NaiveDate) -> LogRecord {
    r.created_at = local_noon(date);
    r
}
