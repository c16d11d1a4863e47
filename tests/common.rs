#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{Local, TimeZone, Utc};
use rtimereport::models::day_key::DayKey;
use rtimereport::models::event::{Event, EventKind};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rtr() -> Command {
    cargo_bin_cmd!("rtimereport")
}

pub const MIN: i64 = 60_000;
pub const HOUR: i64 = 60 * MIN;

/// Epoch ms of a UTC wall-clock time
pub fn ts(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> i64 {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0)
        .unwrap()
        .timestamp_millis()
}

/// Epoch ms of a local wall-clock time (CLI tests run in the local zone)
pub fn local_ts(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> i64 {
    Local
        .with_ymd_and_hms(y, mo, d, h, mi, 0)
        .earliest()
        .unwrap()
        .timestamp_millis()
}

pub fn day(y: i32, m: u32, d: u32) -> DayKey {
    DayKey::from_ymd(y, m, d).unwrap()
}

pub fn linked_task(id: &str, my_task_id: &str, start: i64, end: i64) -> Event {
    Event::new(
        id,
        EventKind::Task {
            my_task_id: Some(my_task_id.to_string()),
            category_id: None,
        },
        start,
        Some(end),
    )
}

pub fn typed_interrupt(id: &str, who: &str, kind: &str, start: i64, end: i64) -> Event {
    Event::new(
        id,
        EventKind::Interrupt {
            who: Some(who.to_string()),
            interrupt_type: Some(kind.to_string()),
            urgency: None,
        },
        start,
        Some(end),
    )
}

/// Create a temporary file path inside the system temp dir and ensure it's removed
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimereport.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `content` to a fresh temp file and return its path
pub fn write_temp(name: &str, ext: &str, content: &str) -> String {
    let p = temp_path(name, ext);
    fs::write(&p, content).expect("write temp file");
    p
}
