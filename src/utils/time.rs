//! Time utilities: millisecond/minute conversions and signed formatting.

pub const MS_PER_MINUTE: i64 = 60_000;

pub fn ms_to_minutes(ms: i64) -> f64 {
    ms as f64 / MS_PER_MINUTE as f64
}

/// Whole minutes, rounded half away from zero.
pub fn ms_to_whole_minutes(ms: i64) -> i64 {
    ms_to_minutes(ms).round() as i64
}

pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}
