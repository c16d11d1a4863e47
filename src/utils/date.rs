use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Duration, LocalResult, NaiveDate, NaiveTime, TimeZone, Timelike, Weekday};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn now_ms() -> i64 {
    chrono::Local::now().timestamp_millis()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Calendar date, in `tz`, of the instant `ms`.
/// Out-of-range timestamps collapse to 1970-01-01.
pub fn date_of_timestamp<Tz: TimeZone>(ms: i64, tz: &Tz) -> NaiveDate {
    tz.timestamp_millis_opt(ms)
        .single()
        .map(|dt| dt.date_naive())
        .unwrap_or_default()
}

/// Hour of day (0-23), in `tz`, of the instant `ms`.
pub fn hour_of_timestamp<Tz: TimeZone>(ms: i64, tz: &Tz) -> u32 {
    tz.timestamp_millis_opt(ms)
        .single()
        .map(|dt| dt.hour())
        .unwrap_or(0)
}

/// Epoch ms of local midnight opening `date`.
///
/// Ambiguous midnights (DST fall-back) resolve to the earlier instant.
/// A midnight swallowed by a DST gap resolves to 01:00 of the same date.
pub fn local_midnight_ms<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> i64 {
    let midnight = date.and_time(NaiveTime::MIN);
    match tz.from_local_datetime(&midnight) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt.timestamp_millis(),
        LocalResult::None => {
            let one_am = midnight + Duration::hours(1);
            tz.from_local_datetime(&one_am)
                .earliest()
                .map(|dt| dt.timestamp_millis())
                .unwrap_or_else(|| midnight.and_utc().timestamp_millis())
        }
    }
}

/// First day of the week containing `date`, for weeks opening on `week_start`.
pub fn week_start_of(date: NaiveDate, week_start: Weekday) -> NaiveDate {
    let offset = (7 + date.weekday().num_days_from_monday() - week_start.num_days_from_monday()) % 7;
    date - Duration::days(i64::from(offset))
}

pub fn parse_week_start(s: &str) -> AppResult<Weekday> {
    s.trim()
        .parse::<Weekday>()
        .map_err(|_| AppError::InvalidWeekStart(s.to_string()))
}
