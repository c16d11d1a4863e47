use super::day_key::DayKey;
use crate::utils::date::week_start_of;
use chrono::{TimeZone, Weekday};
use serde::Serialize;

/// A contiguous run of local calendar days, both endpoints included.
///
/// `start` is local midnight opening `start_key`, `end` is local midnight
/// closing `end_key` (exclusive). Both are epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start: i64,
    pub end: i64,
    pub start_key: DayKey,
    pub end_key: DayKey,
    pub days: Vec<DayKey>,
}

impl DateRange {
    /// Range from `first` to `last`. Swapped endpoints are reordered.
    pub fn between<Tz: TimeZone>(first: DayKey, last: DayKey, tz: &Tz) -> Self {
        let (start_key, end_key) = if first <= last {
            (first, last)
        } else {
            (last, first)
        };

        let mut days = Vec::new();
        let mut d = start_key;
        loop {
            days.push(d);
            if d >= end_key {
                break;
            }
            let next = d.succ();
            if next == d {
                break;
            }
            d = next;
        }

        Self {
            start: start_key.start_ms(tz),
            end: end_key.end_ms(tz),
            start_key,
            end_key,
            days,
        }
    }

    pub fn day<Tz: TimeZone>(day: DayKey, tz: &Tz) -> Self {
        Self::between(day, day, tz)
    }

    /// The seven days of the week containing `day`.
    pub fn week_of<Tz: TimeZone>(day: DayKey, week_start: Weekday, tz: &Tz) -> Self {
        let first = DayKey::new(week_start_of(day.date(), week_start));
        Self::between(first, first.offset_days(6), tz)
    }

    /// Equal-length period ending the day before this one starts.
    pub fn previous<Tz: TimeZone>(&self, tz: &Tz) -> Self {
        let len = self.days.len() as i64;
        let last = self.start_key.pred();
        Self::between(last.offset_days(1 - len), last, tz)
    }

    pub fn is_single_day(&self) -> bool {
        self.days.len() == 1
    }

    pub fn contains_day(&self, day: &DayKey) -> bool {
        *day >= self.start_key && *day <= self.end_key
    }
}
