//! Day segmentation of the event log.
//!
//! Events crossing local midnight are cut into one fragment per day they
//! touch, so that any range of days can be read straight from the index.

use crate::models::day_key::DayKey;
use crate::models::event::Event;
use chrono::TimeZone;
use std::collections::BTreeMap;

/// Events and fragments bucketed by the local day they belong to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventIndex {
    days: BTreeMap<DayKey, Vec<Event>>,
}

impl EventIndex {
    pub fn get(&self, day: &DayKey) -> &[Event] {
        self.days.get(day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Indexed days, ascending.
    pub fn days(&self) -> impl Iterator<Item = &DayKey> {
        self.days.keys()
    }

    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    fn push(&mut self, day: DayKey, event: Event) {
        self.days.entry(day).or_default().push(event);
    }
}

/// Bucket every event under the local day(s) its `[start, end)` touches.
///
/// A running event is treated as ending at `now` for day membership only:
/// its last fragment keeps `end = None`.
pub fn build_index<Tz: TimeZone>(events: &[Event], now: i64, tz: &Tz) -> EventIndex {
    let mut index = EventIndex::default();
    let mut split = 0usize;

    for ev in events {
        let fragments = split_by_day(ev, now, tz);
        if fragments.len() > 1 {
            split += 1;
        }
        for (day, frag) in fragments {
            index.push(day, frag);
        }
    }

    tracing::debug!(
        events = events.len(),
        split,
        days = index.day_count(),
        "event index built"
    );

    index
}

/// Cut `ev` at every local midnight inside its interval.
///
/// An event confined to one day comes back unmodified. Otherwise each
/// fragment keeps the original id, is clamped to its day and carries
/// `meta.split_ref_id = ev.id`.
pub fn split_by_day<Tz: TimeZone>(ev: &Event, now: i64, tz: &Tz) -> Vec<(DayKey, Event)> {
    let effective_end = ev.end.unwrap_or(now).max(ev.start);
    let first_day = DayKey::from_timestamp(ev.start, tz);

    // [start, end) is half-open: an event ending exactly at midnight does
    // not touch the following day.
    let last_day = if effective_end > ev.start {
        DayKey::from_timestamp(effective_end - 1, tz)
    } else {
        first_day
    };

    if last_day <= first_day {
        return vec![(first_day, ev.clone())];
    }

    let mut out = Vec::new();
    let mut day = first_day;
    loop {
        let day_start = day.start_ms(tz);
        let day_end = day.end_ms(tz);

        let mut frag = ev.clone();
        frag.start = ev.start.max(day_start);
        frag.end = match ev.end {
            Some(end) => Some(end.min(day_end)),
            // still running: only the days before today are closed off
            None if day < last_day => Some(day_end),
            None => None,
        };
        frag.meta.split_ref_id = Some(ev.id.clone());
        out.push((day, frag));

        let next = day.succ();
        if day >= last_day || next == day {
            break;
        }
        day = next;
    }

    tracing::trace!(id = %ev.id, fragments = out.len(), "event split across days");
    out
}
