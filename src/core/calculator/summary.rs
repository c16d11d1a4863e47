use crate::models::event::Event;
use crate::models::event_type::EventType;
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryItem {
    pub event_type: EventType,
    pub total_duration_ms: i64,
    pub total_count: i64,
    pub delta_duration_ms: i64,
    pub delta_count: i64,
}

/// Per-type totals of a period, in the fixed order task, interrupt, break.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryMetrics {
    pub items: Vec<SummaryItem>,
}

impl SummaryMetrics {
    pub fn item(&self, event_type: EventType) -> Option<&SummaryItem> {
        self.items.iter().find(|i| i.event_type == event_type)
    }

    pub fn total_duration_ms(&self) -> i64 {
        self.items.iter().map(|i| i.total_duration_ms).sum()
    }
}

/// Running totals of one type: duration over every fragment, count over
/// distinct ids.
#[derive(Debug, Default)]
struct TypeTotals<'a> {
    duration_ms: i64,
    ids: HashSet<&'a str>,
}

impl<'a> TypeTotals<'a> {
    fn add(mut self, ev: &'a Event, now: i64) -> Self {
        self.duration_ms += ev.duration_ms(now);
        self.ids.insert(ev.id.as_str());
        self
    }

    fn count(&self) -> i64 {
        self.ids.len() as i64
    }
}

fn totals_of(events: &[Event], event_type: EventType, now: i64) -> TypeTotals<'_> {
    events
        .iter()
        .filter(|e| e.event_type() == event_type)
        .fold(TypeTotals::default(), |acc, ev| acc.add(ev, now))
}

/// Totals of `current` per type, with deltas against `previous`.
///
/// A split event adds every fragment's duration but is counted once.
/// Running events are measured up to `now`.
pub fn compute_summary_metrics(current: &[Event], previous: &[Event], now: i64) -> SummaryMetrics {
    let items = EventType::ALL
        .iter()
        .map(|&event_type| {
            let cur = totals_of(current, event_type, now);
            let prev = totals_of(previous, event_type, now);

            SummaryItem {
                event_type,
                total_duration_ms: cur.duration_ms,
                total_count: cur.count(),
                delta_duration_ms: cur.duration_ms - prev.duration_ms,
                delta_count: cur.count() - prev.count(),
            }
        })
        .collect();

    SummaryMetrics { items }
}
