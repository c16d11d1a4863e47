//! Interruption analytics: totals, peak hour, contributor and type rankings.

use crate::core::calculator::labels::{contributor_label, interrupt_type_label};
use crate::models::event::Event;
use crate::utils::date::hour_of_timestamp;
use crate::utils::formatting::hour_label;
use chrono::TimeZone;
use serde::Serialize;
use std::collections::BTreeMap;

/// Count and duration of one grouping key (a contributor or a type).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStats {
    pub label: String,
    pub count: i64,
    pub total_duration_ms: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributorStats {
    pub label: String,
    pub count: i64,
    pub total_duration_ms: i64,
    pub top_types: Vec<CategoryStats>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterruptionStats {
    pub total_count: i64,
    pub total_duration_ms: i64,
    pub peak_hour: Option<u32>,
    pub peak_hour_label: Option<String>,
    pub top_contributors: Vec<ContributorStats>,
    pub top_types: Vec<CategoryStats>,
}

/// One interruption after merging its day fragments.
struct Interruption {
    who: String,
    kind: String,
    start: i64,
    duration_ms: i64,
}

/// Merge fragments sharing an id: durations add up, the earliest start
/// stands for the original start. First-seen order is kept.
fn dedupe_by_id(events: &[Event], now: i64) -> Vec<Interruption> {
    let mut order: Vec<&str> = Vec::new();
    let mut merged: BTreeMap<&str, Interruption> = BTreeMap::new();

    for ev in events.iter().filter(|e| e.event_type().is_interrupt()) {
        let duration = ev.duration_ms(now);
        match merged.get_mut(ev.id.as_str()) {
            Some(it) => {
                it.duration_ms += duration;
                it.start = it.start.min(ev.start);
            }
            None => {
                order.push(ev.id.as_str());
                merged.insert(
                    ev.id.as_str(),
                    Interruption {
                        who: contributor_label(ev.who()),
                        kind: interrupt_type_label(ev.interrupt_type()),
                        start: ev.start,
                        duration_ms: duration,
                    },
                );
            }
        }
    }

    order
        .into_iter()
        .filter_map(|id| merged.remove(id))
        .collect()
}

#[derive(Default)]
struct Tally {
    count: i64,
    duration_ms: i64,
}

/// Count descending, then duration descending, then label ascending.
fn rank<'a>(groups: impl IntoIterator<Item = (&'a str, Tally)>) -> Vec<CategoryStats> {
    let mut out: Vec<CategoryStats> = groups
        .into_iter()
        .map(|(label, t)| CategoryStats {
            label: label.to_string(),
            count: t.count,
            total_duration_ms: t.duration_ms,
        })
        .collect();

    out.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| b.total_duration_ms.cmp(&a.total_duration_ms))
            .then_with(|| a.label.cmp(&b.label))
    });
    out
}

fn tally_by<'a, F>(items: &[&'a Interruption], key: F) -> BTreeMap<&'a str, Tally>
where
    F: Fn(&'a Interruption) -> &'a str,
{
    items.iter().copied().fold(BTreeMap::new(), |mut acc, it| {
        let t: &mut Tally = acc.entry(key(it)).or_default();
        t.count += 1;
        t.duration_ms += it.duration_ms;
        acc
    })
}

/// Hour of day with the most interruption starts; earliest hour on ties.
fn peak_hour<Tz: TimeZone>(items: &[Interruption], tz: &Tz) -> Option<u32> {
    let mut buckets = [0i64; 24];
    for it in items {
        let h = hour_of_timestamp(it.start, tz) as usize;
        buckets[h.min(23)] += 1;
    }

    let mut best: Option<(u32, i64)> = None;
    for (h, &n) in buckets.iter().enumerate() {
        if n > 0 && best.is_none_or(|(_, top)| n > top) {
            best = Some((h as u32, n));
        }
    }
    best.map(|(h, _)| h)
}

/// Interruption statistics over `events`; other event types are ignored.
pub fn compute_interruption_stats<Tz: TimeZone>(events: &[Event], now: i64, tz: &Tz) -> InterruptionStats {
    let items = dedupe_by_id(events, now);
    if items.is_empty() {
        return InterruptionStats::default();
    }

    let all: Vec<&Interruption> = items.iter().collect();
    let peak = peak_hour(&items, tz);

    let top_contributors = rank(tally_by(&all, |it| it.who.as_str()))
        .into_iter()
        .map(|c| {
            let theirs: Vec<&Interruption> =
                all.iter().copied().filter(|it| it.who == c.label).collect();
            ContributorStats {
                top_types: rank(tally_by(&theirs, |it| it.kind.as_str())),
                label: c.label,
                count: c.count,
                total_duration_ms: c.total_duration_ms,
            }
        })
        .collect();

    let stats = InterruptionStats {
        total_count: items.len() as i64,
        total_duration_ms: items.iter().map(|it| it.duration_ms).sum(),
        peak_hour: peak,
        peak_hour_label: peak.map(hour_label),
        top_contributors,
        top_types: rank(tally_by(&all, |it| it.kind.as_str())),
    };

    tracing::debug!(
        count = stats.total_count,
        contributors = stats.top_contributors.len(),
        peak = ?stats.peak_hour,
        "interruption stats computed"
    );

    stats
}
