//! Per-task and per-contributor rollups of a single day.

use crate::core::calculator::labels::{UNTITLED_TASK, contributor_label, normalize_or};
use crate::models::event::Event;
use crate::models::ledger::TaskLedger;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyTaskDetailRow {
    /// `myTaskId` of the linked task, or `label:<name>` for free-text tasks.
    pub key: String,
    pub name: String,
    pub total_duration_ms: i64,
    pub event_count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyInterruptionDetailRow {
    pub who: String,
    pub total_duration_ms: i64,
    pub count: i64,
}

/// Identity and display name of a task event.
fn task_identity(ev: &Event, ledger: &TaskLedger) -> (String, String) {
    match ev.my_task_id() {
        Some(task_id) => {
            let name = ledger
                .name_of(task_id)
                .or_else(|| ev.trimmed_label())
                .unwrap_or(UNTITLED_TASK);
            (task_id.to_string(), name.to_string())
        }
        None => {
            let name = normalize_or(ev.label.as_deref(), UNTITLED_TASK);
            (format!("label:{name}"), name.to_string())
        }
    }
}

/// Finished task events with positive duration, grouped by task identity.
///
/// Sorted by total duration, then session count, both descending; name
/// ascending settles what is left.
pub fn build_daily_task_details(events: &[Event], ledger: &TaskLedger) -> Vec<DailyTaskDetailRow> {
    let grouped = events
        .iter()
        .filter(|e| e.event_type().is_task())
        .filter_map(|e| e.closed_duration_ms().filter(|d| *d > 0).map(|d| (e, d)))
        .fold(
            HashMap::<String, DailyTaskDetailRow>::new(),
            |mut acc, (ev, duration)| {
                let (key, name) = task_identity(ev, ledger);
                let row = acc.entry(key.clone()).or_insert_with(|| DailyTaskDetailRow {
                    key,
                    name,
                    total_duration_ms: 0,
                    event_count: 0,
                });
                row.total_duration_ms += duration;
                row.event_count += 1;
                acc
            },
        );

    let mut rows: Vec<DailyTaskDetailRow> = grouped.into_values().collect();
    rows.sort_by(|a, b| {
        b.total_duration_ms
            .cmp(&a.total_duration_ms)
            .then_with(|| b.event_count.cmp(&a.event_count))
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.key.cmp(&b.key))
    });
    rows
}

/// Interruptions grouped by contributor. Running ones count with zero
/// duration.
///
/// Sorted by count, then total duration, both descending.
pub fn build_daily_interruption_details(events: &[Event]) -> Vec<DailyInterruptionDetailRow> {
    let grouped = events.iter().filter(|e| e.event_type().is_interrupt()).fold(
        HashMap::<String, DailyInterruptionDetailRow>::new(),
        |mut acc, ev| {
            let who = contributor_label(ev.who());
            let row = acc
                .entry(who.clone())
                .or_insert_with(|| DailyInterruptionDetailRow {
                    who,
                    total_duration_ms: 0,
                    count: 0,
                });
            row.total_duration_ms += ev.closed_duration_ms().unwrap_or(0);
            row.count += 1;
            acc
        },
    );

    let mut rows: Vec<DailyInterruptionDetailRow> = grouped.into_values().collect();
    rows.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| b.total_duration_ms.cmp(&a.total_duration_ms))
            .then_with(|| a.who.cmp(&b.who))
    });
    rows
}
