use crate::models::category::{Category, color_of};
use crate::models::event::Event;
use crate::models::event_type::EventType;
use crate::utils::time::ms_to_minutes;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineSegment {
    pub id: String,
    pub label: String,
    pub event_type: EventType,
    pub start: i64,
    pub end: i64,
    pub duration_ms: i64,
    pub duration_minutes: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineSummary {
    pub first_start: Option<i64>,
    pub last_end: Option<i64>,
    pub total_focus_minutes: f64,
    pub total_interrupt_minutes: f64,
    pub total_break_minutes: f64,
    pub longest_focus: Option<TimelineSegment>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TimelineData {
    pub segments: Vec<TimelineSegment>,
    pub summary: TimelineSummary,
}

fn to_segment(ev: &Event, end: i64, categories: &[Category]) -> TimelineSegment {
    let event_type = ev.event_type();
    let duration_ms = end - ev.start;

    TimelineSegment {
        id: ev.id.clone(),
        label: ev
            .trimmed_label()
            .unwrap_or(event_type.default_label())
            .to_string(),
        event_type,
        start: ev.start,
        end,
        duration_ms,
        duration_minutes: ms_to_minutes(duration_ms),
        category_color: color_of(categories, ev.category_id()).map(str::to_string),
    }
}

/// Chronological segments of the finished, non-empty events of a day,
/// with the running summary.
pub fn build_timeline(events: &[Event], categories: &[Category]) -> TimelineData {
    // -----------------------------
    // Keep finished events, oldest first
    // -----------------------------
    let mut finished: Vec<(&Event, i64)> = events
        .iter()
        .filter_map(|e| e.end.filter(|end| *end > e.start).map(|end| (e, end)))
        .collect();
    finished.sort_by_key(|(e, _)| e.start);

    if finished.is_empty() {
        return TimelineData::default();
    }

    let mut segments = Vec::with_capacity(finished.len());
    let mut summary = TimelineSummary::default();
    let (mut focus_ms, mut interrupt_ms, mut break_ms) = (0i64, 0i64, 0i64);

    // -----------------------------
    // Build segments and running totals
    // -----------------------------
    for (ev, end) in finished {
        let seg = to_segment(ev, end, categories);

        summary.first_start = Some(summary.first_start.map_or(seg.start, |s| s.min(seg.start)));
        summary.last_end = Some(summary.last_end.map_or(seg.end, |e| e.max(seg.end)));

        match seg.event_type {
            EventType::Task => {
                focus_ms += seg.duration_ms;
                // strict: the first of equally long sessions stays
                let longer = summary
                    .longest_focus
                    .as_ref()
                    .is_none_or(|best| seg.duration_ms > best.duration_ms);
                if longer {
                    summary.longest_focus = Some(seg.clone());
                }
            }
            EventType::Interrupt => interrupt_ms += seg.duration_ms,
            EventType::Break => break_ms += seg.duration_ms,
        }

        segments.push(seg);
    }

    summary.total_focus_minutes = ms_to_minutes(focus_ms);
    summary.total_interrupt_minutes = ms_to_minutes(interrupt_ms);
    summary.total_break_minutes = ms_to_minutes(break_ms);

    TimelineData { segments, summary }
}
