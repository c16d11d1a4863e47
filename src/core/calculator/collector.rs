use crate::core::calculator::segmentation::EventIndex;
use crate::models::event::Event;
use crate::models::range::DateRange;

/// All events and fragments stored under the days of `range`, day by day.
///
/// No deduplication: a split event shows up once per collected day, each
/// time as its own clamped fragment.
pub fn collect(index: &EventIndex, range: &DateRange) -> Vec<Event> {
    let collected: Vec<Event> = range
        .days
        .iter()
        .flat_map(|day| index.get(day).iter().cloned())
        .collect();

    tracing::debug!(
        from = %range.start_key,
        to = %range.end_key,
        events = collected.len(),
        "range collected"
    );

    collected
}
