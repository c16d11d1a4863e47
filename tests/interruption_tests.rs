use chrono::Utc;
use rtimereport::core::calculator::collector::collect;
use rtimereport::core::calculator::interruptions::compute_interruption_stats;
use rtimereport::core::calculator::labels::{UNKNOWN_CONTRIBUTOR, UNSPECIFIED_TYPE};
use rtimereport::core::calculator::segmentation::build_index;
use rtimereport::models::event::Event;
use rtimereport::models::range::DateRange;

mod common;
use common::{MIN, day, ts, typed_interrupt};

#[test]
fn test_whitespace_who_groups_under_placeholder() {
    let events = vec![
        Event::interrupt("i1", Some(" "), ts(2025, 1, 1, 9, 0), Some(ts(2025, 1, 1, 9, 5))),
        Event::interrupt("i2", None, ts(2025, 1, 1, 10, 0), Some(ts(2025, 1, 1, 10, 5))),
    ];

    let stats = compute_interruption_stats(&events, 0, &Utc);

    assert_eq!(stats.top_contributors.len(), 1);
    assert_eq!(stats.top_contributors[0].label, UNKNOWN_CONTRIBUTOR);
    assert_eq!(stats.top_contributors[0].count, 2);
    assert_eq!(stats.top_types[0].label, UNSPECIFIED_TYPE);
}

#[test]
fn test_peak_hour_prefers_earliest_hour_on_tie() {
    let events = vec![
        Event::interrupt("a", Some("A"), ts(2025, 1, 1, 14, 0), Some(ts(2025, 1, 1, 14, 5))),
        Event::interrupt("b", Some("A"), ts(2025, 1, 1, 9, 10), Some(ts(2025, 1, 1, 9, 15))),
        Event::interrupt("c", Some("A"), ts(2025, 1, 1, 14, 30), Some(ts(2025, 1, 1, 14, 35))),
        Event::interrupt("d", Some("A"), ts(2025, 1, 1, 9, 40), Some(ts(2025, 1, 1, 9, 45))),
    ];

    let stats = compute_interruption_stats(&events, 0, &Utc);

    assert_eq!(stats.peak_hour, Some(9));
    assert_eq!(stats.peak_hour_label.as_deref(), Some("09:00-10:00"));
}

#[test]
fn test_contributors_ranked_by_count_then_duration() {
    let events = vec![
        typed_interrupt("1", "Alice", "chat", ts(2025, 1, 1, 9, 0), ts(2025, 1, 1, 9, 10)),
        typed_interrupt("2", "Alice", "chat", ts(2025, 1, 1, 10, 0), ts(2025, 1, 1, 10, 5)),
        typed_interrupt("3", "Bob", "chat", ts(2025, 1, 1, 11, 0), ts(2025, 1, 1, 11, 20)),
        typed_interrupt("4", "Bob", "call", ts(2025, 1, 1, 12, 0), ts(2025, 1, 1, 12, 20)),
        typed_interrupt("5", "Carol", "call", ts(2025, 1, 1, 13, 0), ts(2025, 1, 1, 14, 0)),
        Event::task("t", ts(2025, 1, 1, 15, 0), Some(ts(2025, 1, 1, 16, 0))),
    ];

    let stats = compute_interruption_stats(&events, 0, &Utc);

    assert_eq!(stats.total_count, 5);
    assert_eq!(stats.total_duration_ms, (10 + 5 + 20 + 20 + 60) * MIN);

    let order: Vec<&str> = stats.top_contributors.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(order, vec!["Bob", "Alice", "Carol"]);

    // Bob's types tie on count and duration: label order decides
    let bob_types: Vec<&str> = stats.top_contributors[0]
        .top_types
        .iter()
        .map(|t| t.label.as_str())
        .collect();
    assert_eq!(bob_types, vec!["call", "chat"]);

    let types: Vec<(&str, i64)> = stats
        .top_types
        .iter()
        .map(|t| (t.label.as_str(), t.count))
        .collect();
    assert_eq!(types, vec![("chat", 3), ("call", 2)]);
}

#[test]
fn test_split_interruption_counted_once() {
    let ev = typed_interrupt("late", "Ops", "page", ts(2025, 1, 1, 23, 50), ts(2025, 1, 2, 0, 10));
    let index = build_index(&[ev], ts(2025, 1, 3, 0, 0), &Utc);
    let range = DateRange::between(day(2025, 1, 1), day(2025, 1, 2), &Utc);

    let stats = compute_interruption_stats(&collect(&index, &range), 0, &Utc);

    assert_eq!(stats.total_count, 1);
    assert_eq!(stats.total_duration_ms, 20 * MIN);
    assert_eq!(stats.peak_hour, Some(23));
    assert_eq!(stats.top_contributors[0].count, 1);
    assert_eq!(stats.top_contributors[0].total_duration_ms, 20 * MIN);
}

#[test]
fn test_no_interruptions_gives_empty_stats() {
    let events = vec![Event::task("t", ts(2025, 1, 1, 9, 0), Some(ts(2025, 1, 1, 10, 0)))];

    let stats = compute_interruption_stats(&events, 0, &Utc);

    assert_eq!(stats.total_count, 0);
    assert_eq!(stats.peak_hour, None);
    assert_eq!(stats.peak_hour_label, None);
    assert!(stats.top_contributors.is_empty());
    assert!(stats.top_types.is_empty());
}
