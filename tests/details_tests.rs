use rtimereport::core::calculator::details::{
    build_daily_interruption_details, build_daily_task_details,
};
use rtimereport::core::calculator::labels::{UNKNOWN_CONTRIBUTOR, UNTITLED_TASK};
use rtimereport::models::event::Event;
use rtimereport::models::ledger::{LifecycleAction, TaskLedger, TaskLifecycleRecord};

mod common;
use common::{MIN, linked_task, ts};

fn record(task_id: &str, name: &str, action: LifecycleAction, at: i64) -> TaskLifecycleRecord {
    TaskLifecycleRecord {
        task_id: task_id.to_string(),
        name: name.to_string(),
        category_id: None,
        action,
        at,
    }
}

#[test]
fn test_tasks_sorted_by_duration() {
    let ledger = TaskLedger::from_records(&[record("a", "Write report", LifecycleAction::Created, 0)]);
    let events = vec![
        Event::task("b1", ts(2025, 1, 1, 13, 0), Some(ts(2025, 1, 1, 14, 0))).with_label("Emails"),
        linked_task("a1", "a", ts(2025, 1, 1, 9, 0), ts(2025, 1, 1, 9, 45)),
        linked_task("a2", "a", ts(2025, 1, 1, 10, 0), ts(2025, 1, 1, 10, 45)),
    ];

    let rows = build_daily_task_details(&events, &ledger);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].key, "a");
    assert_eq!(rows[0].name, "Write report");
    assert_eq!(rows[0].total_duration_ms, 90 * MIN);
    assert_eq!(rows[0].event_count, 2);
    assert_eq!(rows[1].key, "label:Emails");
    assert_eq!(rows[1].total_duration_ms, 60 * MIN);
}

#[test]
fn test_duration_tie_broken_by_sessions() {
    let events = vec![
        Event::task("d", ts(2025, 1, 1, 8, 0), Some(ts(2025, 1, 1, 9, 0))).with_label("D"),
        Event::task("c1", ts(2025, 1, 1, 10, 0), Some(ts(2025, 1, 1, 10, 30))).with_label("C"),
        Event::task("c2", ts(2025, 1, 1, 11, 0), Some(ts(2025, 1, 1, 11, 30))).with_label("C"),
    ];

    let rows = build_daily_task_details(&events, &TaskLedger::default());

    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["C", "D"]);
}

#[test]
fn test_name_resolution_fallbacks() {
    let ledger = TaskLedger::from_records(&[
        record("x", "Old name", LifecycleAction::Created, 1),
        record("x", "Final name", LifecycleAction::Completed, 5),
        record("blank", "   ", LifecycleAction::Created, 1),
    ]);
    let events = vec![
        linked_task("e1", "x", ts(2025, 1, 1, 9, 0), ts(2025, 1, 1, 10, 0)),
        linked_task("e2", "blank", ts(2025, 1, 1, 11, 0), ts(2025, 1, 1, 11, 50)).with_label("  Fix bug "),
        linked_task("e3", "missing", ts(2025, 1, 1, 12, 0), ts(2025, 1, 1, 12, 40)),
    ];

    let rows = build_daily_task_details(&events, &ledger);
    let names: Vec<(&str, &str)> = rows.iter().map(|r| (r.key.as_str(), r.name.as_str())).collect();

    assert_eq!(
        names,
        vec![("x", "Final name"), ("blank", "Fix bug"), ("missing", UNTITLED_TASK)]
    );
}

#[test]
fn test_blank_labels_collapse_into_one_group() {
    let events = vec![
        Event::task("a", ts(2025, 1, 1, 9, 0), Some(ts(2025, 1, 1, 9, 10))),
        Event::task("b", ts(2025, 1, 1, 10, 0), Some(ts(2025, 1, 1, 10, 10))).with_label("   "),
        Event::task("c", ts(2025, 1, 1, 11, 0), Some(ts(2025, 1, 1, 11, 5))).with_label(" Review "),
    ];

    let rows = build_daily_task_details(&events, &TaskLedger::default());

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].key, format!("label:{}", UNTITLED_TASK));
    assert_eq!(rows[0].event_count, 2);
    assert_eq!(rows[1].key, "label:Review");
}

#[test]
fn test_running_and_empty_tasks_are_skipped() {
    let at = ts(2025, 1, 1, 9, 0);
    let events = vec![
        Event::task("run", at, None),
        Event::task("zero", at, Some(at)),
        Event::pause("p", at, Some(ts(2025, 1, 1, 9, 30))),
    ];

    assert!(build_daily_task_details(&events, &TaskLedger::default()).is_empty());
}

#[test]
fn test_interruptions_grouped_by_contributor() {
    let events = vec![
        Event::interrupt("1", Some("Alice"), ts(2025, 1, 1, 9, 0), Some(ts(2025, 1, 1, 9, 30))),
        Event::interrupt("2", Some(" "), ts(2025, 1, 1, 10, 0), Some(ts(2025, 1, 1, 10, 5))),
        Event::interrupt("3", None, ts(2025, 1, 1, 11, 0), Some(ts(2025, 1, 1, 11, 5))),
        Event::interrupt("4", Some(" Bob "), ts(2025, 1, 1, 12, 0), Some(ts(2025, 1, 1, 12, 40))),
        Event::task("t", ts(2025, 1, 1, 13, 0), Some(ts(2025, 1, 1, 14, 0))),
    ];

    let rows = build_daily_interruption_details(&events);
    let got: Vec<(&str, i64, i64)> = rows
        .iter()
        .map(|r| (r.who.as_str(), r.count, r.total_duration_ms))
        .collect();

    assert_eq!(
        got,
        vec![
            (UNKNOWN_CONTRIBUTOR, 2, 10 * MIN),
            ("Bob", 1, 40 * MIN),
            ("Alice", 1, 30 * MIN),
        ]
    );
}
