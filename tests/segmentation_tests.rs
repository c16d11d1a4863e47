use chrono::{FixedOffset, Utc};
use rtimereport::core::calculator::collector::collect;
use rtimereport::core::calculator::segmentation::{build_index, split_by_day};
use rtimereport::models::event::Event;
use rtimereport::models::range::DateRange;

mod common;
use common::{HOUR, MIN, day, ts};

#[test]
fn test_multi_day_event_fragments_sum_to_original() {
    let start = ts(2025, 1, 1, 23, 0);
    let end = ts(2025, 1, 3, 1, 0);
    let ev = Event::task("t1", start, Some(end));

    rtimereport::logging::init_test();
    let index = build_index(std::slice::from_ref(&ev), end, &Utc);
    assert_eq!(index.day_count(), 3);
    assert_eq!(
        index.days().copied().collect::<Vec<_>>(),
        vec![day(2025, 1, 1), day(2025, 1, 2), day(2025, 1, 3)]
    );

    let mut total = 0;
    for d in [day(2025, 1, 1), day(2025, 1, 2), day(2025, 1, 3)] {
        let frags = index.get(&d);
        assert_eq!(frags.len(), 1, "one fragment on {}", d);

        let f = &frags[0];
        let f_end = f.end.unwrap();
        assert!(f.start >= d.start_ms(&Utc));
        assert!(f_end <= d.end_ms(&Utc));
        assert_eq!(f.id, "t1");
        assert_eq!(f.meta.split_ref_id.as_deref(), Some("t1"));
        total += f_end - f.start;
    }

    assert_eq!(total, end - start);
    assert_eq!(index.get(&day(2025, 1, 2))[0].end.unwrap() - index.get(&day(2025, 1, 2))[0].start, 24 * HOUR);
}

#[test]
fn test_single_day_event_is_indexed_unmodified() {
    let ev = Event::task("t1", ts(2025, 1, 1, 9, 0), Some(ts(2025, 1, 1, 10, 0))).with_label("Write");

    let index = build_index(std::slice::from_ref(&ev), ts(2025, 1, 1, 12, 0), &Utc);

    assert_eq!(index.get(&day(2025, 1, 1)), std::slice::from_ref(&ev));
    assert!(!index.get(&day(2025, 1, 1))[0].is_fragment());
}

#[test]
fn test_event_ending_at_midnight_stays_on_its_day() {
    let ev = Event::task("t1", ts(2025, 1, 1, 22, 0), Some(ts(2025, 1, 2, 0, 0)));

    let index = build_index(&[ev], ts(2025, 1, 3, 0, 0), &Utc);

    assert_eq!(index.day_count(), 1);
    assert_eq!(index.get(&day(2025, 1, 1)).len(), 1);
    assert!(index.get(&day(2025, 1, 2)).is_empty());
}

#[test]
fn test_zero_duration_event_belongs_to_start_day() {
    let at = ts(2025, 1, 1, 10, 0);
    let ev = Event::pause("b1", at, Some(at));

    let frags = split_by_day(&ev, ts(2025, 1, 5, 0, 0), &Utc);

    assert_eq!(frags.len(), 1);
    assert_eq!(frags[0].0, day(2025, 1, 1));
}

#[test]
fn test_running_event_keeps_last_fragment_open() {
    let start = ts(2025, 1, 1, 22, 0);
    let now = ts(2025, 1, 2, 2, 0);
    let ev = Event::task("run", start, None);

    let frags = split_by_day(&ev, now, &Utc);

    assert_eq!(frags.len(), 2);
    assert_eq!(frags[0].1.end, Some(ts(2025, 1, 2, 0, 0)));
    assert_eq!(frags[1].1.start, ts(2025, 1, 2, 0, 0));
    assert_eq!(frags[1].1.end, None);
    assert_eq!(frags[0].1.duration_ms(now) + frags[1].1.duration_ms(now), 4 * HOUR);
}

#[test]
fn test_split_follows_local_midnight_of_the_zone() {
    // 21:00-23:30 UTC is 23:00-01:30 at UTC+2
    let tz = FixedOffset::east_opt(2 * 3600).unwrap();
    let ev = Event::task("t1", ts(2025, 1, 1, 21, 0), Some(ts(2025, 1, 1, 23, 30)));

    let frags = split_by_day(&ev, ts(2025, 1, 2, 12, 0), &tz);

    assert_eq!(frags.len(), 2);
    assert_eq!(frags[0].0, day(2025, 1, 1));
    assert_eq!(frags[1].0, day(2025, 1, 2));
    assert_eq!(frags[0].1.end, Some(ts(2025, 1, 1, 22, 0)));
    assert_eq!(frags[1].1.duration_ms(0), 90 * MIN);

    // the same event stays whole in UTC
    assert_eq!(split_by_day(&ev, 0, &Utc).len(), 1);
}

#[test]
fn test_collect_concatenates_range_days_inclusive() {
    let events = vec![
        Event::task("a", ts(2025, 1, 1, 9, 0), Some(ts(2025, 1, 1, 10, 0))),
        Event::task("b", ts(2025, 1, 2, 9, 0), Some(ts(2025, 1, 2, 10, 0))),
        Event::task("c", ts(2025, 1, 3, 9, 0), Some(ts(2025, 1, 3, 10, 0))),
        Event::task("x", ts(2025, 1, 1, 23, 0), Some(ts(2025, 1, 2, 1, 0))),
    ];
    let index = build_index(&events, ts(2025, 1, 4, 0, 0), &Utc);

    let range = DateRange::between(day(2025, 1, 1), day(2025, 1, 2), &Utc);
    let got = collect(&index, &range);

    let mut ids: Vec<&str> = got.iter().map(|e| e.id.as_str()).collect();
    ids.sort();
    assert_eq!(ids, vec!["a", "b", "x", "x"]);

    let only_second = collect(&index, &DateRange::day(day(2025, 1, 2), &Utc));
    let x = only_second.iter().find(|e| e.id == "x").unwrap();
    assert_eq!(x.start, ts(2025, 1, 2, 0, 0));
    assert_eq!(x.closed_duration_ms(), Some(HOUR));
}

#[test]
fn test_empty_log_gives_empty_index() {
    let index = build_index(&[], 0, &Utc);
    assert!(index.is_empty());
    assert!(collect(&index, &DateRange::day(day(2025, 1, 1), &Utc)).is_empty());
}
