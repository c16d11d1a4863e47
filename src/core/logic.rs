use crate::core::calculator::planning::{PlanningRequest, PlanningThresholds};
use crate::core::calculator::{
    collector, details, interruptions, planning, segmentation, summary, timeline,
};
use crate::models::activity_log::ActivityLog;
use crate::models::ledger::TaskLedger;
use crate::models::range::DateRange;
use crate::models::report::Report;
use chrono::TimeZone;

pub struct Core;

impl Core {
    /// Build every read-model of `range`, compared against the period of
    /// the same length right before it.
    pub fn build_report<Tz: TimeZone>(
        log: &ActivityLog,
        range: &DateRange,
        now: i64,
        thresholds: PlanningThresholds,
        tz: &Tz,
    ) -> Report {
        let index = segmentation::build_index(&log.events, now, tz);
        let previous_range = range.previous(tz);

        let current = collector::collect(&index, range);
        let previous = collector::collect(&index, &previous_range);

        let summary = summary::compute_summary_metrics(&current, &previous, now);
        let ledger = TaskLedger::from_records(&log.ledger);

        let timeline = range
            .is_single_day()
            .then(|| timeline::build_timeline(&current, &log.categories));

        let insights = planning::build_planning_insights(&current, &log.tasks, now);
        let planning = planning::compute_planning_aggregates(
            &PlanningRequest {
                insights: &insights,
                summary_items: &summary.items,
                selected_day: range.end_key,
                thresholds,
            },
            tz,
        );

        Report {
            interruptions: interruptions::compute_interruption_stats(&current, now, tz),
            task_details: details::build_daily_task_details(&current, &ledger),
            interruption_details: details::build_daily_interruption_details(&current),
            range: range.clone(),
            previous_range,
            summary,
            timeline,
            planning,
        }
    }
}
