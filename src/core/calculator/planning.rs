//! Planned vs. actual reconciliation of tasks.

use crate::core::calculator::summary::SummaryItem;
use crate::models::day_key::DayKey;
use crate::models::event::Event;
use crate::models::planning::{PlannedTask, PlanningInsight};
use crate::utils::time::{MS_PER_MINUTE, ms_to_minutes};
use chrono::TimeZone;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanningThresholds {
    pub variance_alert_threshold_minutes: f64,
    pub on_track_variance_threshold_minutes: f64,
    pub upcoming_window_minutes: f64,
}

impl Default for PlanningThresholds {
    fn default() -> Self {
        Self {
            variance_alert_threshold_minutes: 15.0,
            on_track_variance_threshold_minutes: 10.0,
            upcoming_window_minutes: 24.0 * 60.0,
        }
    }
}

pub struct PlanningRequest<'a> {
    pub insights: &'a [PlanningInsight],
    pub summary_items: &'a [SummaryItem],
    pub selected_day: DayKey,
    pub thresholds: PlanningThresholds,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanningAggregates {
    pub total_actual_minutes: f64,
    pub total_planned_minutes: f64,
    pub planning_coverage: f64,
    pub focus_rate: f64,
    pub average_variance_minutes: Option<f64>,
    pub behind_schedule: Vec<PlanningInsight>,
    pub ahead_of_schedule: Vec<PlanningInsight>,
    pub on_track: Vec<PlanningInsight>,
    pub overdue: Vec<PlanningInsight>,
    pub upcoming: Vec<PlanningInsight>,
}

/// Actual minutes spent on each planned task, in the given task order.
///
/// Task events link through `myTaskId`; a running event counts up to `now`.
pub fn build_planning_insights(events: &[Event], tasks: &[PlannedTask], now: i64) -> Vec<PlanningInsight> {
    tasks
        .iter()
        .map(|task| {
            let actual_ms: i64 = events
                .iter()
                .filter(|e| e.my_task_id() == Some(task.id.as_str()))
                .map(|e| e.duration_ms(now))
                .sum();
            let actual_minutes = ms_to_minutes(actual_ms);

            PlanningInsight {
                task_id: task.id.clone(),
                name: task.name.clone(),
                planned_minutes: task.planned_minutes,
                actual_minutes,
                variance_minutes: task.planned_minutes.map(|p| actual_minutes - p),
                due_at: task.due_at,
            }
        })
        .collect()
}

fn by_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

fn select<F, K>(insights: &[PlanningInsight], keep: F, mut sort_key: K) -> Vec<PlanningInsight>
where
    F: Fn(&PlanningInsight) -> bool,
    K: FnMut(&PlanningInsight, &PlanningInsight) -> Ordering,
{
    let mut out: Vec<PlanningInsight> = insights.iter().filter(|i| keep(i)).cloned().collect();
    out.sort_by(|a, b| sort_key(a, b));
    out
}

/// Totals, rates and schedule buckets over `insights`.
///
/// `None` when there are no insights. An insight can land in more than
/// one bucket.
pub fn compute_planning_aggregates<Tz: TimeZone>(req: &PlanningRequest<'_>, tz: &Tz) -> Option<PlanningAggregates> {
    let insights = req.insights;
    if insights.is_empty() {
        return None;
    }

    let th = req.thresholds;
    let total_actual_minutes: f64 = insights.iter().map(|i| i.actual_minutes).sum();
    let total_planned_minutes: f64 = insights.iter().filter_map(|i| i.planned_minutes).sum();
    let planned = insights.iter().filter(|i| i.planned_minutes.is_some()).count();
    let planning_coverage = planned as f64 / insights.len() as f64;

    let total_ms: i64 = req.summary_items.iter().map(|s| s.total_duration_ms).sum();
    let focus_ms: i64 = req
        .summary_items
        .iter()
        .filter(|s| s.event_type.is_task())
        .map(|s| s.total_duration_ms)
        .sum();
    let focus_rate = if total_ms == 0 {
        0.0
    } else {
        focus_ms as f64 / total_ms as f64
    };

    let variances: Vec<f64> = insights.iter().filter_map(|i| i.variance_minutes).collect();
    let average_variance_minutes = if variances.is_empty() {
        None
    } else {
        Some(variances.iter().map(|v| v.abs()).sum::<f64>() / variances.len() as f64)
    };

    let day_end = req.selected_day.end_ms(tz);
    // float-to-int casts saturate (NaN -> 0); the add must too
    let window_ms = (th.upcoming_window_minutes * MS_PER_MINUTE as f64) as i64;
    let upcoming_end = day_end.saturating_add(window_ms.max(0));
    let variance = |i: &PlanningInsight| i.variance_minutes.unwrap_or(0.0);
    let due = |i: &PlanningInsight| i.due_at.unwrap_or(i64::MAX);

    let behind_schedule = select(
        insights,
        |i| i.variance_minutes.is_some_and(|v| v >= th.variance_alert_threshold_minutes),
        |a, b| by_f64(variance(b), variance(a)),
    );

    let ahead_of_schedule = select(
        insights,
        |i| i.variance_minutes.is_some_and(|v| v <= -th.variance_alert_threshold_minutes),
        |a, b| by_f64(variance(a), variance(b)),
    );

    let on_track = select(
        insights,
        |i| i.variance_minutes.is_some_and(|v| v.abs() <= th.on_track_variance_threshold_minutes),
        |a, b| by_f64(variance(a).abs(), variance(b).abs()),
    );

    // actual + 1 < planned: one minute of slack before a task counts as short
    let overdue = select(
        insights,
        |i| match (i.due_at, i.planned_minutes) {
            (Some(due_at), Some(planned)) => {
                due_at < day_end
                    && (i.actual_minutes + 1.0 < planned || i.variance_minutes.is_some_and(|v| v > 0.0))
            }
            _ => false,
        },
        |a, b| due(a).cmp(&due(b)),
    );

    let upcoming = select(
        insights,
        |i| i.due_at.is_some_and(|d| d >= day_end && d <= upcoming_end),
        |a, b| due(a).cmp(&due(b)),
    );

    tracing::debug!(
        insights = insights.len(),
        behind = behind_schedule.len(),
        ahead = ahead_of_schedule.len(),
        on_track = on_track.len(),
        overdue = overdue.len(),
        upcoming = upcoming.len(),
        day = %req.selected_day,
        "planning aggregates computed"
    );

    Some(PlanningAggregates {
        total_actual_minutes,
        total_planned_minutes,
        planning_coverage,
        focus_rate,
        average_variance_minutes,
        behind_schedule,
        ahead_of_schedule,
        on_track,
        overdue,
        upcoming,
    })
}
