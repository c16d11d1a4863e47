use crate::core::calculator::details::{DailyInterruptionDetailRow, DailyTaskDetailRow};
use crate::core::calculator::interruptions::InterruptionStats;
use crate::core::calculator::planning::PlanningAggregates;
use crate::core::calculator::summary::SummaryMetrics;
use crate::core::calculator::timeline::TimelineData;
use crate::models::range::DateRange;
use serde::Serialize;

/// Every read-model of one reporting period.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub range: DateRange,
    pub previous_range: DateRange,
    pub summary: SummaryMetrics,
    pub interruptions: InterruptionStats,
    pub task_details: Vec<DailyTaskDetailRow>,
    pub interruption_details: Vec<DailyInterruptionDetailRow>,
    /// Only for single-day periods.
    pub timeline: Option<TimelineData>,
    pub planning: Option<PlanningAggregates>,
}
