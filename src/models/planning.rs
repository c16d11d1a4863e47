use serde::{Deserialize, Serialize};

/// A task entity with its plan, as kept by the task list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedTask {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planned_minutes: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_at: Option<i64>,
}

/// Planned vs. actual time of one task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanningInsight {
    pub task_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planned_minutes: Option<f64>,
    pub actual_minutes: f64,
    /// actual - planned; positive means over budget.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variance_minutes: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_at: Option<i64>,
}
