use super::category::Category;
use super::event::Event;
use super::ledger::TaskLifecycleRecord;
use super::planning::PlannedTask;
use serde::{Deserialize, Serialize};

/// Everything the reports read: the event log plus the task and category
/// entities it refers to.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityLog {
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub ledger: Vec<TaskLifecycleRecord>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub tasks: Vec<PlannedTask>,
}
