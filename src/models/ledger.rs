use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifecycleAction {
    Created,
    Completed,
    Cancelled,
}

/// Snapshot of a task's name and category taken when it was created,
/// completed or cancelled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskLifecycleRecord {
    pub task_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    pub action: LifecycleAction,
    pub at: i64,
}

/// Latest lifecycle record per task id.
#[derive(Debug, Clone, Default)]
pub struct TaskLedger {
    latest: HashMap<String, TaskLifecycleRecord>,
}

impl TaskLedger {
    /// Later `at` wins; on equal `at` the record appended last wins.
    pub fn from_records(records: &[TaskLifecycleRecord]) -> Self {
        let latest = records.iter().fold(
            HashMap::<String, TaskLifecycleRecord>::new(),
            |mut acc, rec| {
                let replace = acc.get(&rec.task_id).is_none_or(|cur| rec.at >= cur.at);
                if replace {
                    acc.insert(rec.task_id.clone(), rec.clone());
                }
                acc
            },
        );
        Self { latest }
    }

    pub fn get(&self, task_id: &str) -> Option<&TaskLifecycleRecord> {
        self.latest.get(task_id)
    }

    /// Non-blank recorded name of `task_id`.
    pub fn name_of(&self, task_id: &str) -> Option<&str> {
        self.get(task_id)
            .map(|r| r.name.trim())
            .filter(|n| !n.is_empty())
    }
}
