use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Task,
    Interrupt,
    Break,
}

impl EventType {
    /// Fixed reporting order: task, interrupt, break.
    pub const ALL: [EventType; 3] = [EventType::Task, EventType::Interrupt, EventType::Break];

    pub fn et_as_str(&self) -> &'static str {
        match self {
            EventType::Task => "task",
            EventType::Interrupt => "interrupt",
            EventType::Break => "break",
        }
    }

    /// Label shown when an event carries no label of its own.
    pub fn default_label(&self) -> &'static str {
        match self {
            EventType::Task => "Task",
            EventType::Interrupt => "Interruption",
            EventType::Break => "Break",
        }
    }

    pub fn is_task(&self) -> bool {
        matches!(self, EventType::Task)
    }

    pub fn is_interrupt(&self) -> bool {
        matches!(self, EventType::Interrupt)
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.et_as_str())
    }
}
