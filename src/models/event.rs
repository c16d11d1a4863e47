use super::event_type::EventType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
}

/// Variant-specific payload of an [`Event`], tagged by `type` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EventKind {
    #[serde(rename_all = "camelCase")]
    Task {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        my_task_id: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        category_id: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Interrupt {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        who: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        interrupt_type: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        urgency: Option<Urgency>,
    },
    #[serde(rename_all = "camelCase")]
    Break {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        break_type: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        break_duration_minutes: Option<u32>,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventMeta {
    /// Task entity a task event is linked to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub my_task_id: Option<String>,
    /// Set only on day fragments: id of the event the fragment was cut from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub split_ref_id: Option<String>,
}

impl EventMeta {
    pub fn is_empty(&self) -> bool {
        self.my_task_id.is_none() && self.split_ref_id.is_none()
    }
}

/// One entry of the activity log. Timestamps are epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    #[serde(flatten)]
    pub kind: EventKind,
    pub start: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<i64>, // None ⇔ still running
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    #[serde(default, skip_serializing_if = "EventMeta::is_empty")]
    pub meta: EventMeta,
}

impl Event {
    pub fn new(id: impl Into<String>, kind: EventKind, start: i64, end: Option<i64>) -> Self {
        Self {
            id: id.into(),
            kind,
            start,
            end,
            label: None,
            memo: None,
            meta: EventMeta::default(),
        }
    }

    pub fn task(id: impl Into<String>, start: i64, end: Option<i64>) -> Self {
        Self::new(
            id,
            EventKind::Task {
                my_task_id: None,
                category_id: None,
            },
            start,
            end,
        )
    }

    pub fn interrupt(id: impl Into<String>, who: Option<&str>, start: i64, end: Option<i64>) -> Self {
        Self::new(
            id,
            EventKind::Interrupt {
                who: who.map(str::to_string),
                interrupt_type: None,
                urgency: None,
            },
            start,
            end,
        )
    }

    pub fn pause(id: impl Into<String>, start: i64, end: Option<i64>) -> Self {
        Self::new(
            id,
            EventKind::Break {
                break_type: None,
                break_duration_minutes: None,
            },
            start,
            end,
        )
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    pub fn event_type(&self) -> EventType {
        match self.kind {
            EventKind::Task { .. } => EventType::Task,
            EventKind::Interrupt { .. } => EventType::Interrupt,
            EventKind::Break { .. } => EventType::Break,
        }
    }

    pub fn is_running(&self) -> bool {
        self.end.is_none()
    }

    pub fn is_fragment(&self) -> bool {
        self.meta.split_ref_id.is_some()
    }

    /// Duration with a running event measured up to `now`; never negative.
    pub fn duration_ms(&self, now: i64) -> i64 {
        (self.end.unwrap_or(now) - self.start).max(0)
    }

    /// Duration of a finished event; `None` while it is running.
    pub fn closed_duration_ms(&self) -> Option<i64> {
        self.end.map(|end| (end - self.start).max(0))
    }

    /// Trimmed label, `None` when absent or blank.
    pub fn trimmed_label(&self) -> Option<&str> {
        self.label
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
    }

    /// Linked task id, read from `meta.myTaskId` or a top-level `myTaskId`.
    pub fn my_task_id(&self) -> Option<&str> {
        match &self.kind {
            EventKind::Task { my_task_id, .. } => {
                self.meta.my_task_id.as_deref().or(my_task_id.as_deref())
            }
            _ => None,
        }
    }

    pub fn category_id(&self) -> Option<&str> {
        match &self.kind {
            EventKind::Task { category_id, .. } => category_id.as_deref(),
            _ => None,
        }
    }

    pub fn who(&self) -> Option<&str> {
        match &self.kind {
            EventKind::Interrupt { who, .. } => who.as_deref(),
            _ => None,
        }
    }

    pub fn interrupt_type(&self) -> Option<&str> {
        match &self.kind {
            EventKind::Interrupt { interrupt_type, .. } => interrupt_type.as_deref(),
            _ => None,
        }
    }
}
