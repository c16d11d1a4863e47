// src/store/json.rs

use crate::errors::{AppError, AppResult};
use crate::models::activity_log::ActivityLog;
use std::fs;
use std::path::Path;

/// Read the activity log document at `path`.
pub fn load_activity_log(path: &Path) -> AppResult<ActivityLog> {
    if !path.exists() {
        return Err(AppError::LogNotFound(path.display().to_string()));
    }

    let content = fs::read_to_string(path)?;
    let log = parse_activity_log(&content)?;

    tracing::info!(
        path = %path.display(),
        events = log.events.len(),
        tasks = log.tasks.len(),
        "activity log loaded"
    );

    Ok(log)
}

/// Parse an activity log from JSON text.
///
/// A bare JSON array is accepted as a log holding only events.
pub fn parse_activity_log(content: &str) -> AppResult<ActivityLog> {
    let trimmed = content.trim_start();
    if trimmed.starts_with('[') {
        let events = serde_json::from_str(trimmed)?;
        return Ok(ActivityLog {
            events,
            ..ActivityLog::default()
        });
    }

    let log: ActivityLog = serde_json::from_str(content)?;

    let running = log.events.iter().filter(|e| e.is_running()).count();
    if running > 1 {
        tracing::warn!(running, "more than one running event in the log");
    }

    Ok(log)
}
