pub mod config;
pub mod details;
pub mod interruptions;
pub mod planning;
pub mod summary;
pub mod timeline;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::models::day_key::DayKey;
use crate::models::range::DateRange;
use crate::models::report::Report;
use crate::store::load_activity_log;
use crate::utils::date;
use chrono::Local;
use serde::Serialize;
use std::path::PathBuf;

/// Day given with `--date`, today otherwise.
pub(crate) fn resolve_day(date_arg: &Option<String>) -> AppResult<DayKey> {
    match date_arg {
        Some(d) => date::parse_date(d)
            .map(DayKey::new)
            .ok_or_else(|| AppError::InvalidDate(d.clone())),
        None => Ok(DayKey::new(date::today())),
    }
}

/// Load the activity log and build the report of the requested period.
pub(crate) fn load_report(
    cli: &Cli,
    cfg: &Config,
    date_arg: &Option<String>,
    week: bool,
) -> AppResult<Report> {
    let day = resolve_day(date_arg)?;
    let range = if week {
        DateRange::week_of(day, cfg.week_start()?, &Local)
    } else {
        DateRange::day(day, &Local)
    };

    let path = PathBuf::from(cli.file.as_deref().unwrap_or(&cfg.events_file));
    let log = load_activity_log(&path)?;

    Ok(Core::build_report(
        &log,
        &range,
        date::now_ms(),
        cfg.planning_thresholds(),
        &Local,
    ))
}

pub(crate) fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(crate) fn period_title(report: &Report) -> String {
    if report.range.is_single_day() {
        report.range.start_key.to_string()
    } else {
        format!("{} → {}", report.range.start_key, report.range.end_key)
    }
}
