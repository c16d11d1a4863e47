use crate::core::calculator::planning::PlanningThresholds;
use crate::errors::{AppError, AppResult};
use crate::utils::date::parse_week_start;
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_events_file")]
    pub events_file: String,
    #[serde(default = "default_week_start")]
    pub week_start: String,
    #[serde(default = "default_variance_alert")]
    pub variance_alert_threshold_minutes: f64,
    #[serde(default = "default_on_track")]
    pub on_track_variance_threshold_minutes: f64,
    #[serde(default = "default_upcoming_window")]
    pub upcoming_window_minutes: f64,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_events_file() -> String {
    Config::events_file_path().to_string_lossy().to_string()
}
fn default_week_start() -> String {
    "monday".to_string()
}
fn default_variance_alert() -> f64 {
    15.0
}
fn default_on_track() -> f64 {
    10.0
}
fn default_upcoming_window() -> f64 {
    24.0 * 60.0
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            events_file: default_events_file(),
            week_start: default_week_start(),
            variance_alert_threshold_minutes: default_variance_alert(),
            on_track_variance_threshold_minutes: default_on_track(),
            upcoming_window_minutes: default_upcoming_window(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rtimereport")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimereport.conf")
    }

    /// Return the default path of the activity log
    pub fn events_file_path() -> PathBuf {
        Self::config_dir().join("activity.json")
    }

    /// Load configuration from the standard file, or defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        let cfg: Config = serde_yaml::from_str(content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    fn validate(&self) -> AppResult<()> {
        self.week_start()?;
        let thresholds = [
            ("variance_alert_threshold_minutes", self.variance_alert_threshold_minutes),
            ("on_track_variance_threshold_minutes", self.on_track_variance_threshold_minutes),
            ("upcoming_window_minutes", self.upcoming_window_minutes),
        ];
        for (name, value) in thresholds {
            if !value.is_finite() || value < 0.0 {
                return Err(AppError::Config(format!(
                    "{name} must be a finite, non-negative number of minutes (got {value})"
                )));
            }
        }
        Ok(())
    }

    pub fn week_start(&self) -> AppResult<Weekday> {
        parse_week_start(&self.week_start)
    }

    pub fn planning_thresholds(&self) -> PlanningThresholds {
        PlanningThresholds {
            variance_alert_threshold_minutes: self.variance_alert_threshold_minutes,
            on_track_variance_threshold_minutes: self.on_track_variance_threshold_minutes,
            upcoming_window_minutes: self.upcoming_window_minutes,
        }
    }
}
