use chrono::Weekday;
use rtimereport::config::Config;
use rtimereport::core::calculator::planning::PlanningThresholds;

mod common;
use common::temp_path;

#[test]
fn test_defaults_when_file_missing() {
    let path = temp_path("config_missing", "conf");
    let cfg = Config::load_from(std::path::Path::new(&path)).unwrap();

    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.week_start().unwrap(), Weekday::Mon);
    assert_eq!(cfg.planning_thresholds(), PlanningThresholds::default());
    assert!(cfg.events_file.ends_with("activity.json"));
}

#[test]
fn test_partial_yaml_keeps_defaults() {
    let cfg = Config::from_yaml(
        "week_start: sunday\nvariance_alert_threshold_minutes: 20\nlog_level: debug\n",
    )
    .unwrap();

    assert_eq!(cfg.week_start().unwrap(), Weekday::Sun);
    assert_eq!(cfg.log_level, "debug");

    let th = cfg.planning_thresholds();
    assert_eq!(th.variance_alert_threshold_minutes, 20.0);
    assert_eq!(th.on_track_variance_threshold_minutes, 10.0);
    assert_eq!(th.upcoming_window_minutes, 1440.0);
}

#[test]
fn test_invalid_values_are_rejected() {
    assert!(Config::from_yaml("week_start: someday\n").is_err());
    assert!(Config::from_yaml("on_track_variance_threshold_minutes: -1\n").is_err());
    assert!(Config::from_yaml("week_start: [1, 2]\n").is_err());
}

#[test]
fn test_non_finite_thresholds_are_rejected() {
    assert!(Config::from_yaml("upcoming_window_minutes: .inf\n").is_err());
    assert!(Config::from_yaml("variance_alert_threshold_minutes: .nan\n").is_err());

    let err = Config::from_yaml("on_track_variance_threshold_minutes: -.inf\n").unwrap_err();
    assert!(err.to_string().contains("on_track_variance_threshold_minutes"));
}

#[test]
fn test_yaml_roundtrip_of_defaults() {
    let cfg = Config::default();
    let yaml = cfg.to_yaml().unwrap();

    assert!(yaml.contains("week_start: monday"));
    assert_eq!(Config::from_yaml(&yaml).unwrap(), cfg);
}
