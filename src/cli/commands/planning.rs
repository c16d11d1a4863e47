use crate::cli::commands::{load_report, period_title, print_json};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::planning::PlanningInsight;
use crate::ui::messages::{header, info};
use crate::utils::formatting::percent;
use crate::utils::mins2readable;

fn print_bucket(title: &str, items: &[PlanningInsight]) {
    if items.is_empty() {
        return;
    }
    println!("\n{} ({}):", title, items.len());
    for i in items {
        let variance = i
            .variance_minutes
            .map(|v| mins2readable(v.round() as i64, true, false))
            .unwrap_or_else(|| "--".to_string());
        println!("  - {} [{}]", i.name, variance);
    }
}

/// Handle the `planning` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Planning { date } = &cli.command {
        let report = load_report(cli, cfg, date, false)?;

        if cli.json {
            return print_json(&report.planning);
        }

        header(format!("Planning {}", period_title(&report)));

        let Some(agg) = &report.planning else {
            info("No planned tasks.");
            return Ok(());
        };

        println!(
            "Actual: {} | Planned: {} | Coverage: {} | Focus rate: {}",
            mins2readable(agg.total_actual_minutes.round() as i64, false, false),
            mins2readable(agg.total_planned_minutes.round() as i64, false, false),
            percent(agg.planning_coverage),
            percent(agg.focus_rate),
        );
        if let Some(avg) = agg.average_variance_minutes {
            println!("Average variance: {:.1} min", avg);
        }

        print_bucket("Behind schedule", &agg.behind_schedule);
        print_bucket("Ahead of schedule", &agg.ahead_of_schedule);
        print_bucket("On track", &agg.on_track);
        print_bucket("Overdue", &agg.overdue);
        print_bucket("Upcoming", &agg.upcoming);
    }
    Ok(())
}
