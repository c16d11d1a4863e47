use crate::cli::commands::{load_report, period_title, print_json};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::ms2readable;
use crate::utils::table::{Column, Table};
use serde_json::json;

/// Handle the `details` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Details { date } = &cli.command {
        let report = load_report(cli, cfg, date, false)?;

        if cli.json {
            return print_json(&json!({
                "tasks": report.task_details,
                "interruptions": report.interruption_details,
            }));
        }

        header(format!("Details {}", period_title(&report)));

        if report.task_details.is_empty() {
            info("No finished tasks.");
        } else {
            let mut table = Table::new(vec![
                Column::new("TASK", 30),
                Column::new("TIME", 9),
                Column::new("SESSIONS", 8),
            ]);
            for row in &report.task_details {
                table.add_row(vec![
                    row.name.clone(),
                    ms2readable(row.total_duration_ms, false),
                    row.event_count.to_string(),
                ]);
            }
            print!("{}", table.render());
        }

        println!();

        if report.interruption_details.is_empty() {
            info("No interruptions.");
        } else {
            let mut table = Table::new(vec![
                Column::new("WHO", 30),
                Column::new("COUNT", 8),
                Column::new("TIME", 9),
            ]);
            for row in &report.interruption_details {
                table.add_row(vec![
                    row.who.clone(),
                    row.count.to_string(),
                    ms2readable(row.total_duration_ms, false),
                ]);
            }
            print!("{}", table.render());
        }
    }
    Ok(())
}
