use crate::cli::commands::{load_report, period_title, print_json};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, warning};
use crate::utils::colors::{colorize, color_for_delta};
use crate::utils::ms2readable;
use crate::utils::table::{Column, Table};

/// Handle the `summary` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { date, week } = &cli.command {
        let report = load_report(cli, cfg, date, *week)?;

        if cli.json {
            return print_json(&report.summary);
        }

        header(format!(
            "Summary {} (vs {} → {})",
            period_title(&report),
            report.previous_range.start_key,
            report.previous_range.end_key
        ));

        let mut table = Table::new(vec![
            Column::new("TYPE", 11),
            Column::new("TIME", 9),
            Column::new("COUNT", 6),
            Column::new("Δ TIME", 10),
            Column::new("Δ COUNT", 7),
        ]);

        for item in &report.summary.items {
            table.add_row(vec![
                item.event_type.to_string(),
                ms2readable(item.total_duration_ms, false),
                item.total_count.to_string(),
                colorize(
                    &ms2readable(item.delta_duration_ms, true),
                    color_for_delta(item.delta_duration_ms),
                ),
                format!("{:+}", item.delta_count),
            ]);
        }

        print!("{}", table.render());

        if report.summary.items.iter().all(|i| i.total_count == 0) {
            warning("No events in this period.");
        }

        println!(
            "\nTotal tracked: {}",
            ms2readable(report.summary.total_duration_ms(), false)
        );
    }
    Ok(())
}
