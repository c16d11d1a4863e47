use crate::cli::commands::{load_report, period_title, print_json};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::ms2readable;
use crate::utils::table::{Column, Table};

/// Handle the `interruptions` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Interruptions { date, week } = &cli.command {
        let report = load_report(cli, cfg, date, *week)?;
        let stats = &report.interruptions;

        if cli.json {
            return print_json(stats);
        }

        header(format!("Interruptions {}", period_title(&report)));

        if stats.total_count == 0 {
            info("No interruptions in this period.");
            return Ok(());
        }

        println!(
            "Count: {} | Time: {} | Peak hour: {}",
            stats.total_count,
            ms2readable(stats.total_duration_ms, false),
            stats.peak_hour_label.as_deref().unwrap_or("--")
        );

        println!("\nTop contributors:");
        let mut table = Table::new(vec![
            Column::new("WHO", 20),
            Column::new("COUNT", 6),
            Column::new("TIME", 9),
            Column::new("TOP TYPE", 20),
        ]);
        for c in &stats.top_contributors {
            table.add_row(vec![
                c.label.clone(),
                c.count.to_string(),
                ms2readable(c.total_duration_ms, false),
                c.top_types
                    .first()
                    .map(|t| t.label.clone())
                    .unwrap_or_default(),
            ]);
        }
        print!("{}", table.render());

        println!("\nTop types:");
        let mut types = Table::new(vec![
            Column::new("TYPE", 20),
            Column::new("COUNT", 6),
            Column::new("TIME", 9),
        ]);
        for t in &stats.top_types {
            types.add_row(vec![
                t.label.clone(),
                t.count.to_string(),
                ms2readable(t.total_duration_ms, false),
            ]);
        }
        print!("{}", types.render());
    }
    Ok(())
}
