use crate::cli::commands::{load_report, period_title, print_json};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::formatting::{bold, clock_time};
use crate::utils::table::{Column, Table};
use crate::utils::time::{format_minutes, ms_to_whole_minutes};

/// Handle the `timeline` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Timeline { date } = &cli.command {
        let report = load_report(cli, cfg, date, false)?;
        let timeline = report.timeline.clone().unwrap_or_default();

        if cli.json {
            return print_json(&timeline);
        }

        header(format!("Timeline {}", period_title(&report)));

        if timeline.segments.is_empty() {
            info("No finished events on this day.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("START", 6),
            Column::new("END", 6),
            Column::new("TYPE", 10),
            Column::new("DURATION", 8),
            Column::new("LABEL", 30),
        ]);
        for seg in &timeline.segments {
            table.add_row(vec![
                clock_time(seg.start),
                clock_time(seg.end),
                seg.event_type.to_string(),
                format_minutes(ms_to_whole_minutes(seg.duration_ms)),
                seg.label.clone(),
            ]);
        }
        print!("{}", table.render());

        let s = &timeline.summary;
        println!(
            "\nFocus: {} | Interruptions: {} | Breaks: {}",
            format_minutes(s.total_focus_minutes.round() as i64),
            format_minutes(s.total_interrupt_minutes.round() as i64),
            format_minutes(s.total_break_minutes.round() as i64),
        );
        if let Some(longest) = &s.longest_focus {
            println!(
                "Longest focus: {} ({})",
                bold(&longest.label),
                format_minutes(ms_to_whole_minutes(longest.duration_ms))
            );
        }
    }
    Ok(())
}
