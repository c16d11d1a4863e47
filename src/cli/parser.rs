use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimereport
/// Reports over a personal activity log (tasks, interruptions, breaks)
#[derive(Parser)]
#[command(
    name = "rtimereport",
    version = env!("CARGO_PKG_VERSION"),
    about = "Daily and weekly reports over an activity log of tasks, interruptions and breaks",
    long_about = None
)]
pub struct Cli {
    /// Override the activity log path (JSON)
    #[arg(global = true, long = "file", value_name = "FILE")]
    pub file: Option<String>,

    /// Use this configuration file instead of the default one
    #[arg(global = true, long = "conf", value_name = "FILE")]
    pub conf: Option<String>,

    /// Print the report as JSON instead of tables
    #[arg(global = true, long = "json")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Totals per type with deltas against the previous period
    Summary {
        /// Day to report (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<String>,

        /// Report the whole week containing the day
        #[arg(long)]
        week: bool,
    },

    /// Interruption totals, peak hour and top contributors
    Interruptions {
        /// Day to report (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<String>,

        /// Report the whole week containing the day
        #[arg(long)]
        week: bool,
    },

    /// Time per task and interruptions per contributor for one day
    Details {
        /// Day to report (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Chronological segments of one day
    Timeline {
        /// Day to report (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Planned vs. actual time of the planned tasks
    Planning {
        /// Selected day (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Show the effective configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },
}
