use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rWorklog
/// CLI application to clock working hours and estimate earnings with SQLite
#[derive(Parser)]
#[command(
    name = "rworklog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A time clock CLI: punch in/out, track breaks and estimate earnings using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Clock in (start or resume the working day)
    In {
        #[arg(long = "date", help = "Day of the punch (YYYY-MM-DD, default today)")]
        date: Option<String>,

        #[arg(long = "at", help = "Time of the punch (HH:MM, default now)")]
        at: Option<String>,
    },

    /// Start a break
    Break {
        #[arg(long = "date", help = "Day of the punch (YYYY-MM-DD, default today)")]
        date: Option<String>,

        #[arg(long = "at", help = "Time of the punch (HH:MM, default now)")]
        at: Option<String>,
    },

    /// End the current break
    Resume {
        #[arg(long = "date", help = "Day of the punch (YYYY-MM-DD, default today)")]
        date: Option<String>,

        #[arg(long = "at", help = "Time of the punch (HH:MM, default now)")]
        at: Option<String>,
    },

    /// Clock out
    Out {
        #[arg(long = "date", help = "Day of the punch (YYYY-MM-DD, default today)")]
        date: Option<String>,

        #[arg(long = "at", help = "Time of the punch (HH:MM, default now)")]
        at: Option<String>,
    },

    /// Show today's record, projected to now
    Status,

    /// Refresh today's worked time and earnings until the session stops
    Watch {
        #[arg(long, short, help = "Seconds between refreshes (default from config)")]
        interval: Option<u64>,

        #[arg(long, help = "Stop after this many refreshes")]
        ticks: Option<usize>,
    },

    /// List work records
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,
    },

    /// Correct a stored record
    Edit {
        /// Record date (YYYY-MM-DD) or id
        target: String,

        #[arg(long = "in", help = "Clock-in time (HH:MM)")]
        clock_in: Option<String>,

        #[arg(long = "out", help = "Clock-out time (HH:MM)")]
        clock_out: Option<String>,

        #[arg(long = "break-start", help = "Break start time (HH:MM)")]
        break_start: Option<String>,

        #[arg(long = "break-end", help = "Break end time (HH:MM)")]
        break_end: Option<String>,

        #[arg(long = "break-minutes", help = "Total break minutes")]
        break_minutes: Option<i64>,

        #[arg(
            long = "status",
            help = "Status: not_started, working, on_break, finished"
        )]
        status: Option<String>,

        #[arg(long = "clear-out", help = "Remove the clock-out time")]
        clear_out: bool,

        #[arg(long = "clear-break", help = "Remove break times and total")]
        clear_break: bool,
    },

    /// Delete a work record by date or id
    Del {
        /// Record date (YYYY-MM-DD) or id
        target: String,

        #[arg(long, short = 'f', help = "Do not ask for confirmation")]
        force: bool,
    },

    /// Monthly statistics
    Stats {
        #[arg(long, help = "Month to summarize (YYYY-MM, default current)")]
        month: Option<String>,
    },

    /// Show or change pay rates and daily target
    Settings {
        #[arg(long = "print", help = "Print the current settings")]
        print: bool,

        #[arg(long = "hourly-rate", help = "Regular hourly rate")]
        hourly_rate: Option<f64>,

        #[arg(long = "overtime-rate", help = "Overtime hourly rate (0 = 1.25 x regular)")]
        overtime_rate: Option<f64>,

        #[arg(long = "target-minutes", help = "Regular minutes per day")]
        target_minutes: Option<i64>,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Create a JSON snapshot of records and settings
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Load a snapshot created by `backup`
    Restore {
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Export work records
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
