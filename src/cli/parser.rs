use crate::core::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimetracker
#[derive(Parser)]
#[command(
    name = "rtimetracker",
    version = env!("CARGO_PKG_VERSION"),
    about = "Clock in and out, take breaks, time your tasks and track billable hours",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the current time: HH:MM, HH:MM:SS or "YYYY-MM-DD HH:MM[:SS]"
    #[arg(global = true, long = "at", value_name = "WHEN")]
    pub at: Option<String>,

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
        #[arg(long = "print", help = "Print the current configuration")]
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

    /// Clock in or out for today
    Clock {
        #[command(subcommand)]
        action: ClockAction,
    },

    /// Start or end a break
    Break {
        #[command(subcommand)]
        action: BreakAction,
    },

    /// Start or stop the task timer
    Timer {
        #[command(subcommand)]
        action: TimerAction,
    },

    /// Add a time entry manually
    Add {
        #[arg(long = "task", help = "Task description")]
        task: String,

        #[arg(long = "start", help = "Start time (HH:MM)")]
        start: String,

        #[arg(long = "end", help = "End time (HH:MM)")]
        end: String,

        #[arg(long = "date", help = "Date of the entry (YYYY-MM-DD, default today)")]
        date: Option<String>,

        #[arg(long = "project", help = "Project id (default from config)")]
        project: Option<String>,

        #[arg(long = "billable", help = "Mark the entry as billable")]
        billable: bool,

        #[arg(
            long = "non-billable",
            conflicts_with = "billable",
            help = "Mark the entry as not billable"
        )]
        non_billable: bool,
    },

    /// Delete a time entry by ID
    Del {
        id: i64,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List time entries
    List {
        #[arg(long = "date", help = "Show entries of this date (YYYY-MM-DD, default today)")]
        date: Option<String>,

        #[arg(long = "all", conflicts_with = "date", help = "Show all entries")]
        all: bool,
    },

    /// Show attendance status, running timer and today's totals
    Status,

    /// List the known projects
    Projects,

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Export time entries
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long = "date", help = "Export only this date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}

#[derive(Subcommand, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClockAction {
    /// Start the working day
    In,
    /// End the working day (stops a running task timer)
    Out,
}

#[derive(Subcommand, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BreakAction {
    /// Start a break (stops a running task timer)
    Start,
    /// End the current break
    End,
}

#[derive(Subcommand, Clone, Debug, PartialEq, Eq)]
pub enum TimerAction {
    /// Start timing a task (requires being clocked in and not on break)
    Start {
        #[arg(long = "task", help = "Task description")]
        task: String,

        #[arg(long = "project", help = "Project id (default from config)")]
        project: Option<String>,

        #[arg(long = "billable", help = "Mark the time as billable")]
        billable: bool,

        #[arg(
            long = "non-billable",
            conflicts_with = "billable",
            help = "Mark the time as not billable"
        )]
        non_billable: bool,
    },
    /// Stop the running timer and save the entry
    Stop,
}

/// `--billable` / `--non-billable` as an explicit choice, `None` when neither is given.
pub fn billable_choice(billable: bool, non_billable: bool) -> Option<bool> {
    if billable {
        Some(true)
    } else if non_billable {
        Some(false)
    } else {
        None
    }
}
