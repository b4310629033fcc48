use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for agrimpact
#[derive(Parser)]
#[command(
    name = "agrimpact",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record agricultural-outreach events, register attendees and report attendance using SQLite",
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

    /// Record or list outreach events
    Event {
        #[command(subcommand)]
        action: EventAction,
    },

    /// Register or list attendees
    Attendee {
        #[command(subcommand)]
        action: AttendeeAction,
    },

    /// Show attendance totals and breakdowns by event, gender and province
    Report,

    /// Export attendance records
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file (defaults to `export_file` from the configuration)
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Overwrite an existing file without asking
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}

#[derive(Subcommand)]
pub enum EventAction {
    /// Add a new event
    Add {
        #[arg(long)]
        title: String,

        /// Event date (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<String>,

        #[arg(long, default_value = "")]
        location: String,

        #[arg(long, default_value = "")]
        topic: String,
    },

    /// List all events
    List,
}

#[derive(Subcommand)]
pub enum AttendeeAction {
    /// Register an attendee against an event
    Add {
        /// Event id (see `event list`)
        #[arg(long)]
        event: i64,

        #[arg(long)]
        name: String,

        /// One of the configured labels (default: Male, Female, Other, Prefer not to say)
        #[arg(long)]
        gender: String,

        #[arg(long, default_value = "")]
        province: String,
    },

    /// List attendees, optionally for one event
    List {
        #[arg(long)]
        event: Option<i64>,
    },
}
