use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for eventbuddy
#[derive(Parser)]
#[command(
    name = "eventbuddy",
    version = env!("CARGO_PKG_VERSION"),
    about = "Event buddy: browse events, sign in and book seats from the terminal",
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

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Report keys missing from the configuration file")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            requires = "edit_config",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal operation log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Browse upcoming and previous events
    List {
        /// Case-insensitive match on title, location or description
        #[arg(long, short)]
        search: Option<String>,

        /// Page of upcoming events (1-based)
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Page of previous events (1-based)
        #[arg(long = "past-page", default_value_t = 1)]
        past_page: usize,
    },

    /// Show the details of one event
    Show {
        /// Event id
        id: i64,
    },

    /// Sign in. Any email/password pair is accepted
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Sign out and clear the session
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Book an event for the signed-in user
    Book {
        /// Event id
        id: i64,

        /// Number of seats (1 to 4)
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=4))]
        seats: u8,
    },

    /// List the signed-in user's bookings
    Dashboard,

    /// Manage events (admin only)
    Admin {
        #[command(subcommand)]
        action: AdminCommands,
    },

    /// Export events or bookings
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Export the signed-in user's bookings instead of events
        #[arg(long)]
        bookings: bool,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum AdminCommands {
    /// List every event with its origin (seed or local)
    List,

    /// Create a new event
    Create(EventForm),

    /// Edit an event; omitted fields keep their current value
    Edit {
        id: i64,

        #[command(flatten)]
        form: EventEditForm,
    },

    /// Delete an event
    Delete {
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Args, Debug, Clone)]
pub struct EventForm {
    #[arg(long)]
    pub title: String,

    /// Date (YYYY-MM-DD)
    #[arg(long)]
    pub date: String,

    /// Free text, e.g. "09:00 AM – 11:00 AM"
    #[arg(long)]
    pub time: String,

    #[arg(long)]
    pub description: String,

    #[arg(long)]
    pub location: String,

    #[arg(long, value_parser = clap::value_parser!(i64).range(1..))]
    pub capacity: i64,

    /// Comma-separated tags
    #[arg(long)]
    pub tags: String,

    /// Image reference (defaults to the configured placeholder)
    #[arg(long)]
    pub image: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct EventEditForm {
    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub date: Option<String>,

    #[arg(long)]
    pub time: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub location: Option<String>,

    #[arg(long, value_parser = clap::value_parser!(i64).range(1..))]
    pub capacity: Option<i64>,

    #[arg(long)]
    pub tags: Option<String>,

    #[arg(long)]
    pub image: Option<String>,
}
