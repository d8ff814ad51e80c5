use crate::export::ExportFormat;
use crate::models::SortOrder;
use clap::{Parser, Subcommand};

/// Command-line interface definition for babybirthdays
/// CLI application to keep babies' birthdays in SQLite
#[derive(Parser)]
#[command(
    name = "babybirthdays",
    version = env!("CARGO_PKG_VERSION"),
    about = "Keep track of birthdays and see how old everyone is, in days, weeks, months or years",
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

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Bring the schema to the current version")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add a birthday
    Add {
        /// Name of the person
        name: String,

        /// Birth date (YYYY-MM-DD)
        date: String,
    },

    /// Change the name and/or birth date of a birthday
    Edit {
        /// Birthday id (see `list`)
        id: i64,

        #[arg(long = "name", help = "New name")]
        name: Option<String>,

        #[arg(long = "date", help = "New birth date (YYYY-MM-DD)")]
        date: Option<String>,
    },

    /// Delete a birthday by ID
    Del {
        /// Birthday id (see `list`)
        id: i64,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List birthdays with their age
    List {
        #[arg(long, value_enum, help = "Sort order (default from config)")]
        sort: Option<SortOrder>,

        #[arg(
            long = "today",
            value_name = "DATE",
            help = "Compute ages as of this date (YYYY-MM-DD) instead of now"
        )]
        today: Option<String>,
    },

    /// Show a single birthday
    Show {
        /// Birthday id (see `list`)
        id: i64,

        #[arg(long = "today", value_name = "DATE", help = "Reference date (YYYY-MM-DD)")]
        today: Option<String>,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export birthdays with their age
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, value_enum, help = "Sort order (default from config)")]
        sort: Option<SortOrder>,

        #[arg(long = "today", value_name = "DATE", help = "Reference date (YYYY-MM-DD)")]
        today: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
