use crate::core::parse::ParseMode;
use crate::core::pivot::DateOrder;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for punchcat
/// CLI application to sort employee punches into meal windows
#[derive(Parser)]
#[command(
    name = "punchcat",
    version = env!("CARGO_PKG_VERSION"),
    about = "Dining punch categorizer: classify punch times into Breakfast/Lunch/Dinner and pivot them per day",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Built-in meal window sets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum WindowPreset {
    /// Dinner 19:00:00-23:30:00, Lunch 12:00:00-15:30:00, Breakfast 05:30:00-09:50:00
    Extended,
    /// Dinner 19:00-23:00, Lunch 12:00-15:00, Breakfast 06:00-09:00
    Narrow,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init {
        /// Meal windows to write into the new configuration
        #[arg(long, value_enum, default_value = "extended")]
        windows: WindowPreset,

        /// Overwrite an existing configuration file
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Manage the configuration file (view, check, migrate or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Categorize a punch file and write the pivoted table
    ///
    /// The input needs the columns EmployeeID, <name column>, Department,
    /// Date (DD-MM-YYYY, day first) and Time (HH:MM:SS).
    ///
    /// Examples:
    ///   punchcat process punches.csv
    ///   punchcat process punches.csv --output out.xlsx --format xlsx
    ///   punchcat process punches.csv --strict --output -
    Process {
        /// Input CSV file (`-` reads stdin)
        input: String,

        /// Output file (`-` writes to stdout). Default: a new uniquely named
        /// file in the configured output directory
        #[arg(long, short = 'o', value_name = "FILE")]
        output: Option<String>,

        /// Output format (default from configuration)
        #[arg(long, value_enum)]
        format: Option<ExportFormat>,

        /// Fail on the first unparseable date/time instead of dropping the row
        #[arg(long, conflicts_with = "lenient")]
        strict: bool,

        /// Drop rows with unparseable date/time
        #[arg(long, conflicts_with = "strict")]
        lenient: bool,

        /// Order of the date columns
        #[arg(long = "date-order", value_enum)]
        date_order: Option<DateOrder>,

        /// Do not print the preview table
        #[arg(long = "no-preview")]
        no_preview: bool,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Show the meal category of one or more HH:MM:SS times
    Classify {
        #[arg(required = true, value_name = "TIME")]
        times: Vec<String>,
    },

    /// Print the configured meal windows in priority order
    Windows,
}

impl Commands {
    /// Parse mode requested on the command line, if any.
    pub fn parse_mode_override(strict: bool, lenient: bool) -> Option<ParseMode> {
        match (strict, lenient) {
            (true, _) => Some(ParseMode::Strict),
            (_, true) => Some(ParseMode::Lenient),
            _ => None,
        }
    }
}
