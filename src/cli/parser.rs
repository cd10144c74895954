use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for wellness-logger
#[derive(Parser)]
#[command(
    name = "wellness",
    version = env!("CARGO_PKG_VERSION"),
    about = "Mental wellness entry logger: track daily wellness activities and export them to a spreadsheet",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file with default values
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

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

    /// Start a logging session (entries live until the session ends)
    Session {
        /// Read session commands from a file instead of stdin
        #[arg(long, value_name = "FILE")]
        script: Option<PathBuf>,
    },

    /// Show the status for a screen-free time
    Status {
        /// Screen-free minutes (1-1440)
        #[arg(allow_hyphen_values = true)]
        minutes: i64,
    },

    /// Validate an entry without storing it
    Check {
        #[arg(long, default_value = "")]
        name: String,

        #[arg(long, default_value = "")]
        activity: String,

        #[arg(long, default_value = "")]
        metime: String,

        #[arg(long, allow_hyphen_values = true)]
        minutes: String,
    },

    /// Print a self-care reminder
    Remind,
}
