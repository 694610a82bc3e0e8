use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Colored terminal output
    #[default]
    Term,
    /// Machine-readable JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "todoz",
    bin_name = "todoz",
    version,
    disable_help_subcommand = true
)]
#[command(about = "In-memory todo store with a flexible query engine", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format
    #[arg(
        long,
        value_enum,
        default_value_t = OutputMode::Term,
        global = true,
        help_heading = "Options"
    )]
    pub output: OutputMode,

    /// Configuration file, read before the global todoz.toml
    #[arg(long, value_name = "FILE", global = true, help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the demo scenario (default)
    #[command(display_order = 1)]
    Demo,

    /// Execute a JSON-lines script against a fresh store
    #[command(display_order = 2)]
    Run {
        /// Script file; reads stdin when omitted or "-"
        file: Option<PathBuf>,
    },

    /// Show the effective configuration
    #[command(display_order = 3)]
    Config,
}
