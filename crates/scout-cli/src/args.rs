//! CLI argument definitions using clap
//!
//! - scout search <TERM>          # Find declarations and usages
//! - scout tools                  # List available tools
//! - scout schema                 # Print tool input schemas
//! - scout config init|show|validate

use clap::{Args, Parser, Subcommand, ValueEnum};
use scout_core::config::LogFormat;
use std::path::PathBuf;

/// Default configuration file name used across all CLI commands.
pub const DEFAULT_CONFIG_FILE: &str = "scout_config.json";

#[derive(Parser)]
#[command(name = "scout")]
#[command(about = "Scout - find declarations and usages of an identifier across a source tree")]
#[command(
    long_about = r#"Scout - find declarations and usages of an identifier across a source tree

USAGE:
  scout search getUserById              # Search the current directory
  scout search render --root web -t tsx # Restrict root and file types
  scout search Cart --json              # Machine-readable result

UTILITY COMMANDS:
  scout config init                     # Create config file
  scout config show                     # Show current config
  scout tools                           # List available tools
  scout schema                          # Print tool input schemas

Set RUST_LOG=debug for verbose logging."#
)]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config_file: String,

    /// Log level override (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format override
    #[arg(long, global = true, value_enum)]
    pub log_format: Option<LogFormatArg>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search for declarations and usages of a term
    Search(SearchArgs),

    /// List all available tools and their descriptions
    Tools,

    /// Print the JSON input schema of every tool
    Schema {
        /// Only print the schema of this tool
        #[arg(long)]
        tool: Option<String>,
    },

    /// Manage configuration files
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Args, Clone, Debug, Default)]
pub struct SearchArgs {
    /// Identifier to search for (matched literally)
    pub term: String,

    /// Directory to search
    #[arg(long, short, default_value = ".")]
    pub root: PathBuf,

    /// File extension to include, repeatable (e.g. -t py -t .js)
    #[arg(long = "type", short = 't', value_name = "EXT")]
    pub file_types: Vec<String>,

    /// Do not report declarations
    #[arg(long)]
    pub no_declarations: bool,

    /// Do not report usages
    #[arg(long)]
    pub no_usages: bool,

    /// Lines of context on each side of a match
    #[arg(long = "context", short = 'C', value_name = "N")]
    pub context_lines: Option<u64>,

    /// Maximum number of matches across all files
    #[arg(long, value_name = "N")]
    pub max_results: Option<u64>,

    /// File passed to the summarizer as additional context
    #[arg(long)]
    pub reference_file: Option<String>,

    /// Print the structured result as JSON instead of the report
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Clone)]
pub enum ConfigAction {
    /// Display current configuration settings
    Show,

    /// Validate configuration file for errors
    Validate,

    /// Create a new configuration file with defaults
    Init {
        /// Overwrite existing file without prompting
        #[arg(long)]
        force: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}
