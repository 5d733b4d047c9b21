//! CLI argument definitions using clap.

use std::path::PathBuf;
use std::str::FromStr;

use clap::builder::FalseyValueParser;
use clap::{Args, Parser, Subcommand, ValueEnum};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use vitals_types::MetricType;

/// Output format for commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s, true)
            .map_err(|_| format!("Invalid format '{}'. Use: text, json", s))
    }
}

/// Reusable health store arguments
#[derive(Debug, Clone, Args)]
pub struct StoreArgs {
    /// Fixture file to read health data from, or use VITALS_STORE env var
    #[arg(short, long, env = "VITALS_STORE")]
    pub store: Option<PathBuf>,

    /// Use built-in demo data instead of a store file
    #[arg(long)]
    pub demo: bool,

    /// Evaluate "today" as of this time (RFC3339) instead of now
    #[arg(long, value_parser = parse_datetime)]
    pub at: Option<OffsetDateTime>,
}

/// Reusable output format arguments
#[derive(Debug, Clone, Args)]
pub struct OutputArgs {
    /// Output format (overrides config)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output compact JSON (no pretty-printing)
    #[arg(long)]
    pub compact: bool,
}

#[derive(Parser)]
#[command(name = "vitals")]
#[command(author, version, about = "Dashboard client for personal health metrics", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR", value_parser = FalseyValueParser::new())]
    pub no_color: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load the dashboard and print every metric
    Show {
        #[command(flatten)]
        store: StoreArgs,

        #[command(flatten)]
        output: OutputArgs,

        /// Echo each field as it arrives
        #[arg(short, long)]
        live: bool,
    },

    /// List today's readings for one metric, newest first
    Readings {
        #[command(flatten)]
        store: StoreArgs,

        #[command(flatten)]
        output: OutputArgs,

        /// Metric to list (e.g. heart-rate, blood-pressure-systolic, oxygen-saturation)
        #[arg(short, long, value_parser = parse_metric)]
        metric: MetricType,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Configuration keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConfigKey {
    /// Default store file
    Store,
    /// Default output format
    Format,
    /// Disable colored output
    NoColor,
    /// Fixed UTC offset for day boundaries (e.g. +02:00)
    UtcOffset,
}

/// Configuration subcommands
#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Get a configuration value
    Get {
        /// Configuration key
        #[arg(value_enum)]
        key: ConfigKey,
    },

    /// Set a configuration value
    Set {
        /// Configuration key
        #[arg(value_enum)]
        key: ConfigKey,
        /// Configuration value
        value: String,
    },

    /// Unset (remove) a configuration value
    Unset {
        /// Configuration key to remove
        #[arg(value_enum)]
        key: ConfigKey,
    },

    /// Show configuration file path
    Path,
}

/// Parse a metric identifier
fn parse_metric(s: &str) -> Result<MetricType, String> {
    MetricType::from_str(s).map_err(|e| e.to_string())
}

/// Parse an RFC3339 date/time
fn parse_datetime(s: &str) -> Result<OffsetDateTime, String> {
    OffsetDateTime::parse(s, &Rfc3339)
        .map_err(|e| format!("Invalid date/time '{}' (expected RFC3339): {}", s, e))
}

/// Parse boolean argument with flexible input
pub fn parse_bool_arg(s: &str) -> Result<bool, String> {
    match s.to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" | "enable" | "enabled" => Ok(true),
        "false" | "no" | "off" | "0" | "disable" | "disabled" => Ok(false),
        _ => Err(format!(
            "Invalid boolean value '{}'. Use: true/false, yes/no, on/off, 1/0",
            s
        )),
    }
}
