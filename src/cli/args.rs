//! Command-line argument definitions for the waste record reader
//!
//! This module defines the CLI interface using the clap derive API.

use crate::constants::DEFAULT_DELIMITER;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the waste record reader
///
/// Validates and parses municipal waste tonnage and container inventory
/// files, then prints a summary or the parsed records.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "waste-records",
    version,
    about = "Validate and parse waste tonnage and container inventory CSV files",
    long_about = "Reads delimited waste collection files, checks their structure \
                  (existence, readability, extension, header and body) and converts \
                  every row into a typed record. Precondition failures exit with a \
                  distinct code between 1704 and 1709."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Read a waste tonnage file (header is verified)
    Waste(ReadArgs),
    /// Read a container inventory file
    Containers(ReadArgs),
}

/// Arguments shared by both read commands
#[derive(Debug, Clone, Parser)]
pub struct ReadArgs {
    /// Path to the delimited file to read
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Field delimiter, a single ASCII character
    ///
    /// For container files this is used when filling empty fields; rows are
    /// always split on ';'.
    #[arg(
        short = 'd',
        long = "delimiter",
        value_name = "DELIM",
        default_value = DEFAULT_DELIMITER,
        help = "Field delimiter"
    )]
    pub delimiter: String,

    /// Apply full file checks to container files
    ///
    /// By default container files are only required to exist. With this flag
    /// they also need to be readable, end in .csv and contain at least one row.
    #[arg(long = "strict", help = "Apply full file checks to container files")]
    pub strict: bool,

    /// Treat blank lines as rows instead of skipping them
    #[arg(
        long = "keep-blank-lines",
        help = "Treat blank lines as rows instead of skipping them"
    )]
    pub keep_blank_lines: bool,

    /// Output format for results
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Human,
    /// Parsed records as a JSON array
    Json,
}

impl ReadArgs {
    /// Get the log level from the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}
