//! CLI argument structures
//!
//! This module defines the command-line interface of racedb: global flags and
//! one subcommand per batch job. Every path flag overrides the matching
//! config file entry.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::document::MissingFieldPolicy;

/// Classify, split and cross-check skiing race result datasets
#[derive(Parser, Debug)]
#[command(name = "racedb")]
#[command(about = "racedb - Classify, split and cross-check skiing race results", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print warnings and errors; hide progress bars
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a racedb.toml configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Record decoding options shared by every subcommand that reads documents
#[derive(Args, Debug, Clone, Default)]
pub struct RecordArgs {
    /// What to do with a record that is missing a field or has a bad value
    #[arg(long, value_enum, value_name = "POLICY")]
    pub on_missing_field: Option<MissingFieldPolicy>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify races and split them into category files
    #[command(name = "split")]
    Split {
        /// Input results document
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Directory for the output documents
        #[arg(short, long, value_name = "DIR")]
        output_dir: Option<PathBuf>,

        #[command(flatten)]
        records: RecordArgs,
    },

    /// Classify races and split their result lists by raceid range
    #[command(name = "split-ranges")]
    SplitRanges {
        /// Input results document
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Directory for the output documents
        #[arg(short, long, value_name = "DIR")]
        output_dir: Option<PathBuf>,

        /// Comma-separated, strictly increasing range boundaries
        #[arg(long, value_delimiter = ',', value_name = "IDS")]
        boundaries: Option<Vec<u32>>,

        /// Put raceids at or above the last boundary in a final open-ended file
        #[arg(long)]
        open_ended: bool,

        #[command(flatten)]
        records: RecordArgs,
    },

    /// Remove athlete raceids that do not name a known race
    #[command(name = "cleanup")]
    Cleanup {
        /// Athletes document holding each athlete's raceids
        #[arg(short, long, value_name = "FILE")]
        athletes: Option<PathBuf>,

        /// Race info document holding the canonical race list
        #[arg(short, long, value_name = "FILE")]
        races: Option<PathBuf>,

        /// Output athletes document
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        records: RecordArgs,
    },

    /// Show how discipline strings are classified
    #[command(name = "classify")]
    Classify {
        /// Discipline strings, e.g. "Men's Sprint Qual"
        #[arg(required = true)]
        disciplines: Vec<String>,
    },
}
