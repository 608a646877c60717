//! Command line argument parsing for the bestmatch CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::similarity::RatioMetric;

/// bestmatch - find the closest word or number in a reference set
#[derive(Parser, Debug, Clone)]
#[command(name = "bestmatch")]
#[command(about = "Find the closest word or number in a reference set")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct BestMatchArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Matching configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "BESTMATCH_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl BestMatchArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Find the closest word to a word
    Word(WordArgs),

    /// Map every query word to its closest reference word
    Words(WordsArgs),

    /// Find the closest number to a number
    Number(NumberArgs),

    /// Map every query number to its closest reference number
    Numbers(NumbersArgs),

    /// Spell-check words against a word list file
    Spell(SpellArgs),

    /// Print example word and number mappings
    Demo,
}

/// Options shared by the word-based commands
#[derive(clap::Args, Debug, Clone, Default)]
pub struct MatchOptions {
    /// Reject matches further away than this distance (1.0 - ratio)
    #[arg(long, value_name = "DISTANCE")]
    pub max_diff: Option<f64>,

    /// Similarity ratio
    #[arg(short, long)]
    pub ratio: Option<RatioArg>,
}

/// Arguments for a single word lookup
#[derive(Parser, Debug, Clone)]
pub struct WordArgs {
    /// Word to look up
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Candidate words (comma-separated)
    #[arg(long, value_delimiter = ',', required = true)]
    pub candidates: Vec<String>,

    #[command(flatten)]
    pub options: MatchOptions,
}

/// Arguments for bulk word mapping
#[derive(Parser, Debug, Clone)]
pub struct WordsArgs {
    /// Reference words (comma-separated)
    #[arg(long, value_delimiter = ',', required = true)]
    pub reference: Vec<String>,

    /// Words to map
    #[arg(value_name = "QUERY", required = true)]
    pub queries: Vec<String>,

    #[command(flatten)]
    pub options: MatchOptions,
}

/// Arguments for a single number lookup
#[derive(Parser, Debug, Clone)]
pub struct NumberArgs {
    /// Number to look up
    #[arg(value_name = "VALUE", allow_negative_numbers = true)]
    pub value: f64,

    /// Reference numbers (comma-separated)
    #[arg(long, value_delimiter = ',', required = true, allow_negative_numbers = true)]
    pub reference: Vec<f64>,
}

/// Arguments for bulk number mapping
#[derive(Parser, Debug, Clone)]
pub struct NumbersArgs {
    /// Reference numbers (comma-separated)
    #[arg(long, value_delimiter = ',', required = true, allow_negative_numbers = true)]
    pub reference: Vec<f64>,

    /// Numbers to map
    #[arg(value_name = "QUERY", required = true, allow_negative_numbers = true)]
    pub queries: Vec<f64>,
}

/// Arguments for spell checking
#[derive(Parser, Debug, Clone)]
pub struct SpellArgs {
    /// Word list file, one word per line
    #[arg(short, long, value_name = "WORDS_FILE")]
    pub dictionary: PathBuf,

    /// Words to check (reads stdin interactively when omitted)
    #[arg(value_name = "WORD")]
    pub words: Vec<String>,

    #[command(flatten)]
    pub options: MatchOptions,
}

/// Similarity ratios available in CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatioArg {
    /// Matching-blocks ratio
    Sequence,
    /// Indel (LCS) ratio
    Indel,
    /// Normalized Levenshtein ratio
    Levenshtein,
}

impl From<RatioArg> for RatioMetric {
    fn from(arg: RatioArg) -> Self {
        match arg {
            RatioArg::Sequence => RatioMetric::Sequence,
            RatioArg::Indel => RatioMetric::Indel,
            RatioArg::Levenshtein => RatioMetric::Levenshtein,
        }
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
