//! Command-line argument definitions using clap

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::quiz::DEFAULT_MAX_TRIES;

/// Romanum - Convert between Arabic numbers and Roman numerals, and practise doing it
#[derive(Parser, Debug)]
#[command(name = "romanum")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Number of answers allowed per practice question
    #[arg(long, default_value_t = DEFAULT_MAX_TRIES, value_parser = validate_max_tries)]
    pub max_tries: u32,

    /// Seed for practice questions.
    /// The same seed always asks the same numbers in the same order.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write a JSON report after each completed test to this path
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Increase diagnostic output on stderr (-v, -vv).
    /// RUST_LOG takes precedence when set.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert numbers or numerals without entering the menu
    Convert {
        /// Arabic numbers (1-3999) or Roman numerals, in any mix
        #[arg(required = true, allow_hyphen_values = true)]
        values: Vec<String>,
    },

    /// Print information about Roman numerals and the symbol chart
    Chart,
}

/// Runtime settings for the interactive shell
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub max_tries: u32,
    pub seed: Option<u64>,
    pub report: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_tries: DEFAULT_MAX_TRIES,
            seed: None,
            report: None,
        }
    }
}

impl Cli {
    /// Collect the settings used by the interactive shell
    pub fn settings(&self) -> Settings {
        Settings {
            max_tries: self.max_tries,
            seed: self.seed,
            report: self.report.clone(),
        }
    }
}

/// Validator for max_tries parameter
fn validate_max_tries(s: &str) -> Result<u32, String> {
    let value: u32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;

    if value == 0 {
        Err("max_tries must be at least 1".to_string())
    } else {
        Ok(value)
    }
}
