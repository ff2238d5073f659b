//! Command-line arguments.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

/// Re-validate AI-extracted invoices and score their quality.
#[derive(Parser, Debug)]
#[command(name = "invoiceqc", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate every invoice in a file and print the validated invoices
    Validate {
        #[command(flatten)]
        input: InputArgs,

        /// Write the validated invoices here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Exit with status 2 when any invoice is invalid
        #[arg(long, default_value_t = false)]
        fail_on_invalid: bool,
    },

    /// Print only the batch summary
    Summary {
        #[command(flatten)]
        input: InputArgs,
    },
}

/// Options shared by every subcommand that evaluates a file.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// JSON file holding one invoice object or an array of them
    pub file: PathBuf,

    /// JSON validation policy (tolerances, year window, penalties)
    #[arg(long)]
    pub policy: Option<PathBuf>,

    /// Evaluate as of this date (YYYY-MM-DD) instead of today
    #[arg(long, value_parser = parse_as_of)]
    pub as_of: Option<NaiveDate>,
}

fn parse_as_of(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}
