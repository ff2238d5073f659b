//! `invoiceqc`: batch re-validation of extracted invoices.

mod args;

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::Value;
use tracing::{info, warn};

use invoiceqc_core::FixedClock;
use invoiceqc_validation::{BatchOutcome, ValidationEngine, ValidationPolicy};

use crate::args::{Cli, Command, InputArgs};

/// Exit status when `--fail-on-invalid` is set and an invoice is invalid.
const EXIT_INVALID: u8 = 2;

fn main() -> Result<ExitCode> {
    invoiceqc_observability::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Validate { input, output, fail_on_invalid } => {
            let outcome = evaluate_file(&input)?;
            let rendered = serde_json::to_string_pretty(&outcome.invoices)
                .context("failed to serialize validated invoices")?;
            write_output(output.as_deref(), &rendered)?;

            if fail_on_invalid && outcome.summary.invalid > 0 {
                warn!(invalid = outcome.summary.invalid, "batch contains invalid invoices");
                return Ok(ExitCode::from(EXIT_INVALID));
            }
        }
        Command::Summary { input } => {
            let outcome = evaluate_file(&input)?;
            let rendered = serde_json::to_string_pretty(&outcome.summary)
                .context("failed to serialize batch summary")?;
            write_output(None, &rendered)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn evaluate_file(input: &InputArgs) -> Result<BatchOutcome> {
    let engine = build_engine(input)?;

    let text = fs::read_to_string(&input.file)
        .with_context(|| format!("failed to read {}", input.file.display()))?;
    let records = parse_records(&text)
        .with_context(|| format!("{} is not valid JSON", input.file.display()))?;

    let outcome = engine.evaluate_batch(records);
    let summary = &outcome.summary;
    info!(
        file = %input.file.display(),
        total = summary.total,
        valid = summary.valid,
        warning = summary.warning,
        invalid = summary.invalid,
        average_score = summary.average_score,
        "batch validated"
    );

    Ok(outcome)
}

fn build_engine(input: &InputArgs) -> Result<ValidationEngine> {
    let policy = match &input.policy {
        Some(path) => load_policy(path)?,
        None => ValidationPolicy::default(),
    };

    let engine = ValidationEngine::new(policy).context("invalid validation policy")?;
    Ok(match input.as_of {
        Some(date) => engine.with_clock(FixedClock::at_date(date)),
        None => engine,
    })
}

fn load_policy(path: &Path) -> Result<ValidationPolicy> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read policy {}", path.display()))?;
    ValidationPolicy::from_json_str(&text)
        .with_context(|| format!("failed to load policy {}", path.display()))
}

/// One invoice object or an array of them; any other JSON value is a single
/// (empty) record.
fn parse_records(text: &str) -> Result<Vec<Value>> {
    Ok(match serde_json::from_str::<Value>(text)? {
        Value::Array(records) => records,
        single => vec![single],
    })
}

fn write_output(path: Option<&Path>, rendered: &str) -> Result<()> {
    match path {
        Some(path) => fs::write(path, format!("{rendered}\n"))
            .with_context(|| format!("failed to write {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{rendered}").context("failed to write to stdout")
        }
    }
}
