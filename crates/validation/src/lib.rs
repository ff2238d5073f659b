//! Invoice validation and quality scoring.
//!
//! Takes an AI-extracted invoice record (fields may be missing, mistyped or
//! inconsistent) and produces a verdict: a status, ordered error and warning
//! messages, and a score in \[0, 100\]. Evaluation is deterministic for a
//! fixed record and evaluation time, never fails, and never mutates its input.

pub mod batch;
pub mod date;
pub mod engine;
pub mod finding;
pub mod number;
pub mod policy;
pub mod record;
pub mod rules;
pub mod validated;
pub mod verdict;

pub use batch::{BandCounts, BatchOutcome, BatchSummary};
pub use engine::{ValidationEngine, evaluate};
pub use finding::{Finding, Findings, RuleId, Severity};
pub use policy::ValidationPolicy;
pub use record::{InvoiceRecord, LineItem, LineItems};
pub use rules::{RuleContext, RuleGroup};
pub use validated::ValidatedInvoice;
pub use verdict::{ScoreBand, ValidationReport, ValidationStatus, Verdict, quality_score};
