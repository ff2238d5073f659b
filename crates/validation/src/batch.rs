//! Batch re-validation of many records.
//!
//! Records are independent; a batch only shares one evaluation instant so
//! every record in it sees the same "current year".

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::engine::ValidationEngine;
use crate::record::InvoiceRecord;
use crate::validated::ValidatedInvoice;
use crate::verdict::{ScoreBand, ValidationStatus, Verdict};

/// Per-band counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandCounts {
    pub good: usize,
    pub caution: usize,
    pub poor: usize,
}

/// Dashboard counters over a set of verdicts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub valid: usize,
    pub warning: usize,
    pub invalid: usize,
    /// Mean score; `0.0` for an empty batch.
    pub average_score: f64,
    pub bands: BandCounts,
}

impl BatchSummary {
    pub fn from_verdicts<'a>(verdicts: impl IntoIterator<Item = &'a Verdict>) -> Self {
        let mut summary = Self::default();
        let mut score_sum: u64 = 0;

        for verdict in verdicts {
            summary.total += 1;
            score_sum += u64::from(verdict.score());

            match verdict.status() {
                ValidationStatus::Valid => summary.valid += 1,
                ValidationStatus::Warning => summary.warning += 1,
                ValidationStatus::Invalid => summary.invalid += 1,
            }
            match verdict.band() {
                ScoreBand::Good => summary.bands.good += 1,
                ScoreBand::Caution => summary.bands.caution += 1,
                ScoreBand::Poor => summary.bands.poor += 1,
            }
        }

        if summary.total > 0 {
            summary.average_score = score_sum as f64 / summary.total as f64;
        }
        summary
    }
}

/// Validated invoices of a batch, in input order, with their summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchOutcome {
    pub invoices: Vec<ValidatedInvoice>,
    pub summary: BatchSummary,
}

impl ValidationEngine {
    /// Evaluate every raw record as of a single instant read from the clock.
    pub fn evaluate_batch(&self, records: Vec<Value>) -> BatchOutcome {
        let now = self.clock().now();

        let verdicts: Vec<Verdict> = records
            .iter()
            .map(|raw| self.evaluate_at(&InvoiceRecord::from_value(raw), now))
            .collect();
        let summary = BatchSummary::from_verdicts(&verdicts);

        debug!(
            total = summary.total,
            valid = summary.valid,
            warning = summary.warning,
            invalid = summary.invalid,
            "batch evaluated"
        );

        let invoices = records
            .into_iter()
            .zip(verdicts)
            .map(|(raw, verdict)| ValidatedInvoice::attach(raw, verdict))
            .collect();

        BatchOutcome { invoices, summary }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use invoiceqc_core::FixedClock;
    use serde_json::json;

    fn engine() -> ValidationEngine {
        ValidationEngine::default()
            .with_clock(FixedClock::at_date(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()))
    }

    #[test]
    fn empty_batch_has_zero_summary() {
        let outcome = engine().evaluate_batch(vec![]);
        assert!(outcome.invoices.is_empty());
        assert_eq!(outcome.summary, BatchSummary::default());
    }

    #[test]
    fn counts_statuses_and_bands_in_input_order() {
        let records = vec![
            json!({
                "invoice_number": "INV-1",
                "vendor_name": "Acme",
                "invoice_date": "2024-01-15",
                "total_amount": 10.0,
                "line_items": [
                    { "description": "Item", "quantity": 1, "unit_price": 10.0, "total": 10.0 }
                ]
            }),
            json!({
                "invoice_number": "INV-2",
                "vendor_name": "Acme",
                "invoice_date": "2024-01-15",
                "total_amount": 10.0
            }),
            json!({}),
            json!("not an invoice"),
        ];

        let outcome = engine().evaluate_batch(records);
        let statuses: Vec<_> = outcome
            .invoices
            .iter()
            .map(|i| i.validation_status)
            .collect();
        assert_eq!(
            statuses,
            [
                ValidationStatus::Valid,
                ValidationStatus::Warning,
                ValidationStatus::Invalid,
                ValidationStatus::Invalid,
            ]
        );

        let summary = outcome.summary;
        assert_eq!(summary.total, 4);
        assert_eq!((summary.valid, summary.warning, summary.invalid), (1, 1, 2));
        assert_eq!(summary.bands, BandCounts { good: 2, caution: 0, poor: 2 });
        assert_eq!(summary.average_score, (100.0 + 95.0 + 15.0 + 15.0) / 4.0);
        assert_eq!(outcome.invoices[0].data["invoice_number"], "INV-1");
    }
}
