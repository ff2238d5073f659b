//! The validation engine: runs every rule group over a record and derives the
//! verdict.

use chrono::{DateTime, Datelike, Utc};
use tracing::debug;

use invoiceqc_core::{Clock, DomainResult, SystemClock};

use crate::policy::ValidationPolicy;
use crate::record::InvoiceRecord;
use crate::rules::{self, RuleContext};
use crate::verdict::Verdict;

/// Stateless evaluator of invoice records.
///
/// Holds only configuration (a policy and a time source); evaluations share
/// nothing and may run concurrently from any number of threads.
#[derive(Debug)]
pub struct ValidationEngine {
    policy: ValidationPolicy,
    clock: Box<dyn Clock>,
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self {
            policy: ValidationPolicy::default(),
            clock: Box::new(SystemClock),
        }
    }
}

impl ValidationEngine {
    /// Engine with a custom policy and the wall clock.
    pub fn new(policy: ValidationPolicy) -> DomainResult<Self> {
        policy.validate()?;
        Ok(Self {
            policy,
            clock: Box::new(SystemClock),
        })
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn policy(&self) -> &ValidationPolicy {
        &self.policy
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Evaluate `record` as of the engine clock's current time.
    pub fn evaluate(&self, record: &InvoiceRecord) -> Verdict {
        self.evaluate_at(record, self.clock.now())
    }

    /// Evaluate `record` as of `now`.
    ///
    /// For fixed input and fixed `now` the result is always identical.
    pub fn evaluate_at(&self, record: &InvoiceRecord, now: DateTime<Utc>) -> Verdict {
        let ctx = RuleContext {
            policy: &self.policy,
            current_year: now.year(),
        };

        let findings = rules::run_all(record, &ctx);
        let verdict = Verdict::from_findings(&findings, &self.policy);
        let fired: Vec<&str> = findings.iter().map(|f| f.rule.as_str()).collect();

        debug!(
            invoice_number = ?record.invoice_number,
            rules = ?fired,
            status = %verdict.status(),
            errors = verdict.errors().len(),
            warnings = verdict.warnings().len(),
            score = verdict.score(),
            "invoice evaluated"
        );

        verdict
    }
}

/// Evaluate with the default policy as of the current wall-clock time.
pub fn evaluate(record: &InvoiceRecord) -> Verdict {
    ValidationEngine::default().evaluate(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verdict::ValidationStatus;
    use chrono::{NaiveDate, TimeZone};
    use invoiceqc_core::{DomainError, FixedClock};

    fn fixed_engine(year: i32) -> ValidationEngine {
        ValidationEngine::default()
            .with_clock(FixedClock::at_date(NaiveDate::from_ymd_opt(year, 6, 1).unwrap()))
    }

    fn valid_record() -> InvoiceRecord {
        InvoiceRecord::from_value(&serde_json::json!({
            "invoice_number": "INV-1",
            "vendor_name": "Acme",
            "invoice_date": "2024-01-15",
            "due_date": "2024-02-15",
            "currency": "USD",
            "total_amount": 100.0,
            "line_items": [
                { "description": "Item", "quantity": 1, "unit_price": 100.0, "total": 100.0 }
            ]
        }))
    }

    #[test]
    fn empty_record_yields_four_errors_and_one_warning() {
        let verdict = fixed_engine(2024).evaluate(&InvoiceRecord::default());
        assert_eq!(verdict.status(), ValidationStatus::Invalid);
        assert_eq!(verdict.errors().len(), 4);
        assert_eq!(verdict.warnings(), ["No line items extracted"]);
        assert_eq!(verdict.score(), 15);
    }

    #[test]
    fn engine_clock_drives_the_anomaly_window() {
        let record = valid_record();
        assert_eq!(fixed_engine(2024).evaluate(&record).status(), ValidationStatus::Valid);

        let later = fixed_engine(2035).evaluate(&record);
        assert_eq!(later.status(), ValidationStatus::Warning);
        assert_eq!(later.warnings(), ["Invoice date year (2024) seems unusual"]);
    }

    #[test]
    fn evaluate_at_ignores_the_engine_clock() {
        let engine = fixed_engine(2035);
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        assert_eq!(
            engine.evaluate_at(&valid_record(), now).status(),
            ValidationStatus::Valid
        );
    }

    #[test]
    fn custom_policy_changes_penalties() {
        let policy = ValidationPolicy {
            error_penalty: 50,
            ..ValidationPolicy::default()
        };
        let engine = ValidationEngine::new(policy)
            .unwrap()
            .with_clock(FixedClock::at_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()));
        let verdict = engine.evaluate(&InvoiceRecord::default());
        assert_eq!(verdict.score(), 0);
    }

    #[test]
    fn invalid_policy_is_rejected() {
        let policy = ValidationPolicy {
            sum_tolerance: f64::NAN,
            ..ValidationPolicy::default()
        };
        assert!(matches!(
            ValidationEngine::new(policy),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn engine_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ValidationEngine>();
    }
}
