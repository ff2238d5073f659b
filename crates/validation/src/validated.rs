//! A record with its verdict attached, as handed to persistence.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::record::InvoiceRecord;
use crate::verdict::{ValidationReport, ValidationStatus, Verdict};

const STATUS_KEY: &str = "validation_status";
const REPORT_KEY: &str = "validation_report";

/// The extracted fields, untouched, plus `validation_status` and
/// `validation_report` alongside them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatedInvoice {
    #[serde(flatten)]
    pub data: Map<String, Value>,
    pub validation_status: ValidationStatus,
    pub validation_report: ValidationReport,
}

impl ValidatedInvoice {
    /// Attach `verdict` to the raw extracted object.
    ///
    /// A verdict already present on `raw` (from an earlier run) is replaced;
    /// every other key is kept as-is. Non-object input has no fields to keep.
    pub fn attach(raw: Value, verdict: Verdict) -> Self {
        let mut data = match raw {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        data.remove(STATUS_KEY);
        data.remove(REPORT_KEY);

        Self {
            data,
            validation_status: verdict.status,
            validation_report: verdict.report,
        }
    }

    /// The typed record behind the attached data.
    pub fn record(&self) -> InvoiceRecord {
        InvoiceRecord::from_value(&Value::Object(self.data.clone()))
    }

    pub fn verdict(&self) -> Verdict {
        Verdict {
            status: self.validation_status,
            report: self.validation_report.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finding::{Findings, RuleId};
    use crate::policy::ValidationPolicy;
    use serde_json::json;

    fn warning_verdict() -> Verdict {
        let mut findings = Findings::new();
        findings.warning(RuleId::NoLineItems, "No line items extracted");
        Verdict::from_findings(&findings, &ValidationPolicy::default())
    }

    #[test]
    fn keeps_extracted_fields_and_adds_verdict_keys() {
        let raw = json!({
            "invoice_number": "INV-1",
            "file_url": "s3://bucket/inv-1.pdf",
            "total_amount": "oops"
        });
        let validated = ValidatedInvoice::attach(raw, warning_verdict());

        let json = serde_json::to_value(&validated).unwrap();
        assert_eq!(json["invoice_number"], "INV-1");
        assert_eq!(json["file_url"], "s3://bucket/inv-1.pdf");
        assert_eq!(json["total_amount"], "oops");
        assert_eq!(json["validation_status"], "warning");
        assert_eq!(json["validation_report"]["score"], 95);
    }

    #[test]
    fn replaces_a_previous_verdict() {
        let raw = json!({
            "invoice_number": "INV-1",
            "validation_status": "valid",
            "validation_report": { "errors": [], "warnings": [], "score": 100 }
        });
        let validated = ValidatedInvoice::attach(raw, warning_verdict());
        assert_eq!(validated.data.len(), 1);
        assert_eq!(validated.validation_status, ValidationStatus::Warning);
    }

    #[test]
    fn round_trips_through_storage_shape() {
        let validated =
            ValidatedInvoice::attach(json!({ "vendor_name": "Acme" }), warning_verdict());
        let stored = serde_json::to_string(&validated).unwrap();
        let loaded: ValidatedInvoice = serde_json::from_str(&stored).unwrap();

        assert_eq!(loaded, validated);
        assert_eq!(loaded.record().vendor_name.as_deref(), Some("Acme"));
        assert_eq!(loaded.verdict(), warning_verdict());
    }
}
