//! Required fields. All findings here are errors.

use super::RuleContext;
use crate::finding::{Findings, RuleId};
use crate::record::{InvoiceRecord, non_empty};

pub fn check(record: &InvoiceRecord, _ctx: &RuleContext<'_>, findings: &mut Findings) {
    if non_empty(&record.invoice_number).is_none() {
        findings.error(RuleId::MissingInvoiceNumber, "Missing Invoice Number");
    }
    if non_empty(&record.vendor_name).is_none() {
        findings.error(RuleId::MissingVendorName, "Missing Vendor Name");
    }
    if non_empty(&record.invoice_date).is_none() {
        findings.error(RuleId::MissingInvoiceDate, "Missing Invoice Date");
    }
    // Zero is a value, not a missing amount.
    if record.total_amount.is_none() {
        findings.error(RuleId::MissingTotalAmount, "Missing Total Amount");
    }
}
