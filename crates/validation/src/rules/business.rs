//! Cross-field business rules.

use super::RuleContext;
use crate::date::parse_calendar_date;
use crate::finding::{Findings, RuleId};
use crate::record::{InvoiceRecord, non_empty};

pub fn check(record: &InvoiceRecord, _ctx: &RuleContext<'_>, findings: &mut Findings) {
    if let Some(total) = record.total_amount {
        if total <= 0.0 {
            findings.error(
                RuleId::NonPositiveTotal,
                "Total amount must be greater than zero",
            );
        }
    }

    // Dates that do not parse are not comparable; the check is skipped.
    let invoice_date = non_empty(&record.invoice_date).and_then(parse_calendar_date);
    let due_date = non_empty(&record.due_date).and_then(parse_calendar_date);
    if let (Some(invoice_date), Some(due_date)) = (invoice_date, due_date) {
        if due_date < invoice_date {
            findings.error(
                RuleId::DueBeforeInvoiceDate,
                "Due Date cannot be earlier than Invoice Date",
            );
        }
    }
}
