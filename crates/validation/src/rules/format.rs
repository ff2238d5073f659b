//! Shape checks on present fields.

use super::RuleContext;
use crate::date::is_canonical_date;
use crate::finding::{Findings, RuleId};
use crate::record::{InvoiceRecord, non_empty};

const CURRENCY_CODE_LEN: usize = 3;

pub fn check(record: &InvoiceRecord, _ctx: &RuleContext<'_>, findings: &mut Findings) {
    if let Some(date) = non_empty(&record.invoice_date) {
        if !is_canonical_date(date) {
            findings.error(
                RuleId::InvoiceDateFormat,
                "Invalid Invoice Date format (expected YYYY-MM-DD)",
            );
        }
    }

    if let Some(currency) = non_empty(&record.currency) {
        // Length in characters, not bytes.
        if currency.chars().count() != CURRENCY_CODE_LEN {
            findings.warning(
                RuleId::CurrencyCode,
                format!("Suspicious currency code: {currency}"),
            );
        }
    }
}
