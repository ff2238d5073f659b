//! Temporal anomaly heuristics.

use chrono::Datelike;

use super::RuleContext;
use crate::date::parse_calendar_date;
use crate::finding::{Findings, RuleId};
use crate::record::{InvoiceRecord, non_empty};

pub fn check(record: &InvoiceRecord, ctx: &RuleContext<'_>, findings: &mut Findings) {
    let Some(invoice_year) = non_empty(&record.invoice_date)
        .and_then(parse_calendar_date)
        .map(|d| d.year())
    else {
        return;
    };

    let earliest = ctx.current_year.saturating_sub(ctx.policy.max_years_past);
    let latest = ctx.current_year.saturating_add(ctx.policy.max_years_ahead);
    if invoice_year < earliest || invoice_year > latest {
        findings.warning(
            RuleId::UnusualInvoiceYear,
            format!("Invoice date year ({invoice_year}) seems unusual"),
        );
    }
}
