//! Line-item consistency: per-line arithmetic and the line sum against the
//! invoice total.

use super::RuleContext;
use crate::finding::{Findings, RuleId};
use crate::number::{format_fixed, format_number};
use crate::record::{InvoiceRecord, LineItem, non_empty, non_zero};

pub fn check(record: &InvoiceRecord, ctx: &RuleContext<'_>, findings: &mut Findings) {
    let items = match record.items() {
        Some(items) if !items.is_empty() => items,
        _ => {
            findings.warning(RuleId::NoLineItems, "No line items extracted");
            return;
        }
    };

    let calculated_total = items
        .iter()
        .enumerate()
        .fold(0.0, |sum, (idx, item)| {
            sum + check_item(idx + 1, item, ctx, findings)
        });

    if let Some(total_amount) = non_zero(record.total_amount) {
        if (calculated_total - total_amount).abs() > ctx.policy.sum_tolerance {
            findings.warning(
                RuleId::LineItemSum,
                format!(
                    "Sum of line items ({}) does not match Total Amount ({})",
                    format_fixed(calculated_total, 2),
                    format_number(total_amount),
                ),
            );
        }
    }
}

/// Check one line (1-based `line_no`) and return its contribution to the sum.
///
/// Only lines with both a quantity and a unit price contribute; they
/// contribute their stated total, or `quantity * unit_price` without one.
fn check_item(
    line_no: usize,
    item: &LineItem,
    ctx: &RuleContext<'_>,
    findings: &mut Findings,
) -> f64 {
    if non_empty(&item.description).is_none() {
        findings.warning(
            RuleId::LineItemDescription,
            format!("Line item {line_no} missing description"),
        );
    }

    let (Some(quantity), Some(unit_price)) = (non_zero(item.quantity), non_zero(item.unit_price))
    else {
        return 0.0;
    };

    let item_total = quantity * unit_price;
    let stated_total = non_zero(item.total);

    if let Some(total) = stated_total {
        if (item_total - total).abs() > ctx.policy.line_tolerance {
            findings.warning(
                RuleId::LineItemMath,
                format!(
                    "Line item {line_no} math mismatch: {} * {} != {}",
                    format_number(quantity),
                    format_number(unit_price),
                    format_number(total),
                ),
            );
        }
    }

    stated_total.unwrap_or(item_total)
}
