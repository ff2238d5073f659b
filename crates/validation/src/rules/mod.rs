//! Rule groups.
//!
//! Each group is an independent producer: it reads the record and appends zero
//! or more findings. Groups never read each other's findings, so any one of
//! them can be exercised alone with a synthetic record.

pub mod anomaly;
pub mod business;
pub mod completeness;
pub mod format;
pub mod line_items;

use crate::finding::Findings;
use crate::policy::ValidationPolicy;
use crate::record::InvoiceRecord;

/// Inputs a rule may need beyond the record itself.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub policy: &'a ValidationPolicy,
    /// Calendar year at evaluation time.
    pub current_year: i32,
}

/// The rule groups, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleGroup {
    Completeness,
    Format,
    Business,
    LineItems,
    Anomaly,
}

impl RuleGroup {
    pub const ALL: [RuleGroup; 5] = [
        RuleGroup::Completeness,
        RuleGroup::Format,
        RuleGroup::Business,
        RuleGroup::LineItems,
        RuleGroup::Anomaly,
    ];

    pub fn check(self, record: &InvoiceRecord, ctx: &RuleContext<'_>, findings: &mut Findings) {
        match self {
            RuleGroup::Completeness => completeness::check(record, ctx, findings),
            RuleGroup::Format => format::check(record, ctx, findings),
            RuleGroup::Business => business::check(record, ctx, findings),
            RuleGroup::LineItems => line_items::check(record, ctx, findings),
            RuleGroup::Anomaly => anomaly::check(record, ctx, findings),
        }
    }
}

/// Run every group in order into a fresh accumulator.
pub fn run_all(record: &InvoiceRecord, ctx: &RuleContext<'_>) -> Findings {
    let mut findings = Findings::new();
    for group in RuleGroup::ALL {
        group.check(record, ctx, &mut findings);
    }
    findings
}
