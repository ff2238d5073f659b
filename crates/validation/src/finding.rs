//! Validation findings and the accumulator rule groups write into.

/// How much a finding counts against a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Hard failure: forces status `invalid`.
    Error,
    /// Soft failure: degrades status to `warning`.
    Warning,
}

/// Identifies the rule that produced a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleId {
    MissingInvoiceNumber,
    MissingVendorName,
    MissingInvoiceDate,
    MissingTotalAmount,
    InvoiceDateFormat,
    CurrencyCode,
    NonPositiveTotal,
    DueBeforeInvoiceDate,
    NoLineItems,
    LineItemDescription,
    LineItemMath,
    LineItemSum,
    UnusualInvoiceYear,
}

impl RuleId {
    pub fn as_str(self) -> &'static str {
        match self {
            RuleId::MissingInvoiceNumber => "completeness.invoice_number",
            RuleId::MissingVendorName => "completeness.vendor_name",
            RuleId::MissingInvoiceDate => "completeness.invoice_date",
            RuleId::MissingTotalAmount => "completeness.total_amount",
            RuleId::InvoiceDateFormat => "format.invoice_date",
            RuleId::CurrencyCode => "format.currency",
            RuleId::NonPositiveTotal => "business.total_amount",
            RuleId::DueBeforeInvoiceDate => "business.due_date",
            RuleId::NoLineItems => "line_items.present",
            RuleId::LineItemDescription => "line_items.description",
            RuleId::LineItemMath => "line_items.math",
            RuleId::LineItemSum => "line_items.sum",
            RuleId::UnusualInvoiceYear => "anomaly.invoice_year",
        }
    }
}

impl core::fmt::Display for RuleId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single defect found in a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub rule: RuleId,
    pub severity: Severity,
    /// Human-readable message, part of the output contract.
    pub message: String,
}

/// Ordered accumulator of findings.
///
/// Insertion order is preserved per severity; that order is what ends up in
/// the report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Findings {
    items: Vec<Finding>,
}

impl Findings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, rule: RuleId, message: impl Into<String>) {
        self.push(rule, Severity::Error, message);
    }

    pub fn warning(&mut self, rule: RuleId, message: impl Into<String>) {
        self.push(rule, Severity::Warning, message);
    }

    fn push(&mut self, rule: RuleId, severity: Severity, message: impl Into<String>) {
        self.items.push(Finding {
            rule,
            severity,
            message: message.into(),
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &Finding> {
        self.items.iter()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.of(Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.of(Severity::Warning)
    }

    fn of(&self, severity: Severity) -> impl Iterator<Item = &Finding> {
        self.items.iter().filter(move |f| f.severity == severity)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, rule: RuleId) -> bool {
        self.items.iter().any(|f| f.rule == rule)
    }
}

impl Extend<Finding> for Findings {
    fn extend<T: IntoIterator<Item = Finding>>(&mut self, iter: T) {
        self.items.extend(iter);
    }
}

impl IntoIterator for Findings {
    type Item = Finding;
    type IntoIter = std::vec::IntoIter<Finding>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
