//! Tunable thresholds for the rule groups and the score.

use serde::{Deserialize, Serialize};

use invoiceqc_core::{DomainError, DomainResult};

/// Thresholds used during evaluation.
///
/// Defaults reproduce the production rule set exactly; a policy file only needs
/// to name the fields it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationPolicy {
    /// Allowed `|quantity * unit_price - total|` per line item.
    pub line_tolerance: f64,
    /// Allowed `|sum(line totals) - total_amount|`.
    pub sum_tolerance: f64,
    /// Invoice years older than `current_year - max_years_past` are unusual.
    pub max_years_past: i32,
    /// Invoice years later than `current_year + max_years_ahead` are unusual.
    pub max_years_ahead: i32,
    /// Score points deducted per error.
    pub error_penalty: u32,
    /// Score points deducted per warning.
    pub warning_penalty: u32,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            line_tolerance: 0.05,
            sum_tolerance: 1.0,
            max_years_past: 5,
            max_years_ahead: 1,
            error_penalty: 20,
            warning_penalty: 5,
        }
    }
}

impl ValidationPolicy {
    /// Check that every threshold is usable.
    pub fn validate(&self) -> DomainResult<()> {
        for (name, value) in [
            ("line_tolerance", self.line_tolerance),
            ("sum_tolerance", self.sum_tolerance),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(DomainError::validation(format!(
                    "{name} must be a finite non-negative number (got {value})"
                )));
            }
        }

        for (name, value) in [
            ("max_years_past", self.max_years_past),
            ("max_years_ahead", self.max_years_ahead),
        ] {
            if value < 0 {
                return Err(DomainError::validation(format!(
                    "{name} must not be negative (got {value})"
                )));
            }
        }

        for (name, value) in [
            ("error_penalty", self.error_penalty),
            ("warning_penalty", self.warning_penalty),
        ] {
            if value > 100 {
                return Err(DomainError::validation(format!(
                    "{name} must be at most 100 (got {value})"
                )));
            }
        }

        Ok(())
    }

    /// Parse a policy from JSON and validate it.
    pub fn from_json_str(s: &str) -> DomainResult<Self> {
        let policy: Self =
            serde_json::from_str(s).map_err(|e| DomainError::decode(e.to_string()))?;
        policy.validate()?;
        Ok(policy)
    }
}
