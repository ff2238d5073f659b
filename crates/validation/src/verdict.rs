//! The engine's output: status, findings and quality score for one record.

use serde::{Deserialize, Serialize};

use crate::finding::Findings;
use crate::policy::ValidationPolicy;

/// Verdict status. Exactly one applies per evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationStatus {
    Valid,
    Warning,
    Invalid,
}

impl ValidationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ValidationStatus::Valid => "valid",
            ValidationStatus::Warning => "warning",
            ValidationStatus::Invalid => "invalid",
        }
    }
}

impl core::fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Findings and score, as consumed by persistence and presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    /// Quality score in \[0, 100\].
    pub score: u8,
}

/// Result of evaluating one record.
///
/// Serialises as `{ "status": ..., "report": { "errors", "warnings", "score" } }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub status: ValidationStatus,
    pub report: ValidationReport,
}

impl Verdict {
    /// Derive status and score from accumulated findings.
    pub fn from_findings(findings: &Findings, policy: &ValidationPolicy) -> Self {
        let errors: Vec<String> = findings.errors().map(|f| f.message.clone()).collect();
        let warnings: Vec<String> = findings.warnings().map(|f| f.message.clone()).collect();

        let status = if !errors.is_empty() {
            ValidationStatus::Invalid
        } else if !warnings.is_empty() {
            ValidationStatus::Warning
        } else {
            ValidationStatus::Valid
        };

        let score = quality_score(errors.len(), warnings.len(), policy);

        Self {
            status,
            report: ValidationReport {
                errors,
                warnings,
                score,
            },
        }
    }

    pub fn status(&self) -> ValidationStatus {
        self.status
    }

    pub fn errors(&self) -> &[String] {
        &self.report.errors
    }

    pub fn warnings(&self) -> &[String] {
        &self.report.warnings
    }

    pub fn score(&self) -> u8 {
        self.report.score
    }

    pub fn band(&self) -> ScoreBand {
        ScoreBand::of(self.report.score)
    }
}

/// `max(0, 100 - error_penalty * errors - warning_penalty * warnings)`.
pub fn quality_score(errors: usize, warnings: usize, policy: &ValidationPolicy) -> u8 {
    let penalty = (errors as u64)
        .saturating_mul(u64::from(policy.error_penalty))
        .saturating_add((warnings as u64).saturating_mul(u64::from(policy.warning_penalty)));
    100u64.saturating_sub(penalty) as u8
}

/// Downstream display banding of a score.
///
/// Not used by any rule; presentation layers key colours off it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScoreBand {
    Poor,
    Caution,
    Good,
}

impl ScoreBand {
    pub fn of(score: u8) -> Self {
        match score {
            81.. => ScoreBand::Good,
            51..=80 => ScoreBand::Caution,
            _ => ScoreBand::Poor,
        }
    }
}
