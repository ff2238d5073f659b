//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// These are faults of the *caller* (unreadable input text, a bad policy
/// file). Validation findings about an invoice are never reported through this
/// type; they are data inside a verdict.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A configuration value failed validation.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Input could not be decoded at all (e.g. the bytes are not JSON).
    #[error("decode failed: {0}")]
    Decode(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }
}
