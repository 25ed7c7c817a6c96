//! Domain-level error type.
//!
//! Only boundary operations (token parsing, serde decoding) can fail. Pattern
//! recognition, play comparison and hand decomposition never return errors:
//! "not a valid play" is an ordinary `None`/`false` result.

use thiserror::Error;

/// What kind of input failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    ParseCard,
    ParseRank,
    ParseSuit,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Input validation failure
    #[error("validation error ({kind:?}): {detail}")]
    Validation {
        kind: ValidationKind,
        detail: String,
    },
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation {
            kind,
            detail: detail.into(),
        }
    }

    /// The validation kind, if this is a validation error.
    pub fn kind(&self) -> ValidationKind {
        match self {
            Self::Validation { kind, .. } => *kind,
        }
    }
}
