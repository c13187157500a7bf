use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

use crate::step::Step;

/// Errors raised when a navigation chain is resolved, cast or mutated.
///
/// Navigation itself never fails. [`CursorError::KeyNotFound`] is the only
/// error produced on the caller's behalf; the remaining variants are the
/// ordinary conversion failures of the final cast or mutation step.
#[derive(Debug, Error)]
pub enum CursorError {
    /// A key or index in the chain did not resolve. Carries the first failed step.
    #[error("Key does not exist: {0}")]
    KeyNotFound(Step),
    /// The wrapped text is not an integer literal.
    #[error(transparent)]
    ParseInt(#[from] ParseIntError),
    /// The wrapped text is not a float literal.
    #[error(transparent)]
    ParseFloat(#[from] ParseFloatError),
    /// The wrapped value has the wrong JSON type for the operation.
    #[error("expected {expected}, found {found}")]
    Type {
        expected: &'static str,
        found: &'static str,
    },
    /// A numeric value does not fit the requested type.
    #[error("out of range: {0}")]
    OutOfRange(String),
    /// Typed resolution failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl CursorError {
    /// Check if this is the "key does not exist" error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CursorError::KeyNotFound(_))
    }

    /// The first failed step, for "key does not exist" errors.
    pub fn step(&self) -> Option<&Step> {
        match self {
            CursorError::KeyNotFound(step) => Some(step),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CursorError>;
