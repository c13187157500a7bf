//! The absorbing end state of a failed navigation chain.

use crate::error::{CursorError, Result};
use crate::step::Step;

/// A navigation chain that has failed.
///
/// Holds the step that first failed to resolve. Every further lookup keeps
/// that step, and resolution fails unless a fallback is supplied.
#[derive(Debug, Clone)]
pub struct Absent {
    key: Step,
}

impl Absent {
    pub fn new(key: impl Into<Step>) -> Self {
        Self { key: key.into() }
    }

    /// The step that first failed.
    pub fn key(&self) -> &Step {
        &self.key
    }

    /// The "key does not exist" error for this chain.
    pub fn error(&self) -> CursorError {
        CursorError::KeyNotFound(self.key.clone())
    }

    /// Always fails with [`CursorError::KeyNotFound`].
    pub fn resolve<T>(&self) -> Result<T> {
        Err(self.error())
    }

    /// Returns `fallback`.
    pub fn resolve_or<T>(&self, fallback: T) -> T {
        fallback
    }

    /// The error for a mutation or cast attempted on a failed chain.
    pub(crate) fn reject(&self, op: &'static str) -> CursorError {
        tracing::debug!(key = %self.key, op, "operation on missing value rejected");
        self.error()
    }
}

impl From<Absent> for CursorError {
    fn from(absent: Absent) -> Self {
        CursorError::KeyNotFound(absent.key)
    }
}
