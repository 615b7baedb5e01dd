//! Error types for AssertForge

use thiserror::Error;

use crate::value::{ActualValue, ValueKind};

/// Why a constraint could not be applied to a value.
///
/// Carried by results whose status is `Error`. A fault never escapes
/// `evaluate` as a panic or `Err`; it is always folded into the result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationFault {
    /// The predicate is undefined for the value's kind.
    #[error("expected {expected} but got {actual}")]
    TypeMismatch {
        /// What the predicate can be applied to.
        expected: String,
        /// Kind of the value it was given.
        actual: ValueKind,
    },

    /// The values have no ordering, e.g. NaN.
    #[error("values cannot be ordered: {reason}")]
    Incomparable { reason: String },

    /// A regular expression failed to compile.
    #[error("invalid pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// The constraint itself is inconsistent, e.g. a range with swapped bounds.
    #[error("invalid constraint: {0}")]
    InvalidConstraint(String),

    /// Raised by user-supplied predicates.
    #[error("{0}")]
    Custom(String),
}

impl EvaluationFault {
    /// Creates a type mismatch for `actual`.
    pub fn type_mismatch(expected: impl Into<String>, actual: &ActualValue) -> Self {
        EvaluationFault::TypeMismatch {
            expected: expected.into(),
            actual: actual.kind(),
        }
    }
}

/// Result type alias for fallible evaluation helpers
pub type Result<T> = std::result::Result<T, EvaluationFault>;
