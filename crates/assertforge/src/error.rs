//! Assertion errors.

use assertforge_core::{ConstraintResult, ConstraintStatus, RenderConfig};
use thiserror::Error;

/// Why an assertion did not pass.
///
/// Test drivers report both variants as failures, but `Unevaluable` means
/// the constraint could not be applied at all, which usually points at the
/// test rather than the code under test.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssertionError {
    /// The value did not satisfy the constraint.
    #[error("assertion failed\n{message}")]
    Failed { message: String },

    /// The constraint could not be applied to the value.
    #[error("assertion could not be evaluated\n{message}")]
    Unevaluable { message: String },
}

impl AssertionError {
    /// Builds the error for a non-successful result, or `None` on success.
    pub fn from_result(result: &ConstraintResult<'_>, config: &RenderConfig) -> Option<Self> {
        match result.status() {
            ConstraintStatus::Success => None,
            ConstraintStatus::Error => Some(AssertionError::Unevaluable {
                message: result.render_with(config),
            }),
            ConstraintStatus::Failure => Some(AssertionError::Failed {
                message: result.render_with(config),
            }),
            // a constraint broke its contract; nothing meaningful to render
            ConstraintStatus::Unknown => Some(AssertionError::Unevaluable {
                message: format!("  {} returned an unevaluated result\n", result.name()),
            }),
        }
    }

    /// The rendered failure message.
    pub fn message(&self) -> &str {
        match self {
            AssertionError::Failed { message } | AssertionError::Unevaluable { message } => {
                message
            }
        }
    }

    pub fn is_unevaluable(&self) -> bool {
        matches!(self, AssertionError::Unevaluable { .. })
    }

    /// Prepends a context line to the message.
    pub fn with_context(self, context: impl std::fmt::Display) -> Self {
        let prefix = |message: String| format!("  {}\n{}", context, message);
        match self {
            AssertionError::Failed { message } => AssertionError::Failed {
                message: prefix(message),
            },
            AssertionError::Unevaluable { message } => AssertionError::Unevaluable {
                message: prefix(message),
            },
        }
    }
}

/// Result type alias for assertion checks
pub type Result<T> = std::result::Result<T, AssertionError>;
