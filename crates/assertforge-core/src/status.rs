//! ConstraintStatus - outcome classification of one evaluation

use std::fmt;

/// Outcome of applying a constraint to a value.
///
/// `Failure` is a clean predicate mismatch. `Error` means the predicate could
/// not be applied at all, for example a range check against a string.
///
/// # Examples
///
/// ```
/// use assertforge_core::ConstraintStatus;
///
/// assert_eq!(ConstraintStatus::default(), ConstraintStatus::Unknown);
/// assert_eq!(ConstraintStatus::from_bool(true), ConstraintStatus::Success);
/// assert_eq!(ConstraintStatus::Failure.negated(), ConstraintStatus::Success);
/// assert_eq!(ConstraintStatus::Error.negated(), ConstraintStatus::Error);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConstraintStatus {
    /// Not yet evaluated.
    #[default]
    Unknown,
    /// The value satisfied the constraint.
    Success,
    /// The value did not satisfy the constraint.
    Failure,
    /// The constraint could not be applied to the value.
    Error,
}

impl ConstraintStatus {
    /// Maps `true` to `Success` and `false` to `Failure`.
    #[inline]
    pub const fn from_bool(success: bool) -> Self {
        if success {
            ConstraintStatus::Success
        } else {
            ConstraintStatus::Failure
        }
    }

    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ConstraintStatus::Success)
    }

    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, ConstraintStatus::Failure)
    }

    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, ConstraintStatus::Error)
    }

    #[inline]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, ConstraintStatus::Unknown)
    }

    /// Swaps `Success` and `Failure`. `Error` and `Unknown` are unchanged.
    pub const fn negated(self) -> Self {
        match self {
            ConstraintStatus::Success => ConstraintStatus::Failure,
            ConstraintStatus::Failure => ConstraintStatus::Success,
            other => other,
        }
    }
}

impl fmt::Display for ConstraintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintStatus::Unknown => write!(f, "unknown"),
            ConstraintStatus::Success => write!(f, "success"),
            ConstraintStatus::Failure => write!(f, "failure"),
            ConstraintStatus::Error => write!(f, "error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unknown() {
        let status = ConstraintStatus::default();
        assert!(status.is_unknown());
        assert!(!status.is_success());
    }

    #[test]
    fn test_from_bool() {
        assert!(ConstraintStatus::from_bool(true).is_success());
        assert!(ConstraintStatus::from_bool(false).is_failure());
    }

    #[test]
    fn test_negated() {
        assert_eq!(ConstraintStatus::Success.negated(), ConstraintStatus::Failure);
        assert_eq!(ConstraintStatus::Failure.negated(), ConstraintStatus::Success);
        assert_eq!(ConstraintStatus::Error.negated(), ConstraintStatus::Error);
        assert_eq!(ConstraintStatus::Unknown.negated(), ConstraintStatus::Unknown);
    }

    #[test]
    fn test_display() {
        assert_eq!(ConstraintStatus::Error.to_string(), "error");
        assert_eq!(ConstraintStatus::Success.to_string(), "success");
    }
}
