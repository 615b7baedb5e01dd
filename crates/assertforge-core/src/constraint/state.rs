//! Constraints on the state of a single value: null, empty, true/false, NaN.

use super::Constraint;
use crate::error::EvaluationFault;
use crate::result::ConstraintResult;
use crate::value::ActualValue;

/// Succeeds when the value is null. Defined for every value.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullConstraint;

impl Constraint for NullConstraint {
    fn display_name(&self) -> &str {
        "Null"
    }

    fn description(&self) -> String {
        "null".to_string()
    }

    fn evaluate<'a>(&'a self, actual: &'a ActualValue) -> ConstraintResult<'a> {
        ConstraintResult::from_bool(self, actual, actual.is_null())
    }
}

/// Succeeds for an empty string or sequence.
///
/// Other kinds, null included, have no notion of emptiness and produce an
/// `Error` result.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyConstraint;

impl Constraint for EmptyConstraint {
    fn display_name(&self) -> &str {
        "Empty"
    }

    fn description(&self) -> String {
        "<empty>".to_string()
    }

    fn evaluate<'a>(&'a self, actual: &'a ActualValue) -> ConstraintResult<'a> {
        match actual.is_empty() {
            Some(empty) => ConstraintResult::from_bool(self, actual, empty),
            None => ConstraintResult::error(
                self,
                actual,
                EvaluationFault::type_mismatch("a string or sequence", actual),
            ),
        }
    }
}

/// Succeeds when the value is the expected boolean.
#[derive(Debug, Clone, Copy)]
pub struct BoolConstraint {
    expected: bool,
}

impl BoolConstraint {
    pub fn is_true() -> Self {
        Self { expected: true }
    }

    pub fn is_false() -> Self {
        Self { expected: false }
    }
}

impl Constraint for BoolConstraint {
    fn display_name(&self) -> &str {
        if self.expected {
            "True"
        } else {
            "False"
        }
    }

    fn description(&self) -> String {
        self.expected.to_string()
    }

    fn evaluate<'a>(&'a self, actual: &'a ActualValue) -> ConstraintResult<'a> {
        match actual.as_bool() {
            Some(value) => ConstraintResult::from_bool(self, actual, value == self.expected),
            None => ConstraintResult::error(
                self,
                actual,
                EvaluationFault::type_mismatch("a bool", actual),
            ),
        }
    }
}

/// Succeeds when the value is a NaN float.
///
/// Integers and decimals are never NaN; non-numeric values are an `Error`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaNConstraint;

impl Constraint for NaNConstraint {
    fn display_name(&self) -> &str {
        "NaN"
    }

    fn description(&self) -> String {
        "NaN".to_string()
    }

    fn evaluate<'a>(&'a self, actual: &'a ActualValue) -> ConstraintResult<'a> {
        match actual {
            ActualValue::Float(value) => ConstraintResult::from_bool(self, actual, value.is_nan()),
            _ if actual.is_numeric() => ConstraintResult::from_bool(self, actual, false),
            _ => ConstraintResult::error(
                self,
                actual,
                EvaluationFault::type_mismatch("a number", actual),
            ),
        }
    }
}
