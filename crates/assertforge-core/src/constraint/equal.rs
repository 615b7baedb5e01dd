//! Equality constraint.

use assertforge_config::RenderConfig;

use super::Constraint;
use crate::result::{ConstraintResult, Mismatch};
use crate::value::compare::{first_sequence_difference, first_string_difference};
use crate::value::{ActualValue, EqualityOptions};
use crate::writer::{format_float, format_value, MessageWriter};

/// Succeeds when the actual value equals the expected one.
///
/// Numbers compare by value across representations, so `5`, `5u8` and
/// `5.0` are all equal. Null equals only null. NaN equals NaN. Strings and
/// sequences that differ record where they diverge, and the failure message
/// points at that position.
///
/// # Examples
///
/// ```
/// use assertforge_core::{ActualValue, Constraint, EqualConstraint};
///
/// let constraint = EqualConstraint::new(0.3).within(1e-9);
/// assert!(constraint.evaluate(&ActualValue::from(0.1 + 0.2)).is_success());
///
/// let constraint = EqualConstraint::new("Hello").ignore_case();
/// assert!(constraint.evaluate(&ActualValue::from("HELLO")).is_success());
/// ```
#[derive(Debug, Clone)]
pub struct EqualConstraint {
    expected: ActualValue,
    options: EqualityOptions,
}

impl EqualConstraint {
    pub fn new(expected: impl Into<ActualValue>) -> Self {
        Self {
            expected: expected.into(),
            options: EqualityOptions::exact(),
        }
    }

    /// Accepts numbers within `tolerance` of the expected value.
    pub fn within(mut self, tolerance: f64) -> Self {
        self.options.tolerance = Some(tolerance.abs());
        self
    }

    /// Compares strings and chars case-insensitively.
    pub fn ignore_case(mut self) -> Self {
        self.options.ignore_case = true;
        self
    }

    pub fn expected(&self) -> &ActualValue {
        &self.expected
    }

    fn mismatch_for(&self, actual: &ActualValue) -> Option<Mismatch> {
        match (&self.expected, actual) {
            (ActualValue::Str(expected), ActualValue::Str(actual)) => Some(Mismatch::StringDiff {
                index: first_string_difference(expected, actual, self.options.ignore_case),
            }),
            (ActualValue::Seq(expected), ActualValue::Seq(actual)) => {
                Some(Mismatch::SequenceDiff {
                    index: first_sequence_difference(expected, actual, &self.options),
                })
            }
            _ => None,
        }
    }
}

impl Constraint for EqualConstraint {
    fn display_name(&self) -> &str {
        "Equal"
    }

    fn description(&self) -> String {
        let mut description = format_value(&self.expected, &RenderConfig::default());
        if let Some(tolerance) = self.options.tolerance {
            description.push_str(" +/- ");
            description.push_str(&format_float(tolerance));
        }
        if self.options.ignore_case {
            description.push_str(", ignoring case");
        }
        description
    }

    fn evaluate<'a>(&'a self, actual: &'a ActualValue) -> ConstraintResult<'a> {
        if self.expected.equals(actual, &self.options) {
            return ConstraintResult::from_bool(self, actual, true);
        }
        let result = ConstraintResult::from_bool(self, actual, false);
        match self.mismatch_for(actual) {
            Some(mismatch) => result.with_mismatch(mismatch),
            None => result,
        }
    }

    fn write_message_to(&self, result: &ConstraintResult<'_>, writer: &mut dyn MessageWriter) {
        match (result.mismatch(), &self.expected, result.actual_value()) {
            (
                Some(Mismatch::StringDiff { index }),
                ActualValue::Str(expected),
                ActualValue::Str(actual),
            ) => {
                writer.display_string_differences(expected, actual, *index);
            }
            _ => writer.display_differences(result),
        }
    }

    fn write_additional_lines_to(
        &self,
        result: &ConstraintResult<'_>,
        writer: &mut dyn MessageWriter,
    ) {
        if let (
            Some(Mismatch::SequenceDiff { index }),
            ActualValue::Seq(expected),
            ActualValue::Seq(actual),
        ) = (result.mismatch(), &self.expected, result.actual_value())
        {
            writer.display_sequence_differences(expected, actual, *index);
        }
    }
}
