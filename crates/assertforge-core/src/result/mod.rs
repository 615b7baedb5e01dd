//! The verdict of one evaluation.

#[cfg(test)]
mod tests;

use std::fmt;

use assertforge_config::RenderConfig;

use crate::constraint::Constraint;
use crate::error::EvaluationFault;
use crate::status::ConstraintStatus;
use crate::value::ActualValue;
use crate::writer::{MessageWriter, TextMessageWriter};

/// Diagnostic detail captured while evaluating, used to pinpoint where a
/// value diverged from the expectation.
///
/// Lives in the result rather than the constraint so that constraints stay
/// immutable across evaluations.
#[derive(Debug, Clone, PartialEq)]
pub enum Mismatch {
    /// Two strings differ at the given char index.
    StringDiff { index: usize },
    /// Two sequences differ at the given item index.
    SequenceDiff { index: usize },
    /// The item at `index` is the first one that broke an item-wise check.
    Item { index: usize, value: ActualValue },
    /// Items that occur more than once, in order of first appearance.
    Duplicates { values: Vec<ActualValue> },
}

/// The verdict of applying one constraint to one value.
///
/// Borrows both the producing constraint and the actual value: the
/// constraint is read for its name and rendering hooks only, and the value
/// is kept as supplied for the failure message.
///
/// # Examples
///
/// ```
/// use assertforge_core::{ActualValue, ConstraintResult, ConstraintStatus, NullConstraint};
///
/// let constraint = NullConstraint;
/// let actual = ActualValue::from(3);
///
/// let result = ConstraintResult::new(&constraint, &actual);
/// assert_eq!(result.status(), ConstraintStatus::Unknown);
///
/// let result = ConstraintResult::from_bool(&constraint, &actual, false);
/// assert_eq!(result.status(), ConstraintStatus::Failure);
/// assert_eq!(result.description(), "null");
/// ```
#[derive(Clone)]
pub struct ConstraintResult<'a> {
    constraint: &'a dyn Constraint,
    actual: &'a ActualValue,
    status: ConstraintStatus,
    description: String,
    fault: Option<EvaluationFault>,
    mismatch: Option<Mismatch>,
}

impl<'a> ConstraintResult<'a> {
    /// Creates a result with `Unknown` status.
    pub fn new(constraint: &'a dyn Constraint, actual: &'a ActualValue) -> Self {
        Self {
            constraint,
            actual,
            status: ConstraintStatus::Unknown,
            description: constraint.description(),
            fault: None,
            mismatch: None,
        }
    }

    /// Creates a result with the given status.
    pub fn with_status(
        constraint: &'a dyn Constraint,
        actual: &'a ActualValue,
        status: ConstraintStatus,
    ) -> Self {
        let mut result = Self::new(constraint, actual);
        result.status = status;
        result
    }

    /// Creates a `Success` or `Failure` result.
    pub fn from_bool(constraint: &'a dyn Constraint, actual: &'a ActualValue, success: bool) -> Self {
        Self::with_status(constraint, actual, ConstraintStatus::from_bool(success))
    }

    /// Creates an `Error` result carrying `fault`.
    pub fn error(
        constraint: &'a dyn Constraint,
        actual: &'a ActualValue,
        fault: EvaluationFault,
    ) -> Self {
        Self::with_status(constraint, actual, ConstraintStatus::Error).with_fault(fault)
    }

    /// Attaches mismatch diagnostics.
    pub fn with_mismatch(mut self, mismatch: Mismatch) -> Self {
        self.mismatch = Some(mismatch);
        self
    }

    /// Attaches a fault.
    pub fn with_fault(mut self, fault: EvaluationFault) -> Self {
        self.fault = Some(fault);
        self
    }

    #[inline]
    pub fn status(&self) -> ConstraintStatus {
        self.status
    }

    /// Overrides the status, e.g. when a combinator folds a child verdict.
    pub fn set_status(&mut self, status: ConstraintStatus) {
        self.status = status;
    }

    /// True iff the status is `Success`.
    #[inline]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Display name of the producing constraint.
    pub fn name(&self) -> &'a str {
        self.constraint.display_name()
    }

    /// Description of the producing constraint, captured at creation.
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn actual_value(&self) -> &'a ActualValue {
        self.actual
    }

    pub fn constraint(&self) -> &'a dyn Constraint {
        self.constraint
    }

    pub fn fault(&self) -> Option<&EvaluationFault> {
        self.fault.as_ref()
    }

    pub fn mismatch(&self) -> Option<&Mismatch> {
        self.mismatch.as_ref()
    }

    /// Writes the failure message through the producing constraint's hook.
    pub fn write_message_to(&self, writer: &mut dyn MessageWriter) {
        self.constraint.write_message_to(self, writer);
    }

    /// Writes the actual value through the producing constraint's hook.
    pub fn write_actual_value_to(&self, writer: &mut dyn MessageWriter) {
        self.constraint.write_actual_value_to(self, writer);
    }

    /// Writes extra context lines through the producing constraint's hook.
    pub fn write_additional_lines_to(&self, writer: &mut dyn MessageWriter) {
        self.constraint.write_additional_lines_to(self, writer);
    }

    /// Renders the failure message with default limits.
    ///
    /// # Panics
    ///
    /// Panics if the result was never evaluated (`Unknown` status).
    pub fn render(&self) -> String {
        self.render_with(&RenderConfig::default())
    }

    /// Renders the failure message with the given limits.
    ///
    /// # Panics
    ///
    /// Panics if the result was never evaluated (`Unknown` status).
    pub fn render_with(&self, config: &RenderConfig) -> String {
        assert!(
            !self.status.is_unknown(),
            "cannot render result of {} before it is evaluated",
            self.name()
        );
        let mut writer = TextMessageWriter::with_config(config.clone());
        self.write_message_to(&mut writer);
        writer.into_string()
    }
}

impl fmt::Debug for ConstraintResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstraintResult")
            .field("constraint", &self.name())
            .field("description", &self.description)
            .field("status", &self.status)
            .field("actual", self.actual)
            .field("fault", &self.fault)
            .field("mismatch", &self.mismatch)
            .finish()
    }
}
