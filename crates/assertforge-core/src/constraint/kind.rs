//! Type checks.

use super::Constraint;
use crate::result::ConstraintResult;
use crate::value::{ActualValue, ValueKind};
use crate::writer::MessageWriter;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Expectation {
    Kind(ValueKind),
    Named(String),
}

/// Succeeds when the value is of a given kind, or for enum and opaque
/// values, of a given type name.
///
/// The failure message shows the actual value together with its kind or
/// type name.
///
/// ```
/// use assertforge_core::{ActualValue, Constraint, KindConstraint, ValueKind};
///
/// let constraint = KindConstraint::of(ValueKind::String);
/// let actual = ActualValue::from(42);
/// let result = constraint.evaluate(&actual);
///
/// assert!(!result.is_success());
/// assert!(result.render().contains("But was:  42 (integer)"));
/// ```
#[derive(Debug, Clone)]
pub struct KindConstraint {
    expected: Expectation,
}

impl KindConstraint {
    pub fn of(kind: ValueKind) -> Self {
        Self {
            expected: Expectation::Kind(kind),
        }
    }

    /// Matches enum and opaque values whose type name equals `name`.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            expected: Expectation::Named(name.into()),
        }
    }
}

impl Constraint for KindConstraint {
    fn display_name(&self) -> &str {
        "Kind"
    }

    fn description(&self) -> String {
        match &self.expected {
            Expectation::Kind(kind) => format!("<{}>", kind),
            Expectation::Named(name) => format!("<{}>", name),
        }
    }

    fn evaluate<'a>(&'a self, actual: &'a ActualValue) -> ConstraintResult<'a> {
        let matches = match &self.expected {
            Expectation::Kind(kind) => actual.kind() == *kind,
            Expectation::Named(name) => actual.type_name() == Some(name.as_str()),
        };
        ConstraintResult::from_bool(self, actual, matches)
    }

    fn write_actual_value_to(&self, result: &ConstraintResult<'_>, writer: &mut dyn MessageWriter) {
        let actual = result.actual_value();
        writer.write_actual_value(actual);
        let label = match actual.type_name() {
            Some(name) => name.to_string(),
            None => actual.kind().to_string(),
        };
        writer.write_text(&format!(" ({})", label));
    }
}
