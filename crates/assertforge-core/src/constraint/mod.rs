//! Constraints: declarative expectations over an [`ActualValue`].
//!
//! Leaf constraints apply one predicate. Combinators (`Not`, `And`, `Or`)
//! own child constraints and fold their verdicts. Every built-in constraint
//! supports the `!`, `&` and `|` operators:
//!
//! ```
//! use assertforge_core::{ActualValue, Constraint, EqualConstraint, RangeConstraint};
//!
//! let constraint = RangeConstraint::new(1, 10) & !EqualConstraint::new(5);
//! assert!(constraint.evaluate(&ActualValue::from(4)).is_success());
//! assert!(!constraint.evaluate(&ActualValue::from(5)).is_success());
//! ```

mod collection;
mod combinator;
mod comparison;
mod equal;
mod kind;
mod predicate;
mod state;
mod string;

#[cfg(test)]
mod tests;

use std::fmt::Debug;

use tracing::trace;

use crate::result::ConstraintResult;
use crate::value::ActualValue;
use crate::writer::MessageWriter;

pub use collection::{
    AllItemsConstraint, ContainsItemConstraint, LengthConstraint, NoItemConstraint,
    OrderedConstraint, SomeItemsConstraint, UniqueItemsConstraint,
};
pub use combinator::{AndConstraint, NotConstraint, OrConstraint};
pub use comparison::{ComparisonConstraint, ComparisonOp, RangeConstraint};
pub use equal::EqualConstraint;
pub use kind::KindConstraint;
pub use predicate::PredicateConstraint;
pub use state::{BoolConstraint, EmptyConstraint, NaNConstraint, NullConstraint};
pub use string::{RegexConstraint, StringConstraint, StringMatch};

/// A testable expectation and the algorithm that checks it.
///
/// `evaluate` never panics and never returns a result with `Unknown`
/// status. Faults are reported as `Error` results.
///
/// The three `write_*` hooks control how a failed result renders. Their
/// defaults produce the standard expected/but-was block; constraints that
/// can pinpoint a divergence override them.
pub trait Constraint: Debug + Send + Sync {
    /// Stable identifier used in reports.
    fn display_name(&self) -> &str;

    /// Human-readable statement of what is expected.
    fn description(&self) -> String;

    /// Applies the constraint to `actual`.
    fn evaluate<'a>(&'a self, actual: &'a ActualValue) -> ConstraintResult<'a>;

    /// Writes the whole failure message.
    fn write_message_to(&self, result: &ConstraintResult<'_>, writer: &mut dyn MessageWriter) {
        writer.display_differences(result);
    }

    /// Writes the actual value on the "But was" line.
    fn write_actual_value_to(&self, result: &ConstraintResult<'_>, writer: &mut dyn MessageWriter) {
        writer.write_actual_value(result.actual_value());
    }

    /// Writes extra lines after the primary message.
    fn write_additional_lines_to(
        &self,
        _result: &ConstraintResult<'_>,
        _writer: &mut dyn MessageWriter,
    ) {
    }
}

impl<C: Constraint + ?Sized> Constraint for Box<C> {
    fn display_name(&self) -> &str {
        (**self).display_name()
    }

    fn description(&self) -> String {
        (**self).description()
    }

    fn evaluate<'a>(&'a self, actual: &'a ActualValue) -> ConstraintResult<'a> {
        (**self).evaluate(actual)
    }

    fn write_message_to(&self, result: &ConstraintResult<'_>, writer: &mut dyn MessageWriter) {
        (**self).write_message_to(result, writer)
    }

    fn write_actual_value_to(&self, result: &ConstraintResult<'_>, writer: &mut dyn MessageWriter) {
        (**self).write_actual_value_to(result, writer)
    }

    fn write_additional_lines_to(
        &self,
        result: &ConstraintResult<'_>,
        writer: &mut dyn MessageWriter,
    ) {
        (**self).write_additional_lines_to(result, writer)
    }
}

/// Evaluates `constraint` against `actual` and traces the verdict.
///
/// Entry point for drivers; combinators call their children's `evaluate`
/// directly.
pub fn evaluate<'a, C>(constraint: &'a C, actual: &'a ActualValue) -> ConstraintResult<'a>
where
    C: Constraint + ?Sized,
{
    let result = constraint.evaluate(actual);
    trace!(
        event = "evaluate",
        constraint = result.name(),
        description = result.description(),
        status = %result.status(),
    );
    result
}

/// Fluent combinator methods for every constraint.
pub trait ConstraintExt: Constraint + Sized + 'static {
    /// Both `self` and `other` must hold; `other` is skipped when `self` fails.
    fn and<R: Constraint + 'static>(self, other: R) -> AndConstraint {
        AndConstraint::new(self, other)
    }

    /// Either must hold; `other` is skipped when `self` succeeds.
    fn or<R: Constraint + 'static>(self, other: R) -> OrConstraint {
        OrConstraint::new(self, other)
    }

    /// Inverts the constraint.
    fn negate(self) -> NotConstraint {
        NotConstraint::new(self)
    }

    fn boxed(self) -> Box<dyn Constraint> {
        Box::new(self)
    }
}

impl<C: Constraint + 'static> ConstraintExt for C {}

/// Generates `!`, `&` and `|` operators for constraint types.
///
/// # Usage
/// ```ignore
/// impl_constraint_ops!(EqualConstraint, RangeConstraint);
/// ```
macro_rules! impl_constraint_ops {
    ($($type:ty),+ $(,)?) => {
        $(
            impl std::ops::Not for $type {
                type Output = NotConstraint;

                fn not(self) -> NotConstraint {
                    NotConstraint::new(self)
                }
            }

            impl<R: Constraint + 'static> std::ops::BitAnd<R> for $type {
                type Output = AndConstraint;

                fn bitand(self, rhs: R) -> AndConstraint {
                    AndConstraint::new(self, rhs)
                }
            }

            impl<R: Constraint + 'static> std::ops::BitOr<R> for $type {
                type Output = OrConstraint;

                fn bitor(self, rhs: R) -> OrConstraint {
                    OrConstraint::new(self, rhs)
                }
            }
        )+
    };
}

impl_constraint_ops!(
    AllItemsConstraint,
    AndConstraint,
    BoolConstraint,
    ComparisonConstraint,
    ContainsItemConstraint,
    EmptyConstraint,
    EqualConstraint,
    KindConstraint,
    LengthConstraint,
    NaNConstraint,
    NoItemConstraint,
    NotConstraint,
    NullConstraint,
    OrConstraint,
    OrderedConstraint,
    PredicateConstraint,
    RangeConstraint,
    RegexConstraint,
    SomeItemsConstraint,
    StringConstraint,
    UniqueItemsConstraint,
);
