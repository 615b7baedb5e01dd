//! Ordering constraints: `>`, `>=`, `<`, `<=` and inclusive ranges.
//!
//! Ordering is defined between numbers of any representation, between
//! strings, between chars and between identifiers. Anything else, null
//! included, yields an `Error` result with a type mismatch fault.

use std::cmp::Ordering;
use std::fmt;

use assertforge_config::RenderConfig;

use super::Constraint;
use crate::error::EvaluationFault;
use crate::result::ConstraintResult;
use crate::value::ActualValue;
use crate::writer::format_value;

/// Relation checked by a [`ComparisonConstraint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOp {
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
}

impl ComparisonOp {
    /// Whether `actual` relates to `expected` as `ordering` (actual vs expected)
    /// satisfies this operator.
    pub fn accepts(&self, ordering: Ordering) -> bool {
        match self {
            ComparisonOp::GreaterThan => ordering == Ordering::Greater,
            ComparisonOp::GreaterThanOrEqual => ordering != Ordering::Less,
            ComparisonOp::LessThan => ordering == Ordering::Less,
            ComparisonOp::LessThanOrEqual => ordering != Ordering::Greater,
        }
    }
}

impl fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComparisonOp::GreaterThan => write!(f, "greater than"),
            ComparisonOp::GreaterThanOrEqual => write!(f, "greater than or equal to"),
            ComparisonOp::LessThan => write!(f, "less than"),
            ComparisonOp::LessThanOrEqual => write!(f, "less than or equal to"),
        }
    }
}

/// Compares the actual value against a fixed bound.
///
/// ```
/// use assertforge_core::{ActualValue, ComparisonConstraint, Constraint};
///
/// let constraint = ComparisonConstraint::greater_than(3);
/// assert!(constraint.evaluate(&ActualValue::from(3.5)).is_success());
/// assert_eq!(constraint.description(), "greater than 3");
/// ```
#[derive(Debug, Clone)]
pub struct ComparisonConstraint {
    op: ComparisonOp,
    expected: ActualValue,
}

impl ComparisonConstraint {
    pub fn new(op: ComparisonOp, expected: impl Into<ActualValue>) -> Self {
        Self {
            op,
            expected: expected.into(),
        }
    }

    pub fn greater_than(expected: impl Into<ActualValue>) -> Self {
        Self::new(ComparisonOp::GreaterThan, expected)
    }

    pub fn greater_than_or_equal(expected: impl Into<ActualValue>) -> Self {
        Self::new(ComparisonOp::GreaterThanOrEqual, expected)
    }

    pub fn less_than(expected: impl Into<ActualValue>) -> Self {
        Self::new(ComparisonOp::LessThan, expected)
    }

    pub fn less_than_or_equal(expected: impl Into<ActualValue>) -> Self {
        Self::new(ComparisonOp::LessThanOrEqual, expected)
    }

    pub fn op(&self) -> ComparisonOp {
        self.op
    }
}

impl Constraint for ComparisonConstraint {
    fn display_name(&self) -> &str {
        match self.op {
            ComparisonOp::GreaterThan => "GreaterThan",
            ComparisonOp::GreaterThanOrEqual => "GreaterThanOrEqual",
            ComparisonOp::LessThan => "LessThan",
            ComparisonOp::LessThanOrEqual => "LessThanOrEqual",
        }
    }

    fn description(&self) -> String {
        format!(
            "{} {}",
            self.op,
            format_value(&self.expected, &RenderConfig::default())
        )
    }

    fn evaluate<'a>(&'a self, actual: &'a ActualValue) -> ConstraintResult<'a> {
        match actual.compare(&self.expected) {
            Ok(ordering) => ConstraintResult::from_bool(self, actual, self.op.accepts(ordering)),
            Err(fault) => ConstraintResult::error(self, actual, fault),
        }
    }
}

/// Succeeds when `from <= actual <= to`; both bounds are inclusive.
///
/// A range whose lower bound exceeds its upper bound is inconsistent and
/// every evaluation reports an `Error`.
///
/// ```
/// use assertforge_core::{ActualValue, Constraint, RangeConstraint};
///
/// let constraint = RangeConstraint::new(1, 10);
/// assert!(constraint.evaluate(&ActualValue::from(1)).is_success());
/// assert!(constraint.evaluate(&ActualValue::from(10)).is_success());
/// assert!(!constraint.evaluate(&ActualValue::from(11)).is_success());
/// assert_eq!(constraint.description(), "in range (1, 10)");
/// ```
#[derive(Debug, Clone)]
pub struct RangeConstraint {
    from: ActualValue,
    to: ActualValue,
}

impl RangeConstraint {
    pub fn new(from: impl Into<ActualValue>, to: impl Into<ActualValue>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn lower(&self) -> &ActualValue {
        &self.from
    }

    pub fn upper(&self) -> &ActualValue {
        &self.to
    }

    fn check(&self, actual: &ActualValue) -> Result<bool, EvaluationFault> {
        if self.from.compare(&self.to)? == Ordering::Greater {
            return Err(EvaluationFault::InvalidConstraint(format!(
                "range lower bound {} exceeds upper bound {}",
                format_value(&self.from, &RenderConfig::default()),
                format_value(&self.to, &RenderConfig::default()),
            )));
        }
        let above_lower = actual.compare(&self.from)? != Ordering::Less;
        let below_upper = actual.compare(&self.to)? != Ordering::Greater;
        Ok(above_lower && below_upper)
    }
}

impl Constraint for RangeConstraint {
    fn display_name(&self) -> &str {
        "Range"
    }

    fn description(&self) -> String {
        let config = RenderConfig::default();
        format!(
            "in range ({}, {})",
            format_value(&self.from, &config),
            format_value(&self.to, &config)
        )
    }

    fn evaluate<'a>(&'a self, actual: &'a ActualValue) -> ConstraintResult<'a> {
        match self.check(actual) {
            Ok(in_range) => ConstraintResult::from_bool(self, actual, in_range),
            Err(fault) => ConstraintResult::error(self, actual, fault),
        }
    }
}
