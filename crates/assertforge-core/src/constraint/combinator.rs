//! Combinators: `Not`, `And`, `Or`.
//!
//! `And` and `Or` short-circuit and hand back the verdict of the single
//! child that decided the outcome, so the failure message describes the
//! clause that actually failed.

use tracing::trace;

use super::Constraint;
use crate::result::ConstraintResult;
use crate::value::ActualValue;

/// Inverts a child constraint.
///
/// `Success` and `Failure` swap; `Error` passes through unchanged because
/// negating a fault is meaningless.
#[derive(Debug)]
pub struct NotConstraint {
    child: Box<dyn Constraint>,
}

impl NotConstraint {
    pub fn new<C: Constraint + 'static>(child: C) -> Self {
        Self {
            child: Box::new(child),
        }
    }

    pub fn from_boxed(child: Box<dyn Constraint>) -> Self {
        Self { child }
    }

    pub fn child(&self) -> &dyn Constraint {
        self.child.as_ref()
    }
}

impl Constraint for NotConstraint {
    fn display_name(&self) -> &str {
        "Not"
    }

    fn description(&self) -> String {
        format!("not {}", self.child.description())
    }

    fn evaluate<'a>(&'a self, actual: &'a ActualValue) -> ConstraintResult<'a> {
        let inner = self.child.evaluate(actual);
        let mut result = ConstraintResult::new(self, actual);
        result.set_status(inner.status().negated());
        match inner.fault() {
            Some(fault) => result.with_fault(fault.clone()),
            None => result,
        }
    }
}

/// Both children must hold.
///
/// The right child is evaluated only when the left one succeeds. The
/// returned result is the left child's when it did not succeed, otherwise
/// the right child's.
#[derive(Debug)]
pub struct AndConstraint {
    left: Box<dyn Constraint>,
    right: Box<dyn Constraint>,
}

impl AndConstraint {
    pub fn new<L, R>(left: L, right: R) -> Self
    where
        L: Constraint + 'static,
        R: Constraint + 'static,
    {
        Self::from_boxed(Box::new(left), Box::new(right))
    }

    pub fn from_boxed(left: Box<dyn Constraint>, right: Box<dyn Constraint>) -> Self {
        Self { left, right }
    }
}

impl Constraint for AndConstraint {
    fn display_name(&self) -> &str {
        "And"
    }

    fn description(&self) -> String {
        format!("{} and {}", self.left.description(), self.right.description())
    }

    fn evaluate<'a>(&'a self, actual: &'a ActualValue) -> ConstraintResult<'a> {
        let left = self.left.evaluate(actual);
        if !left.is_success() {
            trace!(
                event = "short_circuit",
                combinator = "And",
                decided_by = left.name(),
                status = %left.status(),
            );
            return left;
        }
        self.right.evaluate(actual)
    }
}

/// At least one child must hold.
///
/// The right child is evaluated only when the left one does not succeed;
/// a left `Error` counts as not succeeding.
#[derive(Debug)]
pub struct OrConstraint {
    left: Box<dyn Constraint>,
    right: Box<dyn Constraint>,
}

impl OrConstraint {
    pub fn new<L, R>(left: L, right: R) -> Self
    where
        L: Constraint + 'static,
        R: Constraint + 'static,
    {
        Self::from_boxed(Box::new(left), Box::new(right))
    }

    pub fn from_boxed(left: Box<dyn Constraint>, right: Box<dyn Constraint>) -> Self {
        Self { left, right }
    }
}

impl Constraint for OrConstraint {
    fn display_name(&self) -> &str {
        "Or"
    }

    fn description(&self) -> String {
        format!("{} or {}", self.left.description(), self.right.description())
    }

    fn evaluate<'a>(&'a self, actual: &'a ActualValue) -> ConstraintResult<'a> {
        let left = self.left.evaluate(actual);
        if left.is_success() {
            trace!(
                event = "short_circuit",
                combinator = "Or",
                decided_by = left.name(),
                status = %left.status(),
            );
            return left;
        }
        self.right.evaluate(actual)
    }
}
