//! Closure-backed constraints.

use std::fmt;

use super::Constraint;
use crate::error::EvaluationFault;
use crate::result::ConstraintResult;
use crate::value::ActualValue;

type PredicateFn = dyn Fn(&ActualValue) -> Result<bool, EvaluationFault> + Send + Sync;

/// A constraint whose predicate is an arbitrary closure.
///
/// Use [`PredicateConstraint::new`] for total predicates and
/// [`PredicateConstraint::try_new`] when the predicate may be undefined for
/// some values; an `Err` becomes an `Error` result.
///
/// ```
/// use assertforge_core::{ActualValue, Constraint, PredicateConstraint};
///
/// let even = PredicateConstraint::new("Even", "an even number", |value| {
///     matches!(value, ActualValue::Int(n) if n % 2 == 0)
/// });
///
/// assert!(even.evaluate(&ActualValue::from(4)).is_success());
/// assert!(!even.evaluate(&ActualValue::from(3)).is_success());
/// assert_eq!(even.description(), "an even number");
/// ```
pub struct PredicateConstraint {
    name: String,
    description: String,
    predicate: Box<PredicateFn>,
}

impl PredicateConstraint {
    pub fn new<F>(name: impl Into<String>, description: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&ActualValue) -> bool + Send + Sync + 'static,
    {
        Self::try_new(name, description, move |value| Ok(predicate(value)))
    }

    pub fn try_new<F>(name: impl Into<String>, description: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&ActualValue) -> Result<bool, EvaluationFault> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            description: description.into(),
            predicate: Box::new(predicate),
        }
    }
}

impl fmt::Debug for PredicateConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateConstraint")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

impl Constraint for PredicateConstraint {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> String {
        self.description.clone()
    }

    fn evaluate<'a>(&'a self, actual: &'a ActualValue) -> ConstraintResult<'a> {
        match (self.predicate)(actual) {
            Ok(matched) => ConstraintResult::from_bool(self, actual, matched),
            Err(fault) => ConstraintResult::error(self, actual, fault),
        }
    }
}
