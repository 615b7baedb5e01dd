//! AssertForge Core - constraint evaluation and failure rendering
//!
//! This crate provides the fundamental abstractions for AssertForge:
//! - [`ActualValue`] for representing any value under test
//! - [`ConstraintStatus`] and [`ConstraintResult`] for verdicts
//! - The [`Constraint`] trait with leaf predicates and `Not`/`And`/`Or` combinators
//! - The [`MessageWriter`] trait and [`TextMessageWriter`] for failure text
//!
//! # Example
//!
//! ```
//! use assertforge_core::{ActualValue, Constraint, EqualConstraint};
//!
//! let constraint = EqualConstraint::new(5);
//! let actual = ActualValue::from(6);
//!
//! let result = constraint.evaluate(&actual);
//! assert!(!result.is_success());
//!
//! let message = result.render();
//! assert!(message.contains("Expected: 5"));
//! assert!(message.contains("But was:  6"));
//! ```

pub mod constraint;
pub mod error;
pub mod result;
pub mod status;
pub mod value;
pub mod writer;

#[cfg(test)]
mod test_utils;

pub use constraint::{
    evaluate, AllItemsConstraint, AndConstraint, BoolConstraint, ComparisonConstraint,
    ComparisonOp, Constraint, ConstraintExt, ContainsItemConstraint, EmptyConstraint,
    EqualConstraint, KindConstraint, LengthConstraint, NaNConstraint, NoItemConstraint,
    NotConstraint, NullConstraint, OrConstraint, OrderedConstraint, PredicateConstraint,
    RangeConstraint, RegexConstraint, SomeItemsConstraint, StringConstraint, StringMatch,
    UniqueItemsConstraint,
};
pub use error::EvaluationFault;
pub use result::{ConstraintResult, Mismatch};
pub use status::ConstraintStatus;
pub use value::{ActualValue, EqualityOptions, ValueKind};
pub use writer::{MessageWriter, TextMessageWriter};

pub use assertforge_config::RenderConfig;
