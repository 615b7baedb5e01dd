//! AssertForge - Constraint-based assertions in Rust
//!
//! Build an expectation from constraints, apply it to a value, and get a
//! precise failure message when it does not hold.
//!
//! # Example
//!
//! ```rust
//! use assertforge::prelude::*;
//!
//! assert_that!(5, Is::in_range(1, 10) & !Is::equal_to(3));
//!
//! let err = check("hello", &Is::equal_to("help!")).unwrap_err();
//! assert!(err.message().contains("Strings differ at index 3."));
//! ```

// Value and verdict model
pub use assertforge_core::{
    ActualValue, ConstraintResult, ConstraintStatus, EvaluationFault, Mismatch, ValueKind,
};

// Constraints
pub use assertforge_core::{
    AllItemsConstraint, AndConstraint, BoolConstraint, ComparisonConstraint, ComparisonOp,
    Constraint, ConstraintExt, ContainsItemConstraint, EmptyConstraint, EqualConstraint,
    KindConstraint, LengthConstraint, NaNConstraint, NoItemConstraint, NotConstraint,
    NullConstraint, OrConstraint, OrderedConstraint, PredicateConstraint, RangeConstraint,
    RegexConstraint, SomeItemsConstraint, StringConstraint, StringMatch, UniqueItemsConstraint,
};

// Message rendering
pub use assertforge_core::{MessageWriter, TextMessageWriter};

// Configuration
pub use assertforge_config::{ConfigError, EngineConfig, LoggingConfig, RenderConfig};

#[cfg(feature = "console")]
pub use assertforge_console as console;

mod assert;
mod error;
mod macros;
mod syntax;

pub use assert::{assert_that, assert_that_with_context, check, Assert, DEFAULT_CONFIG_FILE};
pub use error::{AssertionError, Result};
pub use syntax::{Does, Has, Is};

pub mod prelude {
    pub use crate::assert_that;
    pub use super::{check, Assert, AssertionError};
    pub use super::{ActualValue, Constraint, ConstraintExt, ConstraintStatus, ValueKind};
    pub use super::{Does, Has, Is};
    pub use super::{EngineConfig, RenderConfig};
}
