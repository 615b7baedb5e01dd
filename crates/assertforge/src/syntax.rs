//! Fluent constraint builders.
//!
//! `Is`, `Has` and `Does` name constraints the way they read in an
//! assertion:
//!
//! ```
//! use assertforge::prelude::*;
//!
//! assert_that(7, &(Is::positive() & !Is::equal_to(5)));
//! assert_that(vec![1, 2, 3], &Has::length(Is::equal_to(3)));
//! assert_that("constraint.rs", &Does::end_with(".rs"));
//! ```

use assertforge_core::{
    ActualValue, AllItemsConstraint, BoolConstraint, ComparisonConstraint, Constraint,
    ContainsItemConstraint, EmptyConstraint, EqualConstraint, KindConstraint, LengthConstraint,
    NaNConstraint, NoItemConstraint, NotConstraint, NullConstraint, OrderedConstraint,
    PredicateConstraint, RangeConstraint, RegexConstraint, SomeItemsConstraint,
    StringConstraint, UniqueItemsConstraint, ValueKind,
};

/// Constraints on the value itself.
pub struct Is;

impl Is {
    pub fn equal_to(expected: impl Into<ActualValue>) -> EqualConstraint {
        EqualConstraint::new(expected)
    }

    pub fn not_equal_to(expected: impl Into<ActualValue>) -> NotConstraint {
        NotConstraint::new(EqualConstraint::new(expected))
    }

    pub fn null() -> NullConstraint {
        NullConstraint
    }

    pub fn not_null() -> NotConstraint {
        NotConstraint::new(NullConstraint)
    }

    pub fn empty() -> EmptyConstraint {
        EmptyConstraint
    }

    pub fn not_empty() -> NotConstraint {
        NotConstraint::new(EmptyConstraint)
    }

    pub fn true_value() -> BoolConstraint {
        BoolConstraint::is_true()
    }

    pub fn false_value() -> BoolConstraint {
        BoolConstraint::is_false()
    }

    pub fn nan() -> NaNConstraint {
        NaNConstraint
    }

    pub fn greater_than(expected: impl Into<ActualValue>) -> ComparisonConstraint {
        ComparisonConstraint::greater_than(expected)
    }

    /// Greater than or equal to `expected`.
    pub fn at_least(expected: impl Into<ActualValue>) -> ComparisonConstraint {
        ComparisonConstraint::greater_than_or_equal(expected)
    }

    pub fn less_than(expected: impl Into<ActualValue>) -> ComparisonConstraint {
        ComparisonConstraint::less_than(expected)
    }

    /// Less than or equal to `expected`.
    pub fn at_most(expected: impl Into<ActualValue>) -> ComparisonConstraint {
        ComparisonConstraint::less_than_or_equal(expected)
    }

    /// Between `from` and `to`, both inclusive.
    pub fn in_range(from: impl Into<ActualValue>, to: impl Into<ActualValue>) -> RangeConstraint {
        RangeConstraint::new(from, to)
    }

    pub fn positive() -> ComparisonConstraint {
        ComparisonConstraint::greater_than(0)
    }

    pub fn negative() -> ComparisonConstraint {
        ComparisonConstraint::less_than(0)
    }

    pub fn zero() -> EqualConstraint {
        EqualConstraint::new(0)
    }

    pub fn of_kind(kind: ValueKind) -> KindConstraint {
        KindConstraint::of(kind)
    }

    /// Enum or opaque value whose type is named `name`.
    pub fn instance_of(name: impl Into<String>) -> KindConstraint {
        KindConstraint::named(name)
    }

    pub fn ordered() -> OrderedConstraint {
        OrderedConstraint::ascending()
    }

    pub fn ordered_descending() -> OrderedConstraint {
        OrderedConstraint::descending()
    }

    pub fn unique() -> UniqueItemsConstraint {
        UniqueItemsConstraint::new()
    }

    /// A constraint backed by `predicate`.
    pub fn matching<F>(description: impl Into<String>, predicate: F) -> PredicateConstraint
    where
        F: Fn(&ActualValue) -> bool + Send + Sync + 'static,
    {
        PredicateConstraint::new("Matches", description, predicate)
    }
}

/// Constraints on parts of the value: length and items.
pub struct Has;

impl Has {
    pub fn length<C: Constraint + 'static>(length: C) -> LengthConstraint {
        LengthConstraint::new(length)
    }

    pub fn item(expected: impl Into<ActualValue>) -> ContainsItemConstraint {
        ContainsItemConstraint::new(expected)
    }

    pub fn all<C: Constraint + 'static>(item: C) -> AllItemsConstraint {
        AllItemsConstraint::new(item)
    }

    pub fn some<C: Constraint + 'static>(item: C) -> SomeItemsConstraint {
        SomeItemsConstraint::new(item)
    }

    pub fn none<C: Constraint + 'static>(item: C) -> NoItemConstraint {
        NoItemConstraint::new(item)
    }
}

/// String constraints.
pub struct Does;

impl Does {
    pub fn contain(expected: impl Into<String>) -> StringConstraint {
        StringConstraint::contains(expected)
    }

    pub fn start_with(expected: impl Into<String>) -> StringConstraint {
        StringConstraint::starts_with(expected)
    }

    pub fn end_with(expected: impl Into<String>) -> StringConstraint {
        StringConstraint::ends_with(expected)
    }

    pub fn match_pattern(pattern: impl Into<String>) -> RegexConstraint {
        RegexConstraint::new(pattern)
    }
}
