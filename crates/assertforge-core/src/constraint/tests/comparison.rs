use crate::constraint::{ComparisonConstraint, ComparisonOp, Constraint, RangeConstraint};
use crate::error::EvaluationFault;
use crate::status::ConstraintStatus;
use crate::value::{ActualValue, ValueKind};

#[test]
fn test_comparison_operators() {
    let five = ActualValue::from(5);

    assert!(ComparisonConstraint::greater_than(4).evaluate(&five).is_success());
    assert!(!ComparisonConstraint::greater_than(5).evaluate(&five).is_success());
    assert!(ComparisonConstraint::greater_than_or_equal(5).evaluate(&five).is_success());
    assert!(ComparisonConstraint::less_than(6).evaluate(&five).is_success());
    assert!(!ComparisonConstraint::less_than(5).evaluate(&five).is_success());
    assert!(ComparisonConstraint::less_than_or_equal(5).evaluate(&five).is_success());
}

#[test]
fn test_comparison_between_large_integers_and_floats() {
    let two_pow_53 = 9_007_199_254_740_992i64;
    let above = ActualValue::from(two_pow_53 + 1);
    let max = ActualValue::from(u64::MAX);

    assert!(ComparisonConstraint::greater_than(two_pow_53 as f64)
        .evaluate(&above)
        .is_success());
    assert!(ComparisonConstraint::less_than(u64::MAX as f64)
        .evaluate(&max)
        .is_success());
    assert!(!ComparisonConstraint::greater_than_or_equal(u64::MAX as f64)
        .evaluate(&max)
        .is_success());
}

#[test]
fn test_comparison_names_and_descriptions() {
    let constraint = ComparisonConstraint::new(ComparisonOp::LessThanOrEqual, 2.5);

    assert_eq!(constraint.op(), ComparisonOp::LessThanOrEqual);
    assert_eq!(constraint.display_name(), "LessThanOrEqual");
    assert_eq!(constraint.description(), "less than or equal to 2.5");
}

#[test]
fn test_comparison_strings() {
    let constraint = ComparisonConstraint::greater_than("apple");

    assert!(constraint.evaluate(&ActualValue::from("banana")).is_success());
    assert!(!constraint.evaluate(&ActualValue::from("aardvark")).is_success());
}

#[test]
fn test_comparison_against_null_is_error() {
    let constraint = ComparisonConstraint::greater_than(0);
    let actual = ActualValue::Null;

    let result = constraint.evaluate(&actual);
    assert_eq!(result.status(), ConstraintStatus::Error);
    assert_eq!(
        result.fault(),
        Some(&EvaluationFault::TypeMismatch {
            expected: "a value comparable with integer".to_string(),
            actual: ValueKind::Null,
        })
    );
    assert_eq!(
        result.render(),
        concat!(
            "  Expected: greater than 0\n",
            "  But was:  null\n",
            "  Error:    expected a value comparable with integer but got null\n",
        )
    );
}

#[test]
fn test_comparison_with_nan_is_error() {
    let constraint = ComparisonConstraint::less_than(1.0);
    let actual = ActualValue::from(f64::NAN);

    let result = constraint.evaluate(&actual);
    assert_eq!(result.status(), ConstraintStatus::Error);
    assert!(matches!(
        result.fault(),
        Some(EvaluationFault::Incomparable { .. })
    ));
}

#[test]
fn test_range_bounds_are_inclusive() {
    let constraint = RangeConstraint::new(1, 10);

    for value in [1, 5, 10] {
        assert!(
            constraint.evaluate(&ActualValue::from(value)).is_success(),
            "{} should be in range",
            value
        );
    }
    for value in [0, 11, -3] {
        assert_eq!(
            constraint.evaluate(&ActualValue::from(value)).status(),
            ConstraintStatus::Failure,
            "{} should be out of range",
            value
        );
    }
}

#[test]
fn test_range_with_mixed_numeric_kinds() {
    let constraint = RangeConstraint::new(0u8, 1.5);

    assert!(constraint.evaluate(&ActualValue::from(1.5f32)).is_success());
    assert!(constraint.evaluate(&ActualValue::from(1i64)).is_success());
    assert!(!constraint.evaluate(&ActualValue::from(-1i64)).is_success());
}

#[test]
fn test_range_failure_message() {
    let constraint = RangeConstraint::new(1, 10);
    let actual = ActualValue::from(12);

    assert_eq!(
        constraint.evaluate(&actual).render(),
        "  Expected: in range (1, 10)\n  But was:  12\n"
    );
}

#[test]
fn test_inverted_range_is_error() {
    let constraint = RangeConstraint::new(10, 1);
    let actual = ActualValue::from(5);

    let result = constraint.evaluate(&actual);
    assert_eq!(result.status(), ConstraintStatus::Error);
    assert_eq!(
        result.fault(),
        Some(&EvaluationFault::InvalidConstraint(
            "range lower bound 10 exceeds upper bound 1".to_string()
        ))
    );
}

#[test]
fn test_range_on_string_value_is_error() {
    let constraint = RangeConstraint::new(1, 10);
    let actual = ActualValue::from("5");

    let result = constraint.evaluate(&actual);
    assert_eq!(result.status(), ConstraintStatus::Error);
    assert!(result.render().contains("Error:    expected a value comparable with integer but got string"));
}
