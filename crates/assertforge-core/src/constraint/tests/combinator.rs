use crate::constraint::{
    AndConstraint, ComparisonConstraint, Constraint, ConstraintExt, EqualConstraint,
    NotConstraint, NullConstraint, OrConstraint, RangeConstraint, StringConstraint,
};
use crate::status::ConstraintStatus;
use crate::test_utils::{calls, ProbeConstraint};
use crate::value::ActualValue;

#[test]
fn test_not_flips_success_and_failure() {
    let constraint = NotConstraint::new(EqualConstraint::new(5));

    assert_eq!(
        constraint.evaluate(&ActualValue::from(5)).status(),
        ConstraintStatus::Failure
    );
    assert_eq!(
        constraint.evaluate(&ActualValue::from(6)).status(),
        ConstraintStatus::Success
    );
    assert_eq!(constraint.description(), "not 5");
    assert_eq!(constraint.child().display_name(), "Equal");
}

#[test]
fn test_not_preserves_error() {
    let constraint = !StringConstraint::contains("x");
    let actual = ActualValue::from(3);

    let result = constraint.evaluate(&actual);
    assert_eq!(result.status(), ConstraintStatus::Error);
    assert!(result.fault().is_some());
    assert_eq!(result.name(), "Not");
}

#[test]
fn test_double_negation() {
    let constraint = NotConstraint::new(NotConstraint::new(NullConstraint));

    assert!(constraint.evaluate(&ActualValue::Null).is_success());
    assert_eq!(constraint.description(), "not not null");
}

#[test]
fn test_and_success_requires_both() {
    let constraint = ComparisonConstraint::greater_than(0) & ComparisonConstraint::less_than(10);

    assert!(constraint.evaluate(&ActualValue::from(5)).is_success());
    assert!(!constraint.evaluate(&ActualValue::from(0)).is_success());
    assert!(!constraint.evaluate(&ActualValue::from(10)).is_success());
    assert_eq!(constraint.description(), "greater than 0 and less than 10");
}

#[test]
fn test_and_reports_the_failing_clause() {
    let constraint = AndConstraint::new(RangeConstraint::new(1, 10), !EqualConstraint::new(5));
    let actual = ActualValue::from(5);

    let result = constraint.evaluate(&actual);
    assert_eq!(result.status(), ConstraintStatus::Failure);
    assert_eq!(result.name(), "Not");
    assert_eq!(result.description(), "not 5");
    assert_eq!(result.render(), "  Expected: not 5\n  But was:  5\n");
}

#[test]
fn test_and_reports_left_failure() {
    let constraint = RangeConstraint::new(1, 10) & !EqualConstraint::new(5);
    let actual = ActualValue::from(20);

    let result = constraint.evaluate(&actual);
    assert_eq!(result.name(), "Range");
    assert!(result.render().contains("Expected: in range (1, 10)"));
}

#[test]
fn test_and_short_circuits_on_failure() {
    let left = ProbeConstraint::failing("left");
    let right = ProbeConstraint::succeeding("right");
    let (left_calls, right_calls) = (left.counter(), right.counter());
    let constraint = left.and(right);

    let actual = ActualValue::Null;
    let result = constraint.evaluate(&actual);
    assert_eq!(result.status(), ConstraintStatus::Failure);
    assert_eq!(result.name(), "left");
    assert_eq!(calls(&left_calls), 1);
    assert_eq!(calls(&right_calls), 0);
}

#[test]
fn test_and_short_circuits_on_error() {
    let left = ProbeConstraint::erroring("left");
    let right = ProbeConstraint::succeeding("right");
    let right_calls = right.counter();
    let constraint = left.and(right);

    let actual = ActualValue::Null;
    let result = constraint.evaluate(&actual);
    assert_eq!(result.status(), ConstraintStatus::Error);
    assert_eq!(calls(&right_calls), 0);
}

#[test]
fn test_and_returns_right_result_when_left_succeeds() {
    let left = ProbeConstraint::succeeding("left");
    let right = ProbeConstraint::failing("right");
    let (left_calls, right_calls) = (left.counter(), right.counter());
    let constraint = left.and(right);

    let actual = ActualValue::Null;
    let result = constraint.evaluate(&actual);
    assert_eq!(result.name(), "right");
    assert_eq!(result.description(), "probe right");
    assert_eq!(calls(&left_calls), 1);
    assert_eq!(calls(&right_calls), 1);
}

#[test]
fn test_or_evaluates_both_when_first_fails() {
    let first = EqualConstraint::new(1);
    let second = EqualConstraint::new(2);
    let constraint = OrConstraint::new(first, second);

    let actual = ActualValue::from(2);
    let result = constraint.evaluate(&actual);
    assert_eq!(result.status(), ConstraintStatus::Success);
    assert_eq!(result.description(), "2");
}

#[test]
fn test_or_probes_each_operand_once() {
    let first = ProbeConstraint::failing("first");
    let second = ProbeConstraint::succeeding("second");
    let (first_calls, second_calls) = (first.counter(), second.counter());
    let constraint = first.or(second);

    let actual = ActualValue::from(2);
    assert!(constraint.evaluate(&actual).is_success());
    assert_eq!(calls(&first_calls), 1);
    assert_eq!(calls(&second_calls), 1);
}

#[test]
fn test_or_short_circuits_on_success() {
    let first = ProbeConstraint::succeeding("first");
    let second = ProbeConstraint::failing("second");
    let second_calls = second.counter();
    let constraint = first.or(second);

    let actual = ActualValue::Null;
    let result = constraint.evaluate(&actual);
    assert_eq!(result.name(), "first");
    assert_eq!(calls(&second_calls), 0);
}

#[test]
fn test_or_treats_left_error_as_non_success() {
    let first = ProbeConstraint::erroring("first");
    let second = ProbeConstraint::succeeding("second");
    let second_calls = second.counter();
    let constraint = first.or(second);

    let actual = ActualValue::Null;
    let result = constraint.evaluate(&actual);
    assert!(result.is_success());
    assert_eq!(result.name(), "second");
    assert_eq!(calls(&second_calls), 1);
}

#[test]
fn test_or_returns_right_failure() {
    let constraint = EqualConstraint::new(1) | EqualConstraint::new(2);
    let actual = ActualValue::from(3);

    let result = constraint.evaluate(&actual);
    assert_eq!(result.status(), ConstraintStatus::Failure);
    assert_eq!(result.render(), "  Expected: 2\n  But was:  3\n");
}

#[test]
fn test_not_agrees_with_child_for_two_valued_outcomes() {
    let children: Vec<Box<dyn Constraint>> = vec![
        EqualConstraint::new(3).boxed(),
        RangeConstraint::new(0, 5).boxed(),
        NullConstraint.boxed(),
        ComparisonConstraint::less_than(2.5).boxed(),
    ];
    let values = [
        ActualValue::from(3),
        ActualValue::from(7),
        ActualValue::Null,
        ActualValue::from(-1.0),
    ];

    for child in children {
        let negated = NotConstraint::from_boxed(child);
        for value in &values {
            let child_result = negated.child().evaluate(value);
            if child_result.status().is_error() {
                continue;
            }
            assert_eq!(
                negated.evaluate(value).is_success(),
                !child_result.is_success(),
                "{} on {:?}",
                negated.description(),
                value
            );
        }
    }
}

#[test]
fn test_boxed_constraints_compose() {
    let boxed = EqualConstraint::new("a").boxed();
    let constraint = boxed.or(EqualConstraint::new("b"));

    assert!(constraint.evaluate(&ActualValue::from("b")).is_success());
    assert_eq!(constraint.description(), "\"a\" or \"b\"");
}
