//! Tests for the result model.

use super::*;
use crate::constraint::{EqualConstraint, NullConstraint};
use crate::test_utils::ProbeConstraint;

#[test]
fn test_new_result_is_unknown() {
    let constraint = NullConstraint;
    let actual = ActualValue::from("x");

    let result = ConstraintResult::new(&constraint, &actual);
    assert_eq!(result.status(), ConstraintStatus::Unknown);
    assert!(!result.is_success());
    assert!(result.fault().is_none());
    assert!(result.mismatch().is_none());
}

#[test]
fn test_status_constructors() {
    let constraint = NullConstraint;
    let actual = ActualValue::Null;

    let success = ConstraintResult::from_bool(&constraint, &actual, true);
    let failure = ConstraintResult::from_bool(&constraint, &actual, false);
    let error = ConstraintResult::with_status(&constraint, &actual, ConstraintStatus::Error);

    assert!(success.is_success());
    assert_eq!(failure.status(), ConstraintStatus::Failure);
    assert_eq!(error.status(), ConstraintStatus::Error);
    assert!(!error.is_success());
}

#[test]
fn test_result_exposes_constraint_identity() {
    let constraint = EqualConstraint::new(42);
    let actual = ActualValue::from(41);

    let result = ConstraintResult::from_bool(&constraint, &actual, false);
    assert_eq!(result.name(), "Equal");
    assert_eq!(result.description(), "42");
    assert_eq!(result.constraint().display_name(), "Equal");
}

#[test]
fn test_actual_value_is_the_supplied_reference() {
    let constraint = NullConstraint;
    let actual = ActualValue::from(vec![1, 2, 3]);

    let result = ConstraintResult::new(&constraint, &actual);
    assert!(std::ptr::eq(result.actual_value(), &actual));
}

#[test]
fn test_set_status_overrides() {
    let constraint = NullConstraint;
    let actual = ActualValue::Null;

    let mut result = ConstraintResult::new(&constraint, &actual);
    result.set_status(ConstraintStatus::Success);
    assert!(result.is_success());
}

#[test]
fn test_error_carries_fault() {
    let constraint = NullConstraint;
    let actual = ActualValue::Null;
    let fault = EvaluationFault::Custom("broken".to_string());

    let result = ConstraintResult::error(&constraint, &actual, fault.clone());
    assert_eq!(result.status(), ConstraintStatus::Error);
    assert_eq!(result.fault(), Some(&fault));
    assert!(result.render().contains("  Error:    broken\n"));
}

#[test]
fn test_render_default_message() {
    let constraint = ProbeConstraint::failing("probe");
    let actual = ActualValue::from(7);

    let result = constraint.evaluate(&actual);
    assert_eq!(result.render(), "  Expected: probe probe\n  But was:  7\n");
}

#[test]
fn test_render_with_config_applies_limits() {
    let constraint = EqualConstraint::new(0);
    let actual = ActualValue::from((1..=20).collect::<Vec<i32>>());
    let config = RenderConfig::default().with_max_sequence_items(3);

    let message = constraint.evaluate(&actual).render_with(&config);
    assert!(message.contains("But was:  [1, 2, 3, ...] (20 items)"));
}

#[test]
#[should_panic(expected = "before it is evaluated")]
fn test_render_unknown_panics() {
    let constraint = NullConstraint;
    let actual = ActualValue::Null;

    ConstraintResult::new(&constraint, &actual).render();
}

#[test]
fn test_debug_names_constraint() {
    let constraint = NullConstraint;
    let actual = ActualValue::from(true);

    let result = ConstraintResult::from_bool(&constraint, &actual, false);
    let debug = format!("{:?}", result);
    assert!(debug.contains("constraint: \"Null\""));
    assert!(debug.contains("status: Failure"));
}
