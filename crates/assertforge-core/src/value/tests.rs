use std::cmp::Ordering;
use std::str::FromStr;

use rust_decimal::Decimal;
use uuid::Uuid;

use super::compare::{first_sequence_difference, first_string_difference};
use super::*;
use crate::error::EvaluationFault;

#[derive(Debug)]
enum Shape {
    Circle,
}

#[derive(Debug)]
#[allow(dead_code)]
struct Point {
    x: i32,
    y: i32,
}

#[test]
fn test_integer_widths_share_kind() {
    assert_eq!(ActualValue::from(-3i8), ActualValue::Int(-3));
    assert_eq!(ActualValue::from(3u64), ActualValue::UInt(3));
    assert_eq!(ActualValue::from(3usize).kind(), ValueKind::Integer);
    assert_eq!(ActualValue::from(i128::MIN).kind(), ValueKind::Integer);
}

#[test]
fn test_option_and_collections() {
    assert!(ActualValue::from(None::<String>).is_null());
    assert_eq!(ActualValue::from(Some(2)), ActualValue::Int(2));

    let seq = ActualValue::from([1, 2, 3]);
    assert_eq!(seq.kind(), ValueKind::Sequence);
    assert_eq!(seq.len(), Some(3));

    let slice: &[u8] = &[1, 2];
    assert_eq!(ActualValue::from(slice).len(), Some(2));
    assert_eq!(ActualValue::from(Vec::<i32>::new()).is_empty(), Some(true));
    assert_eq!(ActualValue::from(7).is_empty(), None);
}

#[test]
fn test_string_length_counts_chars() {
    assert_eq!(ActualValue::from("héllo").len(), Some(5));
}

#[test]
fn test_variant_and_opaque_names() {
    let variant = ActualValue::variant_of(&Shape::Circle);
    assert_eq!(variant.type_name(), Some("Shape"));
    assert_eq!(variant.kind(), ValueKind::Enum);

    let opaque = ActualValue::opaque(&Point { x: 1, y: 2 });
    assert_eq!(opaque.type_name(), Some("Point"));
    match opaque {
        ActualValue::Opaque { debug, .. } => assert_eq!(debug, "Point { x: 1, y: 2 }"),
        other => panic!("expected opaque, got {:?}", other),
    }
}

#[test]
fn test_cross_kind_numeric_ordering() {
    let int = ActualValue::from(-1i32);
    let uint = ActualValue::from(1u32);
    let float = ActualValue::from(0.5f64);
    let decimal = ActualValue::from(Decimal::from_str("0.25").unwrap());

    assert_eq!(int.compare(&uint).unwrap(), Ordering::Less);
    assert_eq!(uint.compare(&int).unwrap(), Ordering::Greater);
    assert_eq!(float.compare(&uint).unwrap(), Ordering::Less);
    assert_eq!(decimal.compare(&float).unwrap(), Ordering::Less);
    assert_eq!(
        ActualValue::from(u128::MAX).compare(&ActualValue::from(i128::MAX)).unwrap(),
        Ordering::Greater
    );
}

#[test]
fn test_integer_float_ordering_is_exact_beyond_f64_precision() {
    let two_pow_53 = 9_007_199_254_740_992i64;
    let above = ActualValue::from(two_pow_53 + 1);
    let float = ActualValue::from(two_pow_53 as f64);

    assert_eq!(above.compare(&float).unwrap(), Ordering::Greater);
    assert_eq!(float.compare(&above).unwrap(), Ordering::Less);
    assert_eq!(
        ActualValue::from(two_pow_53).compare(&float).unwrap(),
        Ordering::Equal
    );
    assert_eq!(
        ActualValue::from(u64::MAX)
            .compare(&ActualValue::from(u64::MAX as f64))
            .unwrap(),
        Ordering::Less
    );
}

#[test]
fn test_integer_float_ordering_uses_fraction() {
    assert_eq!(
        ActualValue::from(3).compare(&ActualValue::from(3.25)).unwrap(),
        Ordering::Less
    );
    assert_eq!(
        ActualValue::from(-3).compare(&ActualValue::from(-3.25)).unwrap(),
        Ordering::Greater
    );
    assert_eq!(
        ActualValue::from(0u8).compare(&ActualValue::from(-0.5)).unwrap(),
        Ordering::Greater
    );
    assert_eq!(
        ActualValue::from(i128::MAX)
            .compare(&ActualValue::from(f64::INFINITY))
            .unwrap(),
        Ordering::Less
    );
    assert_eq!(
        ActualValue::from(i128::MIN)
            .compare(&ActualValue::from(-1e300))
            .unwrap(),
        Ordering::Greater
    );
}

#[test]
fn test_integer_beyond_decimal_range_orders_by_sign() {
    let decimal = ActualValue::from(Decimal::MAX);
    assert_eq!(
        ActualValue::from(u128::MAX).compare(&decimal).unwrap(),
        Ordering::Greater
    );
    assert_eq!(
        decimal.compare(&ActualValue::from(i128::MIN)).unwrap(),
        Ordering::Greater
    );
}

#[test]
fn test_nan_is_incomparable() {
    let nan = ActualValue::from(f64::NAN);
    let err = nan.compare(&ActualValue::from(1)).unwrap_err();
    assert!(matches!(err, EvaluationFault::Incomparable { .. }));
}

#[test]
fn test_compare_type_mismatch() {
    let err = ActualValue::Null.compare(&ActualValue::from(1)).unwrap_err();
    assert_eq!(
        err,
        EvaluationFault::TypeMismatch {
            expected: "a value comparable with integer".to_string(),
            actual: ValueKind::Null,
        }
    );
}

#[test]
fn test_compare_strings_chars_ids() {
    assert_eq!(
        ActualValue::from("apple").compare(&ActualValue::from("banana")).unwrap(),
        Ordering::Less
    );
    assert_eq!(
        ActualValue::from('z').compare(&ActualValue::from('a')).unwrap(),
        Ordering::Greater
    );
    let id = Uuid::nil();
    assert_eq!(
        ActualValue::from(id).compare(&ActualValue::from(id)).unwrap(),
        Ordering::Equal
    );
}

#[test]
fn test_equals_numeric_cross_kind() {
    let exact = EqualityOptions::exact();
    assert!(ActualValue::from(5).equals(&ActualValue::from(5.0), &exact));
    assert!(ActualValue::from(5u8).equals(&ActualValue::from(5i64), &exact));
    assert!(ActualValue::from(Decimal::from(5)).equals(&ActualValue::from(5), &exact));
    assert!(!ActualValue::from(5).equals(&ActualValue::from("5"), &exact));
}

#[test]
fn test_equals_nan() {
    let exact = EqualityOptions::exact();
    let nan = ActualValue::from(f64::NAN);
    assert!(nan.equals(&ActualValue::from(f64::NAN), &exact));
    assert!(!nan.equals(&ActualValue::from(1.0), &exact));
}

#[test]
fn test_equals_with_tolerance() {
    let options = EqualityOptions {
        tolerance: Some(0.5),
        ignore_case: false,
    };
    assert!(ActualValue::from(10).equals(&ActualValue::from(10.5), &options));
    assert!(!ActualValue::from(10).equals(&ActualValue::from(10.6), &options));
}

#[test]
fn test_equals_integer_and_float_beyond_f64_precision() {
    let exact = EqualityOptions::exact();
    let odd = ActualValue::from(9_007_199_254_740_993i64);
    let float = ActualValue::from(9_007_199_254_740_992.0f64);

    assert!(!odd.equals(&float, &exact));
    assert!(ActualValue::from(9_007_199_254_740_992i64).equals(&float, &exact));

    let half = EqualityOptions {
        tolerance: Some(0.5),
        ignore_case: false,
    };
    assert!(!odd.equals(&float, &half));
    let one = EqualityOptions {
        tolerance: Some(1.0),
        ignore_case: false,
    };
    assert!(odd.equals(&float, &one));
}

#[test]
fn test_equals_ignore_case() {
    let options = EqualityOptions {
        tolerance: None,
        ignore_case: true,
    };
    assert!(ActualValue::from("Hello").equals(&ActualValue::from("hELLO"), &options));
    assert!(ActualValue::from('A').equals(&ActualValue::from('a'), &options));
    assert!(!ActualValue::from("Hello").equals(&ActualValue::from("Help"), &options));
}

#[test]
fn test_equals_nested_sequences() {
    let exact = EqualityOptions::exact();
    let a = ActualValue::from(vec![vec![1, 2], vec![3]]);
    let b = ActualValue::from(vec![vec![1.0, 2.0], vec![3.0]]);
    let c = ActualValue::from(vec![vec![1, 2], vec![4]]);
    assert!(a.equals(&b, &exact));
    assert!(!a.equals(&c, &exact));
}

#[test]
fn test_first_string_difference() {
    assert_eq!(first_string_difference("hello", "help", false), 3);
    assert_eq!(first_string_difference("abc", "abcdef", false), 3);
    assert_eq!(first_string_difference("ABC", "abd", true), 2);
}

#[test]
fn test_first_sequence_difference() {
    let exact = EqualityOptions::exact();
    let expected = [ActualValue::from(1), ActualValue::from(2)];
    let actual = [ActualValue::from(1), ActualValue::from(3)];
    assert_eq!(first_sequence_difference(&expected, &actual, &exact), 1);
    assert_eq!(first_sequence_difference(&expected, &expected[..1], &exact), 1);
}
