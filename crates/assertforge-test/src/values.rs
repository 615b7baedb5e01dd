//! Fixed sample values.

use assertforge_core::ActualValue;
use rust_decimal::Decimal;
use uuid::Uuid;

/// A string of `len` chars cycling through the lowercase alphabet.
pub fn long_string(len: usize) -> String {
    (b'a'..=b'z').map(char::from).cycle().take(len).collect()
}

/// A sequence nested `depth` levels deep around a single `0`.
///
/// `nested_sequence(0)` is the bare integer.
pub fn nested_sequence(depth: usize) -> ActualValue {
    let mut value = ActualValue::from(0);
    for _ in 0..depth {
        value = ActualValue::Seq(vec![value]);
    }
    value
}

/// One value of every kind, plus awkward ones for rendering.
pub fn sample_values() -> Vec<ActualValue> {
    vec![
        ActualValue::Null,
        ActualValue::from(true),
        ActualValue::from(-7i8),
        ActualValue::from(u64::MAX),
        ActualValue::from(2.5f32),
        ActualValue::from(f64::NAN),
        ActualValue::from(f64::NEG_INFINITY),
        ActualValue::from(Decimal::new(1999, 2)),
        ActualValue::from('q'),
        ActualValue::from(""),
        ActualValue::from("line one\nline \"two\""),
        ActualValue::from(long_string(10_000)),
        ActualValue::from(Uuid::nil()),
        ActualValue::variant("Color", "Red"),
        ActualValue::opaque(&(1, "tuple")),
        ActualValue::from(Vec::<i32>::new()),
        ActualValue::from((0..5_000).collect::<Vec<i64>>()),
        nested_sequence(64),
    ]
}
