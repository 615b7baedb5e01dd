//! Ordering and equality across value kinds.
//!
//! Numbers compare by numeric value regardless of representation: an `Int`,
//! a `UInt`, a `Float` and a `Decimal` holding the same quantity are equal.
//! Ordering is only defined between numbers, strings, chars and identifiers.

use std::cmp::Ordering;

use num_traits::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

use super::ActualValue;
use crate::error::{EvaluationFault, Result};

/// Modifiers applied by equality checks.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EqualityOptions {
    /// Maximum absolute difference between two numbers still considered equal.
    pub tolerance: Option<f64>,
    /// Compare strings and chars case-insensitively.
    pub ignore_case: bool,
}

impl EqualityOptions {
    pub fn exact() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Copy)]
enum Number {
    Int(i128),
    UInt(u128),
    Float(f64),
    Decimal(Decimal),
}

impl Number {
    fn of(value: &ActualValue) -> Option<Self> {
        match value {
            ActualValue::Int(v) => Some(Number::Int(*v)),
            ActualValue::UInt(v) => Some(Number::UInt(*v)),
            ActualValue::Float(v) => Some(Number::Float(*v)),
            ActualValue::Decimal(v) => Some(Number::Decimal(*v)),
            _ => None,
        }
    }

    fn to_f64(self) -> f64 {
        match self {
            Number::Int(v) => v as f64,
            Number::UInt(v) => v as f64,
            Number::Float(v) => v,
            Number::Decimal(v) => v.to_f64().unwrap_or(f64::NAN),
        }
    }

    fn to_decimal(self) -> Option<Decimal> {
        match self {
            Number::Int(v) => Decimal::from_i128(v),
            Number::UInt(v) => Decimal::from_u128(v),
            Number::Float(v) => Decimal::from_f64(v),
            Number::Decimal(v) => Some(v),
        }
    }

    /// The value as an `i128` when it is an integer that fits.
    fn as_integer(self) -> Option<i128> {
        match self {
            Number::Int(v) => Some(v),
            Number::UInt(v) => i128::try_from(v).ok(),
            _ => None,
        }
    }

    fn is_integer(self) -> bool {
        matches!(self, Number::Int(_) | Number::UInt(_))
    }

    fn is_negative(self) -> bool {
        match self {
            Number::Int(v) => v < 0,
            Number::UInt(_) => false,
            Number::Float(v) => v < 0.0,
            Number::Decimal(v) => v.is_sign_negative() && !v.is_zero(),
        }
    }

    fn is_nan(self) -> bool {
        matches!(self, Number::Float(v) if v.is_nan())
    }
}

/// Exact ordering of an integer against a float.
///
/// The integer is compared with the float's floor; an equal floor with a
/// non-zero fraction puts the float above the integer.
fn compare_integer_float(integer: Number, float: f64) -> Option<Ordering> {
    if float.is_nan() {
        return None;
    }
    if float.is_infinite() {
        return Some(if float > 0.0 { Ordering::Less } else { Ordering::Greater });
    }

    let floor = float.floor();
    let ordering = match integer {
        Number::Int(v) => match floor.to_i128() {
            Some(whole) => v.cmp(&whole),
            None if floor > 0.0 => Ordering::Less,
            None => Ordering::Greater,
        },
        Number::UInt(_) if floor < 0.0 => Ordering::Greater,
        Number::UInt(v) => match floor.to_u128() {
            Some(whole) => v.cmp(&whole),
            None => Ordering::Less,
        },
        _ => return None,
    };

    if ordering == Ordering::Equal && float != floor {
        Some(Ordering::Less)
    } else {
        Some(ordering)
    }
}

fn compare_numbers(left: Number, right: Number) -> Result<Ordering> {
    let ordering = match (left, right) {
        (Number::Int(a), Number::Int(b)) => Some(a.cmp(&b)),
        (Number::UInt(a), Number::UInt(b)) => Some(a.cmp(&b)),
        (Number::Int(a), Number::UInt(b)) => Some(if a < 0 {
            Ordering::Less
        } else {
            (a as u128).cmp(&b)
        }),
        (Number::UInt(a), Number::Int(b)) => Some(if b < 0 {
            Ordering::Greater
        } else {
            a.cmp(&(b as u128))
        }),
        (Number::Float(a), Number::Float(b)) => a.partial_cmp(&b),
        (Number::Int(_) | Number::UInt(_), Number::Float(b)) => compare_integer_float(left, b),
        (Number::Float(a), Number::Int(_) | Number::UInt(_)) => {
            compare_integer_float(right, a).map(Ordering::reverse)
        }
        _ => match (left.to_decimal(), right.to_decimal()) {
            (Some(a), Some(b)) => Some(a.cmp(&b)),
            // An integer outside the decimal range lies beyond every decimal.
            (None, Some(_)) if left.is_integer() => Some(if left.is_negative() {
                Ordering::Less
            } else {
                Ordering::Greater
            }),
            (Some(_), None) if right.is_integer() => Some(if right.is_negative() {
                Ordering::Greater
            } else {
                Ordering::Less
            }),
            _ => left.to_f64().partial_cmp(&right.to_f64()),
        },
    };
    ordering.ok_or_else(|| EvaluationFault::Incomparable {
        reason: "NaN has no ordering".to_string(),
    })
}

/// Absolute difference between two numbers.
///
/// Exact between integers and between an integer and a float; falls back to
/// `f64` only for magnitudes no tolerance could bridge.
fn distance(left: Number, right: Number) -> f64 {
    match (left, right) {
        (Number::UInt(a), Number::UInt(b)) => a.abs_diff(b) as f64,
        (Number::Float(float), other) | (other, Number::Float(float)) if other.is_integer() => {
            integer_float_distance(other, float)
        }
        _ => {
            if let (Some(a), Some(b)) = (left.as_integer(), right.as_integer()) {
                return a.checked_sub(b).map_or(f64::INFINITY, |d| d.unsigned_abs() as f64);
            }
            match (left.to_decimal(), right.to_decimal()) {
                (Some(a), Some(b)) => a
                    .checked_sub(b)
                    .and_then(|d| d.abs().to_f64())
                    .unwrap_or(f64::INFINITY),
                _ => (left.to_f64() - right.to_f64()).abs(),
            }
        }
    }
}

fn integer_float_distance(integer: Number, float: f64) -> f64 {
    if !float.is_finite() {
        return f64::INFINITY;
    }
    let floor = float.floor();
    let fraction = float - floor;
    match (integer.as_integer(), floor.to_i128()) {
        (Some(v), Some(whole)) => v
            .checked_sub(whole)
            .map_or(f64::INFINITY, |d| (d as f64 - fraction).abs()),
        _ => (integer.to_f64() - float).abs(),
    }
}

impl ActualValue {
    /// Orders `self` relative to `other`.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` when the kinds have no common ordering and
    /// `Incomparable` when a NaN is involved.
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use assertforge_core::ActualValue;
    ///
    /// let five = ActualValue::from(5);
    /// assert_eq!(five.compare(&ActualValue::from(7.5)).unwrap(), Ordering::Less);
    /// assert!(five.compare(&ActualValue::from("five")).is_err());
    /// ```
    pub fn compare(&self, other: &ActualValue) -> Result<Ordering> {
        if let (Some(left), Some(right)) = (Number::of(self), Number::of(other)) {
            return compare_numbers(left, right);
        }
        match (self, other) {
            (ActualValue::Str(a), ActualValue::Str(b)) => Ok(a.cmp(b)),
            (ActualValue::Char(a), ActualValue::Char(b)) => Ok(a.cmp(b)),
            (ActualValue::Id(a), ActualValue::Id(b)) => Ok(a.cmp(b)),
            _ => Err(EvaluationFault::type_mismatch(
                format!("a value comparable with {}", other.kind()),
                self,
            )),
        }
    }

    /// Structural equality with numeric cross-kind comparison.
    ///
    /// Unlike `PartialEq`, two NaN floats are equal here, and `options` may
    /// widen equality with a numeric tolerance or case folding.
    pub fn equals(&self, other: &ActualValue, options: &EqualityOptions) -> bool {
        if let (Some(left), Some(right)) = (Number::of(self), Number::of(other)) {
            return numbers_equal(left, right, options.tolerance);
        }
        match (self, other) {
            (ActualValue::Str(a), ActualValue::Str(b)) => {
                if options.ignore_case {
                    a.chars().count() == b.chars().count()
                        && a.chars().zip(b.chars()).all(|(x, y)| chars_equal(x, y, true))
                } else {
                    a == b
                }
            }
            (ActualValue::Char(a), ActualValue::Char(b)) => {
                chars_equal(*a, *b, options.ignore_case)
            }
            (ActualValue::Seq(a), ActualValue::Seq(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.equals(y, options))
            }
            _ => self == other,
        }
    }
}

fn numbers_equal(left: Number, right: Number, tolerance: Option<f64>) -> bool {
    if left.is_nan() || right.is_nan() {
        return left.is_nan() && right.is_nan();
    }
    match tolerance {
        _ if matches!(compare_numbers(left, right), Ok(Ordering::Equal)) => true,
        Some(tolerance) => distance(left, right) <= tolerance,
        None => false,
    }
}

pub(crate) fn chars_equal(a: char, b: char, ignore_case: bool) -> bool {
    if ignore_case {
        a.to_lowercase().eq(b.to_lowercase())
    } else {
        a == b
    }
}

/// Index of the first differing char, or the shorter length when one string
/// is a prefix of the other.
pub(crate) fn first_string_difference(expected: &str, actual: &str, ignore_case: bool) -> usize {
    expected
        .chars()
        .zip(actual.chars())
        .position(|(e, a)| !chars_equal(e, a, ignore_case))
        .unwrap_or_else(|| expected.chars().count().min(actual.chars().count()))
}

/// Index of the first differing item, or the shorter length.
pub(crate) fn first_sequence_difference(
    expected: &[ActualValue],
    actual: &[ActualValue],
    options: &EqualityOptions,
) -> usize {
    expected
        .iter()
        .zip(actual)
        .position(|(e, a)| !e.equals(a, options))
        .unwrap_or_else(|| expected.len().min(actual.len()))
}
