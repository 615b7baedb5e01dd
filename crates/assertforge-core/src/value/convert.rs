//! Conversions from Rust values into [`ActualValue`].

use rust_decimal::Decimal;
use uuid::Uuid;

use super::ActualValue;

/// Generates `From` impls that widen a primitive into one variant.
///
/// # Usage
/// ```ignore
/// impl_from_primitive!(Int: i8 i16 i32);
/// ```
macro_rules! impl_from_primitive {
    ($variant:ident as $target:ty: $($source:ty)+) => {
        $(
            impl From<$source> for ActualValue {
                #[inline]
                fn from(value: $source) -> Self {
                    ActualValue::$variant(value as $target)
                }
            }
        )+
    };
}

impl_from_primitive!(Int as i128: i8 i16 i32 i64 i128 isize);
impl_from_primitive!(UInt as u128: u8 u16 u32 u64 u128 usize);
impl_from_primitive!(Float as f64: f32 f64);

impl From<bool> for ActualValue {
    fn from(value: bool) -> Self {
        ActualValue::Bool(value)
    }
}

impl From<char> for ActualValue {
    fn from(value: char) -> Self {
        ActualValue::Char(value)
    }
}

impl From<&str> for ActualValue {
    fn from(value: &str) -> Self {
        ActualValue::Str(value.to_string())
    }
}

impl From<String> for ActualValue {
    fn from(value: String) -> Self {
        ActualValue::Str(value)
    }
}

impl From<&String> for ActualValue {
    fn from(value: &String) -> Self {
        ActualValue::Str(value.clone())
    }
}

impl From<Decimal> for ActualValue {
    fn from(value: Decimal) -> Self {
        ActualValue::Decimal(value)
    }
}

impl From<Uuid> for ActualValue {
    fn from(value: Uuid) -> Self {
        ActualValue::Id(value)
    }
}

impl<T: Into<ActualValue>> From<Option<T>> for ActualValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ActualValue::Null, Into::into)
    }
}

impl<T: Into<ActualValue>> From<Vec<T>> for ActualValue {
    fn from(values: Vec<T>) -> Self {
        ActualValue::Seq(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<ActualValue>> From<&[T]> for ActualValue {
    fn from(values: &[T]) -> Self {
        ActualValue::Seq(values.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<ActualValue>, const N: usize> From<[T; N]> for ActualValue {
    fn from(values: [T; N]) -> Self {
        ActualValue::Seq(values.into_iter().map(Into::into).collect())
    }
}

impl From<&ActualValue> for ActualValue {
    fn from(value: &ActualValue) -> Self {
        value.clone()
    }
}

impl FromIterator<ActualValue> for ActualValue {
    fn from_iter<I: IntoIterator<Item = ActualValue>>(iter: I) -> Self {
        ActualValue::Seq(iter.into_iter().collect())
    }
}
