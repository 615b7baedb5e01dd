//! The value under test.
//!
//! Constraints inspect values through [`ActualValue`], a closed owned
//! representation of anything a test can hand to the engine: nulls, every
//! integer width, floats, decimals, text, identifiers, enum variants and
//! sequences. Anything else is wrapped as an opaque debug rendering.

pub(crate) mod compare;
mod convert;

#[cfg(test)]
mod tests;

use std::fmt::{self, Debug};

use rust_decimal::Decimal;
use uuid::Uuid;

pub use compare::EqualityOptions;

/// A value handed to a constraint for evaluation.
///
/// # Examples
///
/// ```
/// use assertforge_core::{ActualValue, ValueKind};
///
/// assert_eq!(ActualValue::from(5u8).kind(), ValueKind::Integer);
/// assert_eq!(ActualValue::from("abc").kind(), ValueKind::String);
/// assert_eq!(ActualValue::from(None::<i32>), ActualValue::Null);
/// assert_eq!(ActualValue::from(vec![1, 2]).len(), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ActualValue {
    #[default]
    Null,
    Bool(bool),
    /// Any signed integer.
    Int(i128),
    /// Any unsigned integer.
    UInt(u128),
    Float(f64),
    Decimal(Decimal),
    Char(char),
    Str(String),
    Id(Uuid),
    Enum {
        type_name: String,
        variant: String,
    },
    Seq(Vec<ActualValue>),
    /// A value with no structural mapping, kept as its `Debug` text.
    Opaque {
        type_name: String,
        debug: String,
    },
}

impl ActualValue {
    /// Wraps any `Debug` value as an opaque actual value.
    pub fn opaque<T: Debug + ?Sized>(value: &T) -> Self {
        ActualValue::Opaque {
            type_name: short_type_name(std::any::type_name::<T>()).to_string(),
            debug: format!("{:?}", value),
        }
    }

    /// Represents a fieldless enum variant using its `Debug` name.
    ///
    /// ```
    /// use assertforge_core::ActualValue;
    ///
    /// #[derive(Debug)]
    /// enum Color { Red }
    ///
    /// let value = ActualValue::variant_of(&Color::Red);
    /// assert_eq!(
    ///     value,
    ///     ActualValue::Enum { type_name: "Color".into(), variant: "Red".into() }
    /// );
    /// ```
    pub fn variant_of<T: Debug>(value: &T) -> Self {
        ActualValue::Enum {
            type_name: short_type_name(std::any::type_name::<T>()).to_string(),
            variant: format!("{:?}", value),
        }
    }

    /// Creates an enum variant value from explicit names.
    pub fn variant(type_name: impl Into<String>, variant: impl Into<String>) -> Self {
        ActualValue::Enum {
            type_name: type_name.into(),
            variant: variant.into(),
        }
    }

    /// Returns the kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            ActualValue::Null => ValueKind::Null,
            ActualValue::Bool(_) => ValueKind::Bool,
            ActualValue::Int(_) | ActualValue::UInt(_) => ValueKind::Integer,
            ActualValue::Float(_) => ValueKind::Float,
            ActualValue::Decimal(_) => ValueKind::Decimal,
            ActualValue::Char(_) => ValueKind::Char,
            ActualValue::Str(_) => ValueKind::String,
            ActualValue::Id(_) => ValueKind::Id,
            ActualValue::Enum { .. } => ValueKind::Enum,
            ActualValue::Seq(_) => ValueKind::Sequence,
            ActualValue::Opaque { .. } => ValueKind::Opaque,
        }
    }

    /// Returns the declared type name for enum and opaque values.
    pub fn type_name(&self) -> Option<&str> {
        match self {
            ActualValue::Enum { type_name, .. } | ActualValue::Opaque { type_name, .. } => {
                Some(type_name)
            }
            _ => None,
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, ActualValue::Null)
    }

    /// Returns true for integers, floats and decimals.
    #[inline]
    pub fn is_numeric(&self) -> bool {
        self.kind().is_numeric()
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ActualValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_seq(&self) -> Option<&[ActualValue]> {
        match self {
            ActualValue::Seq(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ActualValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Character count of a string or item count of a sequence.
    pub fn len(&self) -> Option<usize> {
        match self {
            ActualValue::Str(s) => Some(s.chars().count()),
            ActualValue::Seq(items) => Some(items.len()),
            _ => None,
        }
    }

    /// True for an empty string or sequence, `None` for other kinds.
    pub fn is_empty(&self) -> Option<bool> {
        self.len().map(|len| len == 0)
    }
}

/// Broad classification of an [`ActualValue`], used by type checks and
/// type-mismatch faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Integer,
    Float,
    Decimal,
    Char,
    String,
    Id,
    Enum,
    Sequence,
    Opaque,
}

impl ValueKind {
    pub const fn is_numeric(&self) -> bool {
        matches!(
            self,
            ValueKind::Integer | ValueKind::Float | ValueKind::Decimal
        )
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
            ValueKind::Decimal => "decimal",
            ValueKind::Char => "char",
            ValueKind::String => "string",
            ValueKind::Id => "identifier",
            ValueKind::Enum => "enum",
            ValueKind::Sequence => "sequence",
            ValueKind::Opaque => "opaque value",
        };
        f.write_str(name)
    }
}

// Strips the module path, keeping generic arguments intact.
fn short_type_name(full: &str) -> &str {
    let base = full.split('<').next().unwrap_or(full);
    match base.rfind("::") {
        Some(pos) => &full[pos + 2..],
        None => full,
    }
}
