//! Reproducible random actual values.
//!
//! Stands in for a parameterized test driver: produces numbers, decimals,
//! identifiers and enum variants, optionally bounded and pairwise distinct.

use std::collections::HashSet;

use assertforge_core::ActualValue;
use rand::distr::uniform::SampleRange;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Seeded source of actual values.
///
/// # Examples
///
/// ```
/// use assertforge_core::{ActualValue, Constraint, RangeConstraint};
/// use assertforge_test::ValueGenerator;
///
/// let mut generator = ValueGenerator::with_seed(7);
/// let in_range = RangeConstraint::new(-10, 10);
///
/// for _ in 0..100 {
///     let value = generator.int_in(-10..=10);
///     assert!(in_range.evaluate(&value).is_success());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ValueGenerator {
    rng: StdRng,
}

impl ValueGenerator {
    /// Creates a generator seeded from the OS.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a generator with a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// An integer in a half-open (`a..b`) or closed (`a..=b`) range.
    pub fn int_in<R: SampleRange<i64>>(&mut self, range: R) -> ActualValue {
        ActualValue::from(self.rng.random_range(range))
    }

    /// An unsigned integer in the given range.
    pub fn uint_in<R: SampleRange<u64>>(&mut self, range: R) -> ActualValue {
        ActualValue::from(self.rng.random_range(range))
    }

    /// A float in the given range.
    pub fn float_in<R: SampleRange<f64>>(&mut self, range: R) -> ActualValue {
        ActualValue::from(self.rng.random_range(range))
    }

    /// A decimal with `scale` fractional digits whose mantissa lies in `range`.
    ///
    /// `scale` is capped at [`Decimal::MAX_SCALE`].
    pub fn decimal_in<R: SampleRange<i64>>(&mut self, range: R, scale: u32) -> ActualValue {
        let scale = scale.min(Decimal::MAX_SCALE);
        ActualValue::from(Decimal::new(self.rng.random_range(range), scale))
    }

    /// An identifier derived from the generator's stream.
    pub fn id(&mut self) -> ActualValue {
        ActualValue::from(Uuid::from_u128(self.rng.random::<u128>()))
    }

    /// One of `variants` of the enum named `type_name`, or null when
    /// `variants` is empty.
    pub fn variant(&mut self, type_name: &str, variants: &[&str]) -> ActualValue {
        if variants.is_empty() {
            return ActualValue::Null;
        }
        let index = self.rng.random_range(0..variants.len());
        ActualValue::variant(type_name, variants[index])
    }

    /// `count` pairwise distinct integers in `min..=max`.
    ///
    /// Returns `None` when the range holds fewer than `count` integers.
    pub fn distinct_ints(&mut self, count: usize, min: i64, max: i64) -> Option<Vec<ActualValue>> {
        let available = (i128::from(max) - i128::from(min) + 1).max(0);
        if (count as i128) > available {
            return None;
        }
        let mut seen = HashSet::with_capacity(count);
        let mut values = Vec::with_capacity(count);
        while values.len() < count {
            let candidate = self.rng.random_range(min..=max);
            if seen.insert(candidate) {
                values.push(ActualValue::from(candidate));
            }
        }
        Some(values)
    }
}

impl Default for ValueGenerator {
    fn default() -> Self {
        Self::new()
    }
}
