//! Collection constraints.
//!
//! Item-wise constraints apply a child constraint to each item of a
//! sequence and record the index of the item that decided the outcome.
//! Every constraint here produces an `Error` result for non-sequences,
//! except [`LengthConstraint`] which also accepts strings.

use std::cmp::Ordering;

use assertforge_config::RenderConfig;

use super::Constraint;
use crate::error::EvaluationFault;
use crate::result::{ConstraintResult, Mismatch};
use crate::status::ConstraintStatus;
use crate::value::{ActualValue, EqualityOptions};
use crate::writer::{format_value, MessageWriter};

fn not_a_sequence<'a>(constraint: &'a dyn Constraint, actual: &'a ActualValue) -> ConstraintResult<'a> {
    ConstraintResult::error(
        constraint,
        actual,
        EvaluationFault::type_mismatch("a sequence", actual),
    )
}

fn write_item_line(result: &ConstraintResult<'_>, writer: &mut dyn MessageWriter, label: &str) {
    if let Some(Mismatch::Item { index, value }) = result.mismatch() {
        writer.write_text(&format!("  {} at index [{}]:  ", label, index));
        writer.write_actual_value(value);
        writer.write_text("\n");
    }
}

/// Succeeds when the sequence contains an item equal to the expected value.
#[derive(Debug, Clone)]
pub struct ContainsItemConstraint {
    expected: ActualValue,
    options: EqualityOptions,
}

impl ContainsItemConstraint {
    pub fn new(expected: impl Into<ActualValue>) -> Self {
        Self {
            expected: expected.into(),
            options: EqualityOptions::exact(),
        }
    }

    pub fn ignore_case(mut self) -> Self {
        self.options.ignore_case = true;
        self
    }
}

impl Constraint for ContainsItemConstraint {
    fn display_name(&self) -> &str {
        "Contains"
    }

    fn description(&self) -> String {
        format!(
            "collection containing {}",
            format_value(&self.expected, &RenderConfig::default())
        )
    }

    fn evaluate<'a>(&'a self, actual: &'a ActualValue) -> ConstraintResult<'a> {
        match actual.as_seq() {
            Some(items) => {
                let found = items.iter().any(|item| item.equals(&self.expected, &self.options));
                ConstraintResult::from_bool(self, actual, found)
            }
            None => not_a_sequence(self, actual),
        }
    }
}

/// Succeeds when every item satisfies the child constraint. An empty
/// sequence succeeds.
///
/// ```
/// use assertforge_core::{ActualValue, AllItemsConstraint, ComparisonConstraint, Constraint};
///
/// let constraint = AllItemsConstraint::new(ComparisonConstraint::greater_than(0));
/// let actual = ActualValue::from(vec![3, 1, -2, 5]);
/// let result = constraint.evaluate(&actual);
///
/// assert!(!result.is_success());
/// assert!(result.render().contains("First non-matching item at index [2]:  -2"));
/// ```
#[derive(Debug)]
pub struct AllItemsConstraint {
    item: Box<dyn Constraint>,
}

impl AllItemsConstraint {
    pub fn new<C: Constraint + 'static>(item: C) -> Self {
        Self {
            item: Box::new(item),
        }
    }
}

impl Constraint for AllItemsConstraint {
    fn display_name(&self) -> &str {
        "AllItems"
    }

    fn description(&self) -> String {
        format!("all items {}", self.item.description())
    }

    fn evaluate<'a>(&'a self, actual: &'a ActualValue) -> ConstraintResult<'a> {
        let Some(items) = actual.as_seq() else {
            return not_a_sequence(self, actual);
        };
        for (index, item) in items.iter().enumerate() {
            let inner = self.item.evaluate(item);
            if inner.is_success() {
                continue;
            }
            let mismatch = Mismatch::Item {
                index,
                value: item.clone(),
            };
            let result = ConstraintResult::with_status(self, actual, inner.status())
                .with_mismatch(mismatch);
            return match inner.fault() {
                Some(fault) => result.with_fault(fault.clone()),
                None => result,
            };
        }
        ConstraintResult::from_bool(self, actual, true)
    }

    fn write_additional_lines_to(
        &self,
        result: &ConstraintResult<'_>,
        writer: &mut dyn MessageWriter,
    ) {
        write_item_line(result, writer, "First non-matching item");
    }
}

/// Succeeds when at least one item satisfies the child constraint.
///
/// Items whose evaluation errors count as not satisfying; if no item
/// succeeds and at least one errored, the result is an `Error`.
#[derive(Debug)]
pub struct SomeItemsConstraint {
    item: Box<dyn Constraint>,
}

impl SomeItemsConstraint {
    pub fn new<C: Constraint + 'static>(item: C) -> Self {
        Self {
            item: Box::new(item),
        }
    }
}

impl Constraint for SomeItemsConstraint {
    fn display_name(&self) -> &str {
        "SomeItems"
    }

    fn description(&self) -> String {
        format!("some item {}", self.item.description())
    }

    fn evaluate<'a>(&'a self, actual: &'a ActualValue) -> ConstraintResult<'a> {
        let Some(items) = actual.as_seq() else {
            return not_a_sequence(self, actual);
        };
        let mut first_fault = None;
        for item in items {
            let inner = self.item.evaluate(item);
            if inner.is_success() {
                return ConstraintResult::from_bool(self, actual, true);
            }
            if first_fault.is_none() {
                first_fault = inner.fault().cloned();
            }
        }
        match first_fault {
            Some(fault) => ConstraintResult::error(self, actual, fault),
            None => ConstraintResult::from_bool(self, actual, false),
        }
    }
}

/// Succeeds when no item satisfies the child constraint.
#[derive(Debug)]
pub struct NoItemConstraint {
    item: Box<dyn Constraint>,
}

impl NoItemConstraint {
    pub fn new<C: Constraint + 'static>(item: C) -> Self {
        Self {
            item: Box::new(item),
        }
    }
}

impl Constraint for NoItemConstraint {
    fn display_name(&self) -> &str {
        "NoItem"
    }

    fn description(&self) -> String {
        format!("no item {}", self.item.description())
    }

    fn evaluate<'a>(&'a self, actual: &'a ActualValue) -> ConstraintResult<'a> {
        let Some(items) = actual.as_seq() else {
            return not_a_sequence(self, actual);
        };
        for (index, item) in items.iter().enumerate() {
            let inner = self.item.evaluate(item);
            let status = inner.status();
            if status == ConstraintStatus::Success || status == ConstraintStatus::Error {
                let result = ConstraintResult::with_status(self, actual, status.negated())
                    .with_mismatch(Mismatch::Item {
                        index,
                        value: item.clone(),
                    });
                return match inner.fault() {
                    Some(fault) => result.with_fault(fault.clone()),
                    None => result,
                };
            }
        }
        ConstraintResult::from_bool(self, actual, true)
    }

    fn write_additional_lines_to(
        &self,
        result: &ConstraintResult<'_>,
        writer: &mut dyn MessageWriter,
    ) {
        write_item_line(result, writer, "First matching item");
    }
}

/// Succeeds when no two items are equal.
///
/// Equality follows [`ActualValue::equals`], so `1` and `1.0` are
/// duplicates. On failure every duplicated value is listed once, in order
/// of first appearance.
#[derive(Debug, Clone, Default)]
pub struct UniqueItemsConstraint {
    options: EqualityOptions,
}

impl UniqueItemsConstraint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ignore_case(mut self) -> Self {
        self.options.ignore_case = true;
        self
    }

    fn duplicates(&self, items: &[ActualValue]) -> Vec<ActualValue> {
        let mut duplicates: Vec<ActualValue> = Vec::new();
        for (index, item) in items.iter().enumerate() {
            let repeated = items[index + 1..]
                .iter()
                .any(|other| item.equals(other, &self.options));
            let already_listed = duplicates
                .iter()
                .any(|listed| listed.equals(item, &self.options));
            if repeated && !already_listed {
                duplicates.push(item.clone());
            }
        }
        duplicates
    }
}

impl Constraint for UniqueItemsConstraint {
    fn display_name(&self) -> &str {
        "UniqueItems"
    }

    fn description(&self) -> String {
        if self.options.ignore_case {
            "all items unique, ignoring case".to_string()
        } else {
            "all items unique".to_string()
        }
    }

    fn evaluate<'a>(&'a self, actual: &'a ActualValue) -> ConstraintResult<'a> {
        let Some(items) = actual.as_seq() else {
            return not_a_sequence(self, actual);
        };
        let duplicates = self.duplicates(items);
        if duplicates.is_empty() {
            ConstraintResult::from_bool(self, actual, true)
        } else {
            ConstraintResult::from_bool(self, actual, false)
                .with_mismatch(Mismatch::Duplicates { values: duplicates })
        }
    }

    fn write_additional_lines_to(
        &self,
        result: &ConstraintResult<'_>,
        writer: &mut dyn MessageWriter,
    ) {
        if let Some(Mismatch::Duplicates { values }) = result.mismatch() {
            writer.write_text("  Not unique items: ");
            writer.write_actual_value(&ActualValue::Seq(values.clone()));
            writer.write_text("\n");
        }
    }
}

/// Succeeds when the items are in ascending (or descending) order.
///
/// Equal neighbours are allowed. Items that cannot be ordered against each
/// other produce an `Error`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderedConstraint {
    descending: bool,
}

impl OrderedConstraint {
    pub fn ascending() -> Self {
        Self { descending: false }
    }

    pub fn descending() -> Self {
        Self { descending: true }
    }
}

impl Constraint for OrderedConstraint {
    fn display_name(&self) -> &str {
        "Ordered"
    }

    fn description(&self) -> String {
        if self.descending {
            "collection ordered, descending".to_string()
        } else {
            "collection ordered".to_string()
        }
    }

    fn evaluate<'a>(&'a self, actual: &'a ActualValue) -> ConstraintResult<'a> {
        let Some(items) = actual.as_seq() else {
            return not_a_sequence(self, actual);
        };
        let wrong_way = if self.descending {
            Ordering::Less
        } else {
            Ordering::Greater
        };
        for (index, pair) in items.windows(2).enumerate() {
            let mismatch = Mismatch::Item {
                index: index + 1,
                value: pair[1].clone(),
            };
            match pair[0].compare(&pair[1]) {
                Ok(ordering) if ordering == wrong_way => {
                    return ConstraintResult::from_bool(self, actual, false)
                        .with_mismatch(mismatch);
                }
                Ok(_) => {}
                Err(fault) => {
                    return ConstraintResult::error(self, actual, fault).with_mismatch(mismatch);
                }
            }
        }
        ConstraintResult::from_bool(self, actual, true)
    }

    fn write_additional_lines_to(
        &self,
        result: &ConstraintResult<'_>,
        writer: &mut dyn MessageWriter,
    ) {
        write_item_line(result, writer, "Ordering breaks");
    }
}

/// Applies a child constraint to the length of a string or sequence.
///
/// ```
/// use assertforge_core::{ActualValue, Constraint, EqualConstraint, LengthConstraint};
///
/// let constraint = LengthConstraint::new(EqualConstraint::new(3));
/// let actual = ActualValue::from(vec![1, 2]);
/// let result = constraint.evaluate(&actual);
///
/// assert_eq!(constraint.description(), "length 3");
/// assert!(result.render().contains("But was:  [1, 2] (length 2)"));
/// ```
#[derive(Debug)]
pub struct LengthConstraint {
    length: Box<dyn Constraint>,
}

impl LengthConstraint {
    pub fn new<C: Constraint + 'static>(length: C) -> Self {
        Self {
            length: Box::new(length),
        }
    }
}

impl Constraint for LengthConstraint {
    fn display_name(&self) -> &str {
        "Length"
    }

    fn description(&self) -> String {
        format!("length {}", self.length.description())
    }

    fn evaluate<'a>(&'a self, actual: &'a ActualValue) -> ConstraintResult<'a> {
        let Some(len) = actual.len() else {
            return ConstraintResult::error(
                self,
                actual,
                EvaluationFault::type_mismatch("a string or sequence", actual),
            );
        };
        let length = ActualValue::from(len);
        let inner = self.length.evaluate(&length);
        let result = ConstraintResult::with_status(self, actual, inner.status());
        match inner.fault() {
            Some(fault) => result.with_fault(fault.clone()),
            None => result,
        }
    }

    fn write_actual_value_to(&self, result: &ConstraintResult<'_>, writer: &mut dyn MessageWriter) {
        let actual = result.actual_value();
        writer.write_actual_value(actual);
        if let Some(len) = actual.len() {
            writer.write_text(&format!(" (length {})", len));
        }
    }
}
