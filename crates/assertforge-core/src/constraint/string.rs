//! String constraints: substring, prefix, suffix and regular expressions.
//!
//! All of them are defined for strings only. Any other value, null
//! included, produces an `Error` result.

use assertforge_config::RenderConfig;
use regex::{Regex, RegexBuilder};

use super::Constraint;
use crate::error::EvaluationFault;
use crate::result::ConstraintResult;
use crate::value::ActualValue;
use crate::writer::quote_clipped;

/// Position at which a [`StringConstraint`] looks for its expected text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringMatch {
    Contains,
    StartsWith,
    EndsWith,
}

/// Checks that a string contains, starts with or ends with expected text.
///
/// ```
/// use assertforge_core::{ActualValue, Constraint, StringConstraint};
///
/// let constraint = StringConstraint::starts_with("assert").ignore_case();
/// assert!(constraint.evaluate(&ActualValue::from("AssertForge")).is_success());
/// assert_eq!(constraint.description(), "String starting with \"assert\", ignoring case");
/// ```
#[derive(Debug, Clone)]
pub struct StringConstraint {
    mode: StringMatch,
    expected: String,
    ignore_case: bool,
}

impl StringConstraint {
    pub fn new(mode: StringMatch, expected: impl Into<String>) -> Self {
        Self {
            mode,
            expected: expected.into(),
            ignore_case: false,
        }
    }

    pub fn contains(expected: impl Into<String>) -> Self {
        Self::new(StringMatch::Contains, expected)
    }

    pub fn starts_with(expected: impl Into<String>) -> Self {
        Self::new(StringMatch::StartsWith, expected)
    }

    pub fn ends_with(expected: impl Into<String>) -> Self {
        Self::new(StringMatch::EndsWith, expected)
    }

    pub fn ignore_case(mut self) -> Self {
        self.ignore_case = true;
        self
    }

    fn matches(&self, actual: &str) -> bool {
        let (haystack, needle) = if self.ignore_case {
            (actual.to_lowercase(), self.expected.to_lowercase())
        } else {
            (actual.to_string(), self.expected.clone())
        };
        match self.mode {
            StringMatch::Contains => haystack.contains(&needle),
            StringMatch::StartsWith => haystack.starts_with(&needle),
            StringMatch::EndsWith => haystack.ends_with(&needle),
        }
    }
}

impl Constraint for StringConstraint {
    fn display_name(&self) -> &str {
        match self.mode {
            StringMatch::Contains => "Substring",
            StringMatch::StartsWith => "StartsWith",
            StringMatch::EndsWith => "EndsWith",
        }
    }

    fn description(&self) -> String {
        let verb = match self.mode {
            StringMatch::Contains => "containing",
            StringMatch::StartsWith => "starting with",
            StringMatch::EndsWith => "ending with",
        };
        let mut description = format!(
            "String {} {}",
            verb,
            quote_clipped(&self.expected, RenderConfig::DEFAULT_MAX_STRING_LENGTH)
        );
        if self.ignore_case {
            description.push_str(", ignoring case");
        }
        description
    }

    fn evaluate<'a>(&'a self, actual: &'a ActualValue) -> ConstraintResult<'a> {
        match actual.as_str() {
            Some(text) => ConstraintResult::from_bool(self, actual, self.matches(text)),
            None => ConstraintResult::error(
                self,
                actual,
                EvaluationFault::type_mismatch("a string", actual),
            ),
        }
    }
}

/// Checks that a string matches a regular expression anywhere.
///
/// The pattern is compiled once at construction. An invalid pattern does
/// not panic; every evaluation reports it as an `Error`.
///
/// ```
/// use assertforge_core::{ActualValue, Constraint, ConstraintStatus, RegexConstraint};
///
/// let constraint = RegexConstraint::new(r"^\d{3}-\d{4}$");
/// assert!(constraint.evaluate(&ActualValue::from("555-0199")).is_success());
///
/// let broken = RegexConstraint::new("(unclosed");
/// let actual = ActualValue::from("x");
/// let result = broken.evaluate(&actual);
/// assert_eq!(result.status(), ConstraintStatus::Error);
/// ```
#[derive(Debug, Clone)]
pub struct RegexConstraint {
    pattern: String,
    ignore_case: bool,
    compiled: Result<Regex, String>,
}

impl RegexConstraint {
    pub fn new(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        let compiled = Self::compile(&pattern, false);
        Self {
            pattern,
            ignore_case: false,
            compiled,
        }
    }

    pub fn ignore_case(mut self) -> Self {
        self.ignore_case = true;
        self.compiled = Self::compile(&self.pattern, true);
        self
    }

    fn compile(pattern: &str, ignore_case: bool) -> Result<Regex, String> {
        RegexBuilder::new(pattern)
            .case_insensitive(ignore_case)
            .build()
            .map_err(|err| err.to_string())
    }
}

impl Constraint for RegexConstraint {
    fn display_name(&self) -> &str {
        "Regex"
    }

    fn description(&self) -> String {
        let mut description = format!(
            "String matching {}",
            quote_clipped(&self.pattern, RenderConfig::DEFAULT_MAX_STRING_LENGTH)
        );
        if self.ignore_case {
            description.push_str(", ignoring case");
        }
        description
    }

    fn evaluate<'a>(&'a self, actual: &'a ActualValue) -> ConstraintResult<'a> {
        let regex = match &self.compiled {
            Ok(regex) => regex,
            Err(reason) => {
                return ConstraintResult::error(
                    self,
                    actual,
                    EvaluationFault::InvalidPattern {
                        pattern: self.pattern.clone(),
                        reason: reason.clone(),
                    },
                )
            }
        };
        match actual.as_str() {
            Some(text) => ConstraintResult::from_bool(self, actual, regex.is_match(text)),
            None => ConstraintResult::error(
                self,
                actual,
                EvaluationFault::type_mismatch("a string", actual),
            ),
        }
    }
}
