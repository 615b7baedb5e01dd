//! Assertion entry points that hide evaluation and rendering.

use std::fmt;
use std::panic::Location;
use std::path::Path;

use assertforge_config::{ConfigError, EngineConfig};
use assertforge_core::{evaluate, ActualValue, Constraint, ConstraintStatus, RenderConfig};
use tracing::{debug, warn};

use crate::error::{AssertionError, Result};

/// Default configuration file looked up by [`Assert::from_default_config`].
pub const DEFAULT_CONFIG_FILE: &str = "assertforge.toml";

/// Evaluates constraints and turns non-successful verdicts into
/// [`AssertionError`]s using one [`EngineConfig`].
///
/// # Examples
///
/// ```
/// use assertforge::prelude::*;
///
/// let assert = Assert::new().with_render(RenderConfig::default().with_max_string_length(8));
///
/// let err = assert.check("a rather long string", &Is::equal_to("short")).unwrap_err();
/// assert!(err.message().contains("\"a rather...\""));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Assert {
    config: EngineConfig,
}

impl Assert {
    /// Creates an asserter with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Replaces the rendering limits.
    pub fn with_render(mut self, render: RenderConfig) -> Self {
        self.config.render = render;
        self
    }

    /// Loads and validates configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file is missing, malformed or invalid.
    pub fn from_file<P: AsRef<Path>>(path: P) -> std::result::Result<Self, ConfigError> {
        EngineConfig::load(path).map(Self::with_config)
    }

    /// Loads `assertforge.toml` from the working directory, falling back to
    /// defaults when it is missing or invalid.
    pub fn from_default_config() -> Self {
        Self::with_config(EngineConfig::load(DEFAULT_CONFIG_FILE).unwrap_or_default())
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Evaluates `constraint` against `actual`.
    ///
    /// # Errors
    ///
    /// Returns [`AssertionError::Failed`] on a mismatch and
    /// [`AssertionError::Unevaluable`] when the constraint cannot be applied.
    #[track_caller]
    pub fn check<V, C>(&self, actual: V, constraint: &C) -> Result<()>
    where
        V: Into<ActualValue>,
        C: Constraint + ?Sized,
    {
        #[cfg(feature = "console")]
        assertforge_console::init_with(&self.config.logging);

        let location = Location::caller();
        let actual = actual.into();
        let result = evaluate(constraint, &actual);
        let render = &self.config.render;

        match result.status() {
            ConstraintStatus::Success => {
                debug!(
                    event = "assert_pass",
                    constraint = result.name(),
                    description = result.description(),
                    location = %location,
                );
            }
            ConstraintStatus::Error => {
                warn!(
                    event = "assert_error",
                    constraint = result.name(),
                    description = result.description(),
                    fault = %result.fault().map(ToString::to_string).unwrap_or_default(),
                    location = %location,
                );
            }
            ConstraintStatus::Failure | ConstraintStatus::Unknown => {
                warn!(
                    event = "assert_fail",
                    constraint = result.name(),
                    description = result.description(),
                    actual = %assertforge_core::writer::format_value(&actual, render),
                    location = %location,
                );
            }
        }

        match AssertionError::from_result(&result, render) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Evaluates `constraint` against `actual` and panics with the rendered
    /// message when it does not succeed.
    #[track_caller]
    pub fn that<V, C>(&self, actual: V, constraint: &C)
    where
        V: Into<ActualValue>,
        C: Constraint + ?Sized,
    {
        if let Err(err) = self.check(actual, constraint) {
            panic!("{}", err);
        }
    }

    /// Like [`Assert::that`], with a context line prepended to the message.
    #[track_caller]
    pub fn that_with_context<V, C>(&self, actual: V, constraint: &C, context: fmt::Arguments<'_>)
    where
        V: Into<ActualValue>,
        C: Constraint + ?Sized,
    {
        if let Err(err) = self.check(actual, constraint) {
            panic!("{}", err.with_context(context));
        }
    }
}

/// Evaluates `constraint` against `actual` with default limits.
///
/// # Errors
///
/// See [`Assert::check`].
#[track_caller]
pub fn check<V, C>(actual: V, constraint: &C) -> Result<()>
where
    V: Into<ActualValue>,
    C: Constraint + ?Sized,
{
    Assert::new().check(actual, constraint)
}

/// Panics with the rendered failure message unless `actual` satisfies
/// `constraint`.
///
/// ```should_panic
/// use assertforge::prelude::*;
///
/// assert_that(6, &Is::equal_to(5));
/// ```
#[track_caller]
pub fn assert_that<V, C>(actual: V, constraint: &C)
where
    V: Into<ActualValue>,
    C: Constraint + ?Sized,
{
    Assert::new().that(actual, constraint)
}

/// Like [`assert_that`], with a context line prepended to the message.
#[track_caller]
pub fn assert_that_with_context<V, C>(actual: V, constraint: &C, context: fmt::Arguments<'_>)
where
    V: Into<ActualValue>,
    C: Constraint + ?Sized,
{
    Assert::new().that_with_context(actual, constraint, context)
}
