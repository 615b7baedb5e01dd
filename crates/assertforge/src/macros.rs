//! The `assert_that!` macro.

/// Asserts that a value satisfies a constraint.
///
/// The constraint is taken by value and borrowed for the check. Extra
/// arguments are formatted into a context line placed above the failure
/// message.
///
/// # Usage
///
/// ```
/// use assertforge::prelude::*;
///
/// let retries = 3;
/// assert_that!(retries, Is::at_most(5));
/// assert_that!(retries, Is::positive(), "retries for job {}", "nightly");
/// ```
///
/// ```should_panic
/// use assertforge::prelude::*;
///
/// assert_that!(9, Is::at_most(5), "retries for job {}", "nightly");
/// ```
#[macro_export]
macro_rules! assert_that {
    ($actual:expr, $constraint:expr $(,)?) => {
        $crate::assert_that($actual, &$constraint)
    };
    ($actual:expr, $constraint:expr, $($arg:tt)+) => {
        $crate::assert_that_with_context($actual, &$constraint, format_args!($($arg)+))
    };
}
