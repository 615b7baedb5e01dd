//! Failure message rendering.
//!
//! A [`MessageWriter`] turns a non-successful [`ConstraintResult`] into text.
//! Constraints call the writer's primitives from their rendering hooks;
//! the default path is [`MessageWriter::display_differences`], which prints
//! the expectation followed by the actual value:
//!
//! ```text
//!   Expected: in range (1, 10)
//!   But was:  12
//! ```

mod format;
mod text;


use crate::result::ConstraintResult;
use crate::value::ActualValue;

pub use format::{
    clip, escape, format_float, format_value, quote_clipped, ELLIPSIS, NULL_LITERAL,
};
pub use text::TextMessageWriter;

/// Prefix of the expectation line.
pub const EXPECTED_PREFIX: &str = "  Expected: ";

/// Prefix of the actual value line.
pub const BUT_WAS_PREFIX: &str = "  But was:  ";

/// Prefix of the fault line written for `Error` results.
pub const ERROR_PREFIX: &str = "  Error:    ";

/// Indentation of message lines, matching the prefixes above.
pub const MESSAGE_INDENT: &str = "  ";

/// Width of every line prefix.
pub const PREFIX_LENGTH: usize = EXPECTED_PREFIX.len();

/// Sink for failure text.
///
/// Writers never fail: every value has a rendering, clipped or elided when
/// it exceeds the writer's limits.
pub trait MessageWriter {
    /// Line width that bounds the window shown around a string mismatch.
    fn max_line_length(&self) -> usize;

    /// Appends raw text.
    fn write_text(&mut self, text: &str);

    /// Appends `text` followed by a newline.
    fn write_line(&mut self, text: &str) {
        self.write_text(text);
        self.write_text("\n");
    }

    /// Appends an indented line.
    fn write_message_line(&mut self, message: &str);

    /// Appends a value using the writer's formatting rules.
    fn write_value(&mut self, value: &ActualValue);

    /// Appends the actual value of a failed evaluation.
    fn write_actual_value(&mut self, value: &ActualValue) {
        self.write_value(value);
    }

    /// Appends an expected value inside a custom expectation.
    fn write_expected_value(&mut self, value: &ActualValue) {
        self.write_value(value);
    }

    /// Appends connective text such as `and` between two values.
    fn write_connector(&mut self, connector: &str) {
        self.write_text(" ");
        self.write_text(connector);
        self.write_text(" ");
    }

    /// Writes the standard expected/but-was block for `result`, followed by
    /// the result's additional lines.
    fn display_differences(&mut self, result: &ConstraintResult<'_>);

    /// Writes a clipped side-by-side view of two strings with a caret under
    /// the first differing char.
    fn display_string_differences(&mut self, expected: &str, actual: &str, index: usize);

    /// Writes the item-level detail of two sequences that differ at `index`.
    fn display_sequence_differences(
        &mut self,
        expected: &[ActualValue],
        actual: &[ActualValue],
        index: usize,
    );
}
