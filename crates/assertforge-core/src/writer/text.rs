//! In-memory text writer.

use std::fmt;

use assertforge_config::RenderConfig;

use super::format::{escaped_width, format_value, quote_window};
use super::{
    MessageWriter, BUT_WAS_PREFIX, ERROR_PREFIX, EXPECTED_PREFIX, MESSAGE_INDENT, PREFIX_LENGTH,
};
use crate::result::ConstraintResult;
use crate::value::ActualValue;

/// A [`MessageWriter`] that accumulates text in a `String`.
///
/// # Examples
///
/// ```
/// use assertforge_core::{ActualValue, MessageWriter, RenderConfig, TextMessageWriter};
///
/// let config = RenderConfig::default().with_max_string_length(5);
/// let mut writer = TextMessageWriter::with_config(config);
/// writer.write_value(&ActualValue::from("abcdefgh"));
///
/// assert_eq!(writer.as_str(), "\"abcde...\"");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextMessageWriter {
    buffer: String,
    config: RenderConfig,
}

impl TextMessageWriter {
    /// Creates a writer with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a writer with the given limits.
    pub fn with_config(config: RenderConfig) -> Self {
        Self {
            buffer: String::new(),
            config,
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Consumes the writer and returns the accumulated text.
    pub fn into_string(self) -> String {
        self.buffer
    }

    fn newline(&mut self) {
        self.buffer.push('\n');
    }

    // Chars of a diff window that fit on one line after the prefix and quotes.
    fn window_width(&self) -> usize {
        self.config
            .max_line_length
            .saturating_sub(PREFIX_LENGTH + 2)
            .max(1)
    }

    // First char shown in a window of `width` chars around `index`.
    fn window_start(longest: usize, index: usize, width: usize) -> usize {
        if longest <= width {
            0
        } else {
            index.saturating_sub(width / 2).min(longest - width)
        }
    }
}

impl MessageWriter for TextMessageWriter {
    fn max_line_length(&self) -> usize {
        self.config.max_line_length
    }

    fn write_text(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn write_message_line(&mut self, message: &str) {
        self.buffer.push_str(MESSAGE_INDENT);
        self.buffer.push_str(message);
        self.newline();
    }

    fn write_value(&mut self, value: &ActualValue) {
        let text = format_value(value, &self.config);
        self.buffer.push_str(&text);
    }

    fn display_differences(&mut self, result: &ConstraintResult<'_>) {
        self.write_text(EXPECTED_PREFIX);
        self.write_text(result.description());
        self.newline();

        self.write_text(BUT_WAS_PREFIX);
        result.write_actual_value_to(self);
        self.newline();

        if let Some(fault) = result.fault() {
            self.write_text(ERROR_PREFIX);
            self.write_text(&fault.to_string());
            self.newline();
        }

        result.write_additional_lines_to(self);
    }

    fn display_string_differences(&mut self, expected: &str, actual: &str, index: usize) {
        let expected_len = expected.chars().count();
        let actual_len = actual.chars().count();

        if expected_len == actual_len {
            self.write_message_line(&format!(
                "String lengths are both {}. Strings differ at index {}.",
                expected_len, index
            ));
        } else {
            self.write_message_line(&format!(
                "Expected string length {} but was {}. Strings differ at index {}.",
                expected_len, actual_len, index
            ));
        }

        let width = self.window_width();
        let start = Self::window_start(expected_len.max(actual_len), index, width);

        self.write_text(EXPECTED_PREFIX);
        self.write_text(&quote_window(expected, start, width));
        self.newline();
        self.write_text(BUT_WAS_PREFIX);
        self.write_text(&quote_window(actual, start, width));
        self.newline();

        // opening quote, optional leading ellipsis, then the chars before index
        let mut offset = PREFIX_LENGTH + 1 + escaped_width(actual, start, index);
        if start > 0 {
            offset += super::ELLIPSIS.len();
        }
        self.write_text(MESSAGE_INDENT);
        self.write_text(&"-".repeat(offset - MESSAGE_INDENT.len()));
        self.write_text("^");
        self.newline();
    }

    fn display_sequence_differences(
        &mut self,
        expected: &[ActualValue],
        actual: &[ActualValue],
        index: usize,
    ) {
        if expected.len() == actual.len() {
            self.write_message_line(&format!("Values differ at index [{}]", index));
        } else {
            self.write_message_line(&format!(
                "Expected {} items but was {}. Values differ at index [{}]",
                expected.len(),
                actual.len(),
                index
            ));
        }

        match (expected.get(index), actual.get(index)) {
            (Some(expected_item), Some(actual_item)) => {
                self.write_text(EXPECTED_PREFIX);
                self.write_expected_value(expected_item);
                self.newline();
                self.write_text(BUT_WAS_PREFIX);
                self.write_actual_value(actual_item);
                self.newline();
            }
            (Some(missing), None) => {
                self.write_text("  Missing:  ");
                self.write_expected_value(missing);
                self.newline();
            }
            (None, Some(extra)) => {
                self.write_text("  Extra:    ");
                self.write_actual_value(extra);
                self.newline();
            }
            (None, None) => {}
        }
    }
}

impl fmt::Write for TextMessageWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.buffer.push_str(s);
        Ok(())
    }
}

impl fmt::Display for TextMessageWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buffer)
    }
}
