//! Value formatting shared by the text writer and constraint descriptions.
//!
//! Every function here is total: any [`ActualValue`] produces non-empty
//! text, with long strings clipped, long sequences elided and deep nesting
//! collapsed according to the [`RenderConfig`] limits.

use std::fmt::Write;

use assertforge_config::RenderConfig;

use crate::value::ActualValue;

/// Marker appended or prepended to clipped text.
pub const ELLIPSIS: &str = "...";

/// Literal used for null values.
pub const NULL_LITERAL: &str = "null";

/// Formats a value for display.
///
/// ```
/// use assertforge_core::writer::format_value;
/// use assertforge_core::{ActualValue, RenderConfig};
///
/// let config = RenderConfig::default();
/// assert_eq!(format_value(&ActualValue::from("hi"), &config), "\"hi\"");
/// assert_eq!(format_value(&ActualValue::from(5.0), &config), "5.0");
/// assert_eq!(format_value(&ActualValue::from(vec![1, 2]), &config), "[1, 2]");
/// assert_eq!(format_value(&ActualValue::Null, &config), "null");
/// ```
pub fn format_value(value: &ActualValue, config: &RenderConfig) -> String {
    let mut out = String::new();
    write_value(&mut out, value, config, 0);
    out
}

fn write_value(out: &mut String, value: &ActualValue, config: &RenderConfig, depth: usize) {
    match value {
        ActualValue::Null => out.push_str(NULL_LITERAL),
        ActualValue::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        ActualValue::Int(v) => {
            let _ = write!(out, "{}", v);
        }
        ActualValue::UInt(v) => {
            let _ = write!(out, "{}", v);
        }
        ActualValue::Float(v) => out.push_str(&format_float(*v)),
        ActualValue::Decimal(v) => {
            let _ = write!(out, "{}m", v);
        }
        ActualValue::Char(c) => {
            let _ = write!(out, "'{}'", c.escape_debug());
        }
        ActualValue::Str(s) => out.push_str(&quote_clipped(s, config.max_string_length)),
        ActualValue::Id(id) => {
            let _ = write!(out, "{}", id.hyphenated());
        }
        ActualValue::Enum { type_name, variant } => {
            let limit = config.max_string_length;
            let _ = write!(out, "{}::{}", clip(type_name, limit), clip(variant, limit));
        }
        ActualValue::Opaque { debug, .. } => {
            out.push_str(&clip(debug, config.max_string_length));
            if debug.is_empty() {
                out.push_str("<empty>");
            }
        }
        ActualValue::Seq(items) => write_sequence(out, items, config, depth),
    }
}

fn write_sequence(out: &mut String, items: &[ActualValue], config: &RenderConfig, depth: usize) {
    if depth >= config.max_depth {
        out.push('[');
        out.push_str(ELLIPSIS);
        out.push(']');
        return;
    }

    out.push('[');
    for (index, item) in items.iter().take(config.max_sequence_items).enumerate() {
        if index > 0 {
            out.push_str(", ");
        }
        write_value(out, item, config, depth + 1);
    }
    if items.len() > config.max_sequence_items {
        out.push_str(", ");
        out.push_str(ELLIPSIS);
    }
    out.push(']');
    if items.len() > config.max_sequence_items {
        let _ = write!(out, " ({} items)", items.len());
    }
}

/// Formats a float so that it always reads as a float.
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else {
        // Debug keeps a fractional part for integral values: 5.0 not 5
        format!("{:?}", value)
    }
}

/// Clips `text` to `max_chars`, appending an ellipsis when clipped.
pub fn clip(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        head + ELLIPSIS
    } else {
        head
    }
}

/// Clips, escapes and quotes a string value.
pub fn quote_clipped(text: &str, max_chars: usize) -> String {
    let clipped = clip(text, max_chars);
    format!("\"{}\"", escape(&clipped))
}

/// Escapes double quotes, backslashes and control characters.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        push_escaped(&mut out, c);
    }
    out
}

fn push_escaped(out: &mut String, c: char) {
    match c {
        '"' => out.push_str("\\\""),
        '\\' => out.push_str("\\\\"),
        '\n' => out.push_str("\\n"),
        '\r' => out.push_str("\\r"),
        '\t' => out.push_str("\\t"),
        '\0' => out.push_str("\\0"),
        c if c.is_control() => {
            let _ = write!(out, "\\u{{{:x}}}", c as u32);
        }
        c => out.push(c),
    }
}

/// Quotes the window `[start, start + width)` of `text`, marking cut-off
/// ends with an ellipsis inside the quotes.
pub fn quote_window(text: &str, start: usize, width: usize) -> String {
    let total = text.chars().count();
    let window: String = text.chars().skip(start).take(width).collect();
    let mut out = String::from("\"");
    if start > 0 {
        out.push_str(ELLIPSIS);
    }
    out.push_str(&escape(&window));
    if start + width < total {
        out.push_str(ELLIPSIS);
    }
    out.push('"');
    out
}

/// Display width of the escaped chars `[start, end)` of `text`.
pub fn escaped_width(text: &str, start: usize, end: usize) -> usize {
    text.chars()
        .skip(start)
        .take(end.saturating_sub(start))
        .map(|c| {
            let mut escaped = String::new();
            push_escaped(&mut escaped, c);
            escaped.chars().count()
        })
        .sum()
}
