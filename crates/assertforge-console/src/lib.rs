//! Colorful console output for assertion verdicts.
//!
//! Provides a custom `tracing` layer that formats AssertForge events.
//!
//! ## Log Levels
//!
//! - **WARN**: Failed and unevaluable assertions
//! - **DEBUG**: Passing assertions (printed when `show_passes` is set)
//! - **TRACE**: Individual constraint evaluations and short-circuits

use assertforge_config::LoggingConfig;
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();

/// Initializes console output with default logging settings.
///
/// Safe to call multiple times - only the first call has effect.
pub fn init() {
    init_with(&LoggingConfig::default());
}

/// Initializes console output from `config`.
///
/// `RUST_LOG` takes precedence over `config.level` when set. Safe to call
/// multiple times - only the first call has effect, and an already
/// installed global subscriber is left in place.
pub fn init_with(config: &LoggingConfig) {
    INIT.get_or_init(|| {
        EPOCH.get_or_init(Instant::now);

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "assertforge={level},assertforge_core={level}",
                level = config.level.to_ascii_lowercase()
            ))
        });

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(AssertConsoleLayer::from_config(config))
            .try_init();
    });
}

fn elapsed_secs() -> f64 {
    EPOCH
        .get()
        .map(|epoch| epoch.elapsed().as_secs_f64())
        .unwrap_or(0.0)
}

/// A tracing layer that formats assertion events with colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssertConsoleLayer {
    color: bool,
    show_passes: bool,
}

impl AssertConsoleLayer {
    pub fn new(color: bool, show_passes: bool) -> Self {
        Self { color, show_passes }
    }

    pub fn from_config(config: &LoggingConfig) -> Self {
        Self::new(config.color, config.show_passes)
    }
}

impl Default for AssertConsoleLayer {
    fn default() -> Self {
        Self::from_config(&LoggingConfig::default())
    }
}

impl<S: Subscriber> Layer<S> for AssertConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        // Accept events from assertforge crates only
        if !metadata.target().starts_with("assertforge") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level(), self.color, self.show_passes);
        if !output.is_empty() {
            let elapsed = paint(self.color, format!("{:>7.3}s", elapsed_secs()), |s| {
                s.bright_black().to_string()
            });
            let _ = writeln!(io::stdout(), "{} {}", elapsed, output);
        }
    }
}

#[derive(Debug, Default)]
struct EventVisitor {
    event: Option<String>,
    constraint: Option<String>,
    description: Option<String>,
    status: Option<String>,
    actual: Option<String>,
    fault: Option<String>,
    combinator: Option<String>,
    decided_by: Option<String>,
    location: Option<String>,
}

impl EventVisitor {
    fn slot(&mut self, name: &str) -> Option<&mut Option<String>> {
        match name {
            "event" => Some(&mut self.event),
            "constraint" => Some(&mut self.constraint),
            "description" => Some(&mut self.description),
            "status" => Some(&mut self.status),
            "actual" => Some(&mut self.actual),
            "fault" => Some(&mut self.fault),
            "combinator" => Some(&mut self.combinator),
            "decided_by" => Some(&mut self.decided_by),
            "location" => Some(&mut self.location),
            _ => None,
        }
    }
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if let Some(slot) = self.slot(field.name()) {
            *slot = Some(format!("{:?}", value).trim_matches('"').to_string());
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if let Some(slot) = self.slot(field.name()) {
            *slot = Some(value.to_string());
        }
    }
}

fn paint(color: bool, text: impl AsRef<str>, style: impl Fn(&str) -> String) -> String {
    if color {
        style(text.as_ref())
    } else {
        text.as_ref().to_string()
    }
}

fn format_event(v: &EventVisitor, level: Level, color: bool, show_passes: bool) -> String {
    match v.event.as_deref().unwrap_or("") {
        "assert_pass" if show_passes => format_pass(v, color),
        "assert_fail" => format_fail(v, color),
        "assert_error" => format_error(v, color),
        "evaluate" if level == Level::TRACE => format_evaluate(v, color),
        "short_circuit" if level == Level::TRACE => format_short_circuit(v, color),
        _ => String::new(),
    }
}

fn format_pass(v: &EventVisitor, color: bool) -> String {
    format!(
        "{} {} │ {}",
        paint(color, "✓ PASS ", |s| s.bright_green().bold().to_string()),
        paint(color, constraint_name(v), |s| s.white().bold().to_string()),
        v.description.as_deref().unwrap_or("")
    )
}

fn format_fail(v: &EventVisitor, color: bool) -> String {
    let mut output = format!(
        "{} {} │ expected {} │ but was {}",
        paint(color, "✗ FAIL ", |s| s.bright_red().bold().to_string()),
        paint(color, constraint_name(v), |s| s.white().bold().to_string()),
        paint(color, v.description.as_deref().unwrap_or(""), |s| {
            s.bright_yellow().to_string()
        }),
        paint(color, v.actual.as_deref().unwrap_or("?"), |s| {
            s.bright_magenta().to_string()
        }),
    );
    push_location(&mut output, v, color);
    output
}

fn format_error(v: &EventVisitor, color: bool) -> String {
    let mut output = format!(
        "{} {} │ {} │ {}",
        paint(color, "! ERROR", |s| s.bright_red().bold().to_string()),
        paint(color, constraint_name(v), |s| s.white().bold().to_string()),
        v.description.as_deref().unwrap_or(""),
        paint(color, v.fault.as_deref().unwrap_or("unknown fault"), |s| {
            s.red().to_string()
        }),
    );
    push_location(&mut output, v, color);
    output
}

fn format_evaluate(v: &EventVisitor, color: bool) -> String {
    let status = v.status.as_deref().unwrap_or("unknown");
    paint(
        color,
        format!("· {} → {}", constraint_name(v), status),
        |s| s.bright_black().to_string(),
    )
}

fn format_short_circuit(v: &EventVisitor, color: bool) -> String {
    paint(
        color,
        format!(
            "· {} decided by {} ({})",
            v.combinator.as_deref().unwrap_or("?"),
            v.decided_by.as_deref().unwrap_or("?"),
            v.status.as_deref().unwrap_or("unknown"),
        ),
        |s| s.bright_black().to_string(),
    )
}

fn push_location(output: &mut String, v: &EventVisitor, color: bool) {
    if let Some(location) = v.location.as_deref() {
        output.push_str(" │ ");
        output.push_str(&paint(color, location, |s| s.bright_black().to_string()));
    }
}

fn constraint_name(v: &EventVisitor) -> &str {
    v.constraint.as_deref().unwrap_or("Constraint")
}
