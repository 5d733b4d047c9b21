//! Output formatting utilities for text and JSON output.

use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use vitals_cli::view::{LabelView, UNSET};
use vitals_core::format::format_value;
use vitals_core::{DateRange, DisplayState, MetricType, NO_READINGS, Reading};

/// Width of the label column in text output.
const LABEL_WIDTH: usize = 16;

/// Formatting options for output.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOptions {
    /// Disable colored output.
    pub no_color: bool,
    /// Use compact JSON output (no pretty-printing).
    pub compact: bool,
}

impl FormatOptions {
    pub fn new(no_color: bool) -> Self {
        Self {
            no_color,
            compact: false,
        }
    }

    /// Create with compact JSON option.
    pub fn with_compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    /// Serialize value to JSON string, respecting compact option.
    pub fn as_json<T: Serialize>(&self, value: &T) -> Result<String> {
        let json = if self.compact {
            serde_json::to_string(value)?
        } else {
            serde_json::to_string_pretty(value)?
        };
        Ok(json + "\n")
    }
}

/// Format a title header.
pub fn format_title(title: &str, no_color: bool) -> String {
    let rule = "━".repeat(title.chars().count());
    if no_color {
        format!("{}\n{}", title, rule)
    } else {
        format!("{}\n{}", title.bold(), rule.dimmed())
    }
}

/// Format an error line.
pub fn format_error(message: &str, no_color: bool) -> String {
    if no_color {
        format!("[!!] {}", message)
    } else {
        format!("{} {}", "[!!]".red(), message)
    }
}

/// Format a timestamp as RFC3339, falling back to the default rendering.
fn format_date(date: OffsetDateTime) -> String {
    date.format(&Rfc3339).unwrap_or_else(|_| date.to_string())
}

// ============================================================================
// Dashboard panel
// ============================================================================

/// Format the settled label view as a text panel.
#[must_use]
pub fn format_panel_text(view: &LabelView, opts: &FormatOptions) -> String {
    let mut out = format_title("Health Metrics", opts.no_color);
    out.push('\n');

    for (label, value) in view.rows() {
        let label = format!("{}:", label);
        if value == UNSET && !opts.no_color {
            out.push_str(&format!("  {:<LABEL_WIDTH$} {}\n", label, value.dimmed()));
        } else {
            out.push_str(&format!("  {:<LABEL_WIDTH$} {}\n", label, value));
        }
    }

    if let Some(message) = view.error() {
        out.push('\n');
        out.push_str(&format_error(message, opts.no_color));
        out.push('\n');
    }
    out
}

/// Format the settled display state as JSON.
pub fn format_panel_json(state: &DisplayState, opts: &FormatOptions) -> Result<String> {
    opts.as_json(state)
}

// ============================================================================
// Readings listing
// ============================================================================

/// Format a metric's dated readings as text, newest first.
#[must_use]
pub fn format_readings_text(
    metric: MetricType,
    range: DateRange,
    readings: &[Reading],
    opts: &FormatOptions,
) -> String {
    let title = format!(
        "{} on {} ({})",
        metric.display_name(),
        range.start.date(),
        metric.unit()
    );
    let mut out = format_title(&title, opts.no_color);
    out.push('\n');

    if readings.is_empty() {
        out.push_str(&format!("  {}\n", NO_READINGS));
        return out;
    }

    for reading in readings {
        out.push_str(&format!(
            "  {}  {}\n",
            format_date(reading.date),
            format_value(reading.value)
        ));
    }
    out
}

/// Format a metric's dated readings as JSON.
pub fn format_readings_json(
    metric: MetricType,
    range: DateRange,
    readings: &[Reading],
    opts: &FormatOptions,
) -> Result<String> {
    #[derive(Serialize)]
    struct ReadingsOutput<'a> {
        metric: MetricType,
        unit: String,
        #[serde(with = "time::serde::rfc3339")]
        start: OffsetDateTime,
        #[serde(with = "time::serde::rfc3339")]
        end: OffsetDateTime,
        count: usize,
        readings: &'a [Reading],
    }

    opts.as_json(&ReadingsOutput {
        metric,
        unit: metric.unit().to_string(),
        start: range.start,
        end: range.end,
        count: readings.len(),
        readings,
    })
}
