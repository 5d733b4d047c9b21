//! Readings command implementation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use vitals_core::Error;
use vitals_types::MetricType;

use crate::cli::{OutputFormat, StoreArgs};
use crate::config::Config;
use crate::format::{FormatOptions, format_readings_json, format_readings_text};
use crate::util::{build_health, write_output};

pub async fn cmd_readings(
    store: &StoreArgs,
    metric: MetricType,
    format: OutputFormat,
    output: Option<&PathBuf>,
    config: &Config,
    opts: &FormatOptions,
) -> Result<()> {
    let health = build_health(store, config)?;

    let granted = health
        .authorize()
        .await
        .context("Failed to request health data authorization")?;
    if !granted {
        return Err(Error::AuthorizationDenied.into());
    }

    let range = health.today_range();
    let readings = health
        .today_readings(metric)
        .await
        .with_context(|| format!("Failed to read {}", metric.display_name()))?;

    let content = match format {
        OutputFormat::Text => format_readings_text(metric, range, &readings, opts),
        OutputFormat::Json => format_readings_json(metric, range, &readings, opts)?,
    };

    write_output(output, &content)?;
    Ok(())
}
