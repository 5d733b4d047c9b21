//! Show command implementation.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::debug;
use vitals_cli::view::bind;
use vitals_core::Dashboard;

use crate::cli::{OutputFormat, StoreArgs};
use crate::config::Config;
use crate::format::{FormatOptions, format_panel_json, format_panel_text};
use crate::util::{build_health, write_output};

pub struct ShowArgs<'a> {
    pub store: &'a StoreArgs,
    pub format: OutputFormat,
    pub output: Option<&'a PathBuf>,
    pub live: bool,
    pub quiet: bool,
}

pub async fn cmd_show(args: ShowArgs<'_>, config: &Config, opts: &FormatOptions) -> Result<()> {
    let health = build_health(args.store, config)?;

    let dashboard = Arc::new(Dashboard::new(health));
    let events = dashboard.subscribe();
    let handle = dashboard.start();

    // Live changes go to stderr so the panel on stdout stays parseable
    let echo = (args.live && !args.quiet).then(io::stderr);
    let view = bind(events, echo).await;
    let state = handle.await.context("Dashboard task failed")?;
    debug!(phase = %state.phase, populated = state.populated(), "dashboard settled");

    let content = match args.format {
        OutputFormat::Text => format_panel_text(&view, opts),
        OutputFormat::Json => format_panel_json(&state, opts)?,
    };

    write_output(args.output, &content)?;
    Ok(())
}
