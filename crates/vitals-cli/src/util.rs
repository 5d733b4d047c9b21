//! Utility functions for CLI operations.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use time::OffsetDateTime;
use tracing::info;
use vitals_core::{FixtureStore, HealthData, HealthStore};

use crate::cli::StoreArgs;
use crate::config::{Config, resolve_offset, resolve_store};
use crate::demo::create_demo_store;

/// Get the store file, with helpful error message.
pub fn require_store(store: Option<PathBuf>) -> Result<PathBuf> {
    store.ok_or_else(|| {
        anyhow!(
            "No health store specified. Use --store <PATH> or set VITALS_STORE environment variable.\n\
             Run with --demo to try the dashboard with built-in sample data."
        )
    })
}

/// Open a fixture store file.
pub fn open_store(path: &Path) -> Result<FixtureStore> {
    FixtureStore::open(path)
        .with_context(|| format!("Failed to load health store: {}", path.display()))
}

/// Build the health data facade from store arguments and config.
pub fn build_health(args: &StoreArgs, config: &Config) -> Result<HealthData> {
    let now = args.at.unwrap_or_else(OffsetDateTime::now_utc);

    let store: Arc<dyn HealthStore> = if args.demo {
        info!("Using built-in demo data");
        Arc::new(create_demo_store(now))
    } else {
        let path = require_store(resolve_store(args.store.clone(), config))?;
        info!("Using health store {}", path.display());
        Arc::new(open_store(&path)?)
    };

    let health = HealthData::new(store).at(now);
    Ok(match resolve_offset(config)? {
        Some(offset) => health.with_offset(offset),
        None => health,
    })
}

/// Write output to file or stdout
pub fn write_output(output: Option<&PathBuf>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write to {}", path.display()))?;
        }
        None => {
            print!("{}", content);
            io::stdout().flush()?;
        }
    }
    Ok(())
}
