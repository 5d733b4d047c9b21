//! Configuration file management.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use time::UtcOffset;
use time::macros::format_description;
use tracing::warn;

use crate::cli::OutputFormat;

/// Configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Default store file
    #[serde(default)]
    pub store: Option<PathBuf>,

    /// Default output format
    #[serde(default)]
    pub format: Option<String>,

    /// Disable colored output
    #[serde(default)]
    pub no_color: bool,

    /// Fixed UTC offset for day boundaries, e.g. "+02:00"
    #[serde(default)]
    pub utc_offset: Option<String>,
}

impl Config {
    /// Get the config file path
    pub fn path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("vitals")
            .join("config.toml")
    }

    /// Load config from file, or return default if not found
    pub fn load() -> Self {
        Self::load_from(&Self::path())
    }

    /// Load config from a specific file, or return default if missing or invalid
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        warn!("Failed to parse config {}: {}", path.display(), e);
                    }
                },
                Err(e) => {
                    warn!("Failed to read config {}: {}", path.display(), e);
                }
            }
        }
        Self::default()
    }

    /// Save config to a file, creating its directory
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }
}

/// Resolve the store file from arg (or VITALS_STORE, via clap) then config.
pub fn resolve_store(store: Option<PathBuf>, config: &Config) -> Option<PathBuf> {
    store.or_else(|| config.store.clone())
}

/// Resolve output format: explicit flag, then config, then text.
pub fn resolve_format(format: Option<OutputFormat>, config: &Config) -> OutputFormat {
    format
        .or_else(|| {
            let configured = config.format.as_deref()?;
            match configured.parse() {
                Ok(format) => Some(format),
                Err(e) => {
                    warn!("Ignoring configured format: {}", e);
                    None
                }
            }
        })
        .unwrap_or_default()
}

/// Resolve a fixed UTC offset for day boundaries from config.
///
/// `None` means the local offset in effect at the reference instant.
pub fn resolve_offset(config: &Config) -> Result<Option<UtcOffset>> {
    config.utc_offset.as_deref().map(parse_utc_offset).transpose()
}

/// Parse a UTC offset such as "+02:00", "-05:30", "Z" or "UTC".
pub fn parse_utc_offset(s: &str) -> Result<UtcOffset> {
    let trimmed = s.trim();
    if trimmed.eq_ignore_ascii_case("z") || trimmed.eq_ignore_ascii_case("utc") {
        return Ok(UtcOffset::UTC);
    }
    UtcOffset::parse(
        trimmed,
        format_description!("[offset_hour sign:mandatory]:[offset_minute]"),
    )
    .map_err(|e| anyhow!("Invalid UTC offset '{}' (expected e.g. +02:00): {}", s, e))
}
