//! Config command implementation.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::cli::{ConfigAction, ConfigKey, OutputFormat, parse_bool_arg};
use crate::config::{Config, parse_utc_offset};
use crate::util::write_output;

pub fn cmd_config(action: ConfigAction, output: Option<&PathBuf>) -> Result<()> {
    let content = run_config(action, &Config::path())?;
    write_output(output, &content)
}

/// Apply a config action to the file at `path` and return what to print.
fn run_config(action: ConfigAction, path: &Path) -> Result<String> {
    match action {
        ConfigAction::Path => Ok(format!("{}\n", path.display())),
        ConfigAction::Show => {
            let config = Config::load_from(path);
            let content = toml::to_string_pretty(&config).context("Failed to serialize config")?;
            Ok(content)
        }
        ConfigAction::Get { key } => {
            let config = Config::load_from(path);
            Ok(match get_value(&config, key) {
                Some(value) => format!("{}\n", value),
                None => "(not set)\n".to_string(),
            })
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load_from(path);
            set_value(&mut config, key, &value)?;
            config.save_to(path)?;
            Ok(String::new())
        }
        ConfigAction::Unset { key } => {
            let mut config = Config::load_from(path);
            unset_value(&mut config, key);
            config.save_to(path)?;
            Ok(String::new())
        }
    }
}

fn get_value(config: &Config, key: ConfigKey) -> Option<String> {
    match key {
        ConfigKey::Store => config.store.as_ref().map(|p| p.display().to_string()),
        ConfigKey::Format => config.format.clone(),
        ConfigKey::NoColor => Some(config.no_color.to_string()),
        ConfigKey::UtcOffset => config.utc_offset.clone(),
    }
}

fn set_value(config: &mut Config, key: ConfigKey, value: &str) -> Result<()> {
    match key {
        ConfigKey::Store => config.store = Some(PathBuf::from(value)),
        ConfigKey::Format => {
            value
                .parse::<OutputFormat>()
                .map_err(anyhow::Error::msg)?;
            config.format = Some(value.to_lowercase());
        }
        ConfigKey::NoColor => {
            config.no_color = parse_bool_arg(value).map_err(anyhow::Error::msg)?;
        }
        ConfigKey::UtcOffset => {
            parse_utc_offset(value)?;
            config.utc_offset = Some(value.trim().to_string());
        }
    }
    Ok(())
}

fn unset_value(config: &mut Config, key: ConfigKey) {
    match key {
        ConfigKey::Store => config.store = None,
        ConfigKey::Format => config.format = None,
        ConfigKey::NoColor => config.no_color = false,
        ConfigKey::UtcOffset => config.utc_offset = None,
    }
}
