//! Command implementations for the CLI.

mod config;
mod readings;
mod show;

pub use config::cmd_config;
pub use readings::cmd_readings;
pub use show::{ShowArgs, cmd_show};
