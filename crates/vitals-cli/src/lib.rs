//! Command-line dashboard for personal health metrics.
//!
//! This crate provides the `vitals` binary, a terminal front end for the
//! health data dashboard in `vitals-core`.
//!
//! # Features
//!
//! - **Dashboard**: Load height, weight, steps, heart rate and blood pressure in one go
//! - **Live updates**: Echo each field as its fetch completes
//! - **Dated readings**: List today's samples for any metric, including blood oxygen
//! - **Multiple output formats**: Text and JSON output support
//! - **Configuration file**: Persistent default store, format and UTC offset
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `show` | Load the dashboard and print every metric |
//! | `readings` | List today's readings for one metric |
//! | `config` | Manage CLI configuration |
//!
//! # Health Stores
//!
//! Health data is read from a JSON fixture file (see
//! [`vitals_core::FixtureStore`]), or from built-in sample data with `--demo`.
//!
//! # Configuration
//!
//! The CLI stores configuration in `~/.config/vitals/config.toml` (or platform equivalent).
//! Configuration options include:
//!
//! - `store`: Default store file
//! - `format`: Default output format
//! - `no_color`: Disable colored output
//! - `utc_offset`: Fixed offset for day boundaries, e.g. `+02:00`
//!
//! # Environment Variables
//!
//! - `VITALS_STORE`: Default store file (overridden by `--store` flag)
//! - `NO_COLOR`: Disable colored output when set
//! - `RUST_LOG`: Log filter when neither `--verbose` nor `--quiet` is given
//!
//! # Examples
//!
//! Show the dashboard:
//! ```bash
//! vitals show --store today.json
//! ```
//!
//! Watch fields arrive, then print JSON:
//! ```bash
//! vitals show --demo --live --format json
//! ```
//!
//! List today's heart rate samples as of a fixed time:
//! ```bash
//! vitals readings --metric heart-rate --store today.json --at 2026-10-17T18:00:00+02:00
//! ```

// Display surface, publicly exposed for embedding the dashboard elsewhere
pub mod view;

// Re-export core dependencies for convenience
pub use vitals_core;
pub use vitals_types;
