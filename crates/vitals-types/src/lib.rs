//! Platform-agnostic types for health metric readings.
//!
//! This crate provides the shared vocabulary used by the health data
//! facade (vitals-core) and the command-line client (vitals-cli).
//!
//! # Features
//!
//! - Metric types and their canonical units
//! - Timestamped readings
//! - Date ranges and dated sample-list query parameters
//! - Error types for parsing
//!
//! # Example
//!
//! ```
//! use time::macros::datetime;
//! use vitals_types::{DateRange, MetricType, Reading, SampleQuery};
//!
//! let now = datetime!(2026-10-17 10:00 UTC);
//! let samples = [
//!     Reading::new(64.0, datetime!(2026-10-17 07:00 UTC)),
//!     Reading::new(71.0, datetime!(2026-10-17 09:00 UTC)),
//! ];
//!
//! let query = SampleQuery::today(MetricType::HeartRate, DateRange::day_containing(now));
//! let newest_first = query.apply(&samples);
//! assert_eq!(newest_first[0].value, 71.0);
//! ```

pub mod error;
pub mod query;
pub mod types;

pub use error::{ParseError, ParseResult};
pub use query::{DateRange, SampleQuery, SortOrder, TODAY_SAMPLE_LIMIT};
pub use types::{MetricType, Reading, Unit};
