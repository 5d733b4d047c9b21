//! Health data facade and dashboard state for personal health metrics.
//!
//! This crate reads height, weight, daily step count, heart rate and blood
//! pressure from a health data store and turns them into display-ready
//! strings.
//!
//! # Features
//!
//! - **Store abstraction**: [`HealthStore`] trait with mock and file-backed implementations
//! - **Facade**: [`HealthData`] normalizes absence, daily totals and "today" windows
//! - **Formatting**: whole-number rounding and `"No Readings"` placeholders
//! - **Dashboard**: concurrent one-shot load with observable [`DisplayState`]
//! - **Events**: [`DisplayEvent`] stream for binding any display surface
//!
//! # Display Rules
//!
//! | Field | Source | Rendering |
//! |-------|--------|-----------|
//! | Height | most recent sample | `"<N> meters"` |
//! | Weight | most recent sample | `"<N> kiloGrams"` |
//! | Step Count | today's cumulative sum | `"<N> steps"`, `0` when empty |
//! | Heart Rate | today's samples, newest first | value or `"No Readings"` |
//! | Blood Pressure | today's systolic and diastolic | `"<sys>/<dia>"` or `"No Readings"` |
//!
//! Height and weight stay blank when the store has no sample at all.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use vitals_core::{Dashboard, HealthData, MockHealthStoreBuilder};
//! use vitals_types::MetricType;
//!
//! #[tokio::main]
//! async fn main() {
//!     let now = time::OffsetDateTime::now_utc();
//!     let store = MockHealthStoreBuilder::new()
//!         .sample(MetricType::HeartRate, 72.0, now)
//!         .build();
//!
//!     let health = HealthData::new(Arc::new(store)).at(now);
//!     let state = Dashboard::new(health).load().await;
//!
//!     assert_eq!(state.heart_rate.as_deref(), Some("72"));
//!     assert_eq!(state.height, None);
//! }
//! ```

pub mod dashboard;
pub mod error;
pub mod events;
pub mod fixture;
pub mod format;
pub mod health;
pub mod mock;
pub mod readings;
pub mod state;
pub mod traits;

// Core exports
pub use dashboard::Dashboard;
pub use error::{Error, Result};
pub use health::{HealthData, local_offset_at};
pub use traits::HealthStore;

pub use events::{DisplayEvent, EventDispatcher, EventReceiver, EventSender};
pub use fixture::FixtureStore;
pub use format::NO_READINGS;
pub use mock::{MockAuthorization, MockHealthStore, MockHealthStoreBuilder};
pub use state::{DisplayField, DisplayState, Phase};

// Re-export from vitals-types
pub use vitals_types::{DateRange, MetricType, Reading, SampleQuery, SortOrder, Unit};
