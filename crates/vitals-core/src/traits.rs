//! Trait abstractions for health data store access.
//!
//! This module provides the [`HealthStore`] trait that abstracts over the
//! platform health data store, the JSON fixture store and mock stores for
//! testing.

use async_trait::async_trait;

use vitals_types::{DateRange, MetricType, Reading, SampleQuery};

use crate::error::Result;

/// Capability surface of an external health data store.
///
/// One method per query kind. Implementations own all query execution and
/// scheduling; callers never retry, page or cache.
///
/// # Example
///
/// ```ignore
/// use vitals_core::{HealthStore, Result};
/// use vitals_types::MetricType;
///
/// async fn print_height<S: HealthStore>(store: &S) -> Result<()> {
///     if let Some(sample) = store.latest_sample(MetricType::Height).await? {
///         println!("Height: {} m", sample.value);
///     }
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait HealthStore: Send + Sync {
    /// Request read access to `read_types` in a single call.
    ///
    /// Returns one aggregate flag; partial grants are not reported.
    async fn request_authorization(&self, read_types: &[MetricType]) -> Result<bool>;

    /// Fetch one sample of `metric` (limit 1, unspecified order).
    ///
    /// `Ok(None)` means the store has no sample.
    async fn latest_sample(&self, metric: MetricType) -> Result<Option<Reading>>;

    /// Sum every sample of `metric` whose end date falls in `range`.
    ///
    /// `Ok(None)` means there were no samples to sum.
    async fn cumulative_sum(&self, metric: MetricType, range: DateRange) -> Result<Option<f64>>;

    /// Fetch the samples selected by `query`.
    async fn samples(&self, query: &SampleQuery) -> Result<Vec<Reading>>;
}
