//! Mock health store implementation for testing.
//!
//! This module provides a mock store that can be used for unit testing
//! without access to a platform health data store.
//!
//! The [`MockHealthStore`] implements the [`HealthStore`] trait, allowing it
//! to be used interchangeably with real stores in generic code.
//!
//! # Features
//!
//! - **Failure injection**: Fail authorization, or queries for specific metrics
//! - **Latency simulation**: Delay queries per metric to reorder completions
//! - **Call accounting**: Count authorization requests and queries

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use time::OffsetDateTime;
use tokio::sync::RwLock;

use vitals_types::{DateRange, MetricType, Reading, SampleQuery};

use crate::error::{Error, Result};
use crate::readings::{cumulative_sum, first_sample};
use crate::traits::HealthStore;

/// How the mock answers an authorization request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockAuthorization {
    /// Access granted.
    Granted,
    /// Answered without granting access and without an error.
    Denied,
    /// The request itself failed with this message.
    Fail(String),
}

/// A mock health data store for testing.
///
/// # Example
///
/// ```
/// use vitals_core::{HealthStore, MockHealthStore};
/// use vitals_types::MetricType;
///
/// #[tokio::main]
/// async fn main() {
///     let store = MockHealthStore::new();
///     store
///         .add_sample(MetricType::Height, 1.75, time::OffsetDateTime::now_utc())
///         .await;
///
///     let sample = store.latest_sample(MetricType::Height).await.unwrap();
///     assert_eq!(sample.map(|s| s.value), Some(1.75));
/// }
/// ```
pub struct MockHealthStore {
    samples: RwLock<HashMap<MetricType, Vec<Reading>>>,
    authorization: RwLock<MockAuthorization>,
    failures: RwLock<HashMap<MetricType, String>>,
    latency: RwLock<HashMap<MetricType, Duration>>,
    requested_types: RwLock<Vec<MetricType>>,
    metric_queries: RwLock<HashMap<MetricType, u32>>,
    authorization_requests: AtomicU32,
    query_count: AtomicU32,
}

impl std::fmt::Debug for MockHealthStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockHealthStore")
            .field(
                "authorization_requests",
                &self.authorization_requests.load(Ordering::Relaxed),
            )
            .field("query_count", &self.query_count.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

impl Default for MockHealthStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MockHealthStore {
    /// Create an empty store that grants authorization.
    pub fn new() -> Self {
        MockHealthStoreBuilder::new().build()
    }

    // --- Test control methods ---

    /// Add one sample.
    pub async fn add_sample(&self, metric: MetricType, value: f64, date: OffsetDateTime) {
        self.samples
            .write()
            .await
            .entry(metric)
            .or_default()
            .push(Reading::new(value, date));
    }

    /// Replace how authorization is answered.
    pub async fn set_authorization(&self, authorization: MockAuthorization) {
        *self.authorization.write().await = authorization;
    }

    /// Make every query for `metric` fail with `message`, or clear it with `None`.
    pub async fn set_failure(&self, metric: MetricType, message: Option<&str>) {
        let mut failures = self.failures.write().await;
        match message {
            Some(msg) => {
                failures.insert(metric, msg.to_string());
            }
            None => {
                failures.remove(&metric);
            }
        }
    }

    /// Delay every query for `metric`.
    ///
    /// Set to `Duration::ZERO` to disable latency simulation.
    pub async fn set_latency(&self, metric: MetricType, latency: Duration) {
        self.latency.write().await.insert(metric, latency);
    }

    /// Number of authorization requests received.
    pub fn authorization_requests(&self) -> u32 {
        self.authorization_requests.load(Ordering::Relaxed)
    }

    /// Number of metric queries received, of any kind.
    pub fn query_count(&self) -> u32 {
        self.query_count.load(Ordering::Relaxed)
    }

    /// Number of queries received for `metric`.
    pub async fn queries_for(&self, metric: MetricType) -> u32 {
        self.metric_queries
            .read()
            .await
            .get(&metric)
            .copied()
            .unwrap_or(0)
    }

    /// Read types passed to the most recent authorization request.
    pub async fn requested_types(&self) -> Vec<MetricType> {
        self.requested_types.read().await.clone()
    }

    async fn begin_query(&self, metric: MetricType) -> Result<Vec<Reading>> {
        self.query_count.fetch_add(1, Ordering::Relaxed);
        *self.metric_queries.write().await.entry(metric).or_default() += 1;

        let latency = self.latency.read().await.get(&metric).copied();
        if let Some(latency) = latency.filter(|l| !l.is_zero()) {
            tokio::time::sleep(latency).await;
        }

        if let Some(message) = self.failures.read().await.get(&metric) {
            return Err(Error::store(message.clone()));
        }

        Ok(self
            .samples
            .read()
            .await
            .get(&metric)
            .cloned()
            .unwrap_or_default())
    }
}

#[async_trait]
impl HealthStore for MockHealthStore {
    async fn request_authorization(&self, read_types: &[MetricType]) -> Result<bool> {
        self.authorization_requests.fetch_add(1, Ordering::Relaxed);
        *self.requested_types.write().await = read_types.to_vec();

        match &*self.authorization.read().await {
            MockAuthorization::Granted => Ok(true),
            MockAuthorization::Denied => Ok(false),
            MockAuthorization::Fail(message) => Err(Error::store(message.clone())),
        }
    }

    async fn latest_sample(&self, metric: MetricType) -> Result<Option<Reading>> {
        let samples = self.begin_query(metric).await?;
        Ok(first_sample(metric, &samples))
    }

    async fn cumulative_sum(&self, metric: MetricType, range: DateRange) -> Result<Option<f64>> {
        let samples = self.begin_query(metric).await?;
        Ok(cumulative_sum(&samples, range))
    }

    async fn samples(&self, query: &SampleQuery) -> Result<Vec<Reading>> {
        let samples = self.begin_query(query.metric).await?;
        Ok(query.apply(&samples))
    }
}

/// Builder for creating mock stores with custom contents.
#[derive(Debug, Clone)]
pub struct MockHealthStoreBuilder {
    samples: HashMap<MetricType, Vec<Reading>>,
    authorization: MockAuthorization,
    failures: HashMap<MetricType, String>,
    latency: HashMap<MetricType, Duration>,
}

impl Default for MockHealthStoreBuilder {
    fn default() -> Self {
        Self {
            samples: HashMap::new(),
            authorization: MockAuthorization::Granted,
            failures: HashMap::new(),
            latency: HashMap::new(),
        }
    }
}

impl MockHealthStoreBuilder {
    /// Create a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one sample.
    #[must_use]
    pub fn sample(mut self, metric: MetricType, value: f64, date: OffsetDateTime) -> Self {
        self.samples
            .entry(metric)
            .or_default()
            .push(Reading::new(value, date));
        self
    }

    /// Add several samples, kept in the given order.
    #[must_use]
    pub fn samples(mut self, metric: MetricType, readings: impl IntoIterator<Item = Reading>) -> Self {
        self.samples.entry(metric).or_default().extend(readings);
        self
    }

    /// Set how authorization is answered.
    #[must_use]
    pub fn authorization(mut self, authorization: MockAuthorization) -> Self {
        self.authorization = authorization;
        self
    }

    /// Answer authorization with "not granted".
    #[must_use]
    pub fn deny_authorization(self) -> Self {
        self.authorization(MockAuthorization::Denied)
    }

    /// Fail the authorization request with `message`.
    #[must_use]
    pub fn fail_authorization(self, message: &str) -> Self {
        self.authorization(MockAuthorization::Fail(message.to_string()))
    }

    /// Fail every query for `metric` with `message`.
    #[must_use]
    pub fn fail(mut self, metric: MetricType, message: &str) -> Self {
        self.failures.insert(metric, message.to_string());
        self
    }

    /// Delay every query for `metric`.
    #[must_use]
    pub fn latency(mut self, metric: MetricType, latency: Duration) -> Self {
        self.latency.insert(metric, latency);
        self
    }

    /// Build the mock store.
    #[must_use]
    pub fn build(self) -> MockHealthStore {
        MockHealthStore {
            samples: RwLock::new(self.samples),
            authorization: RwLock::new(self.authorization),
            failures: RwLock::new(self.failures),
            latency: RwLock::new(self.latency),
            requested_types: RwLock::new(Vec::new()),
            metric_queries: RwLock::new(HashMap::new()),
            authorization_requests: AtomicU32::new(0),
            query_count: AtomicU32::new(0),
        }
    }
}
