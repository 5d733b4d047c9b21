//! File-backed health store.
//!
//! A [`FixtureStore`] answers every [`HealthStore`] call from a JSON document,
//! which lets the command line tool run against recorded data on any platform.
//!
//! ```json
//! {
//!   "authorized": true,
//!   "error": null,
//!   "samples": {
//!     "height": [{ "value": 1.82, "date": "2026-10-01T08:00:00Z" }],
//!     "heart-rate": [{ "value": 72.0, "date": "2026-10-17T09:30:00+02:00" }]
//!   },
//!   "failures": { "body-mass": "Protected health data is inaccessible" }
//! }
//! ```
//!
//! Every key is optional. `error` makes the authorization request itself fail;
//! `failures` makes every query for one metric fail with the given message.

use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use vitals_types::{DateRange, MetricType, Reading, SampleQuery};

use crate::error::{Error, Result};
use crate::readings::{cumulative_sum, first_sample};
use crate::traits::HealthStore;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FixtureDocument {
    #[serde(default = "default_authorized")]
    authorized: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    samples: HashMap<String, Vec<Reading>>,
    #[serde(default)]
    failures: HashMap<String, String>,
}

fn default_authorized() -> bool {
    true
}

/// A health store loaded from a JSON fixture.
#[derive(Debug, Clone)]
pub struct FixtureStore {
    authorized: bool,
    error: Option<String>,
    samples: HashMap<MetricType, Vec<Reading>>,
    failures: HashMap<MetricType, String>,
}

impl FixtureStore {
    /// Load a fixture file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading fixture store");
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Parse a fixture document.
    ///
    /// Metric keys accept the same spellings as [`MetricType::from_str`].
    pub fn from_json(json: &str) -> Result<Self> {
        let doc: FixtureDocument = serde_json::from_str(json)?;

        let mut samples = HashMap::new();
        for (key, readings) in doc.samples {
            let metric = MetricType::from_str(&key)?;
            samples
                .entry(metric)
                .or_insert_with(Vec::new)
                .extend(readings);
        }

        let failures = doc
            .failures
            .into_iter()
            .map(|(key, message)| Ok::<_, Error>((MetricType::from_str(&key)?, message)))
            .collect::<Result<HashMap<_, _>>>()?;

        Ok(Self {
            authorized: doc.authorized,
            error: doc.error,
            samples,
            failures,
        })
    }

    /// Metrics that have at least one sample, in canonical order.
    pub fn metrics(&self) -> Vec<MetricType> {
        MetricType::ALL
            .into_iter()
            .filter(|metric| self.samples.get(metric).is_some_and(|s| !s.is_empty()))
            .collect()
    }

    /// All samples recorded for `metric`, in file order.
    pub fn samples_for(&self, metric: MetricType) -> &[Reading] {
        self.samples.get(&metric).map(Vec::as_slice).unwrap_or(&[])
    }

    fn query(&self, metric: MetricType) -> Result<&[Reading]> {
        match self.failures.get(&metric) {
            Some(message) => Err(Error::store(message.clone())),
            None => Ok(self.samples_for(metric)),
        }
    }
}

#[async_trait]
impl HealthStore for FixtureStore {
    async fn request_authorization(&self, read_types: &[MetricType]) -> Result<bool> {
        debug!(types = read_types.len(), "fixture authorization request");
        match &self.error {
            Some(message) => Err(Error::store(message.clone())),
            None => Ok(self.authorized),
        }
    }

    async fn latest_sample(&self, metric: MetricType) -> Result<Option<Reading>> {
        Ok(first_sample(metric, self.query(metric)?))
    }

    async fn cumulative_sum(&self, metric: MetricType, range: DateRange) -> Result<Option<f64>> {
        Ok(cumulative_sum(self.query(metric)?, range))
    }

    async fn samples(&self, query: &SampleQuery) -> Result<Vec<Reading>> {
        Ok(query.apply(self.query(query.metric)?))
    }
}
