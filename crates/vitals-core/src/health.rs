//! Health data facade.
//!
//! [`HealthData`] turns "get metric X" requests into calls against a
//! [`HealthStore`] and normalizes the answers: a single value for height and
//! weight, a daily total for steps, and the dated list of today's samples for
//! heart rate, blood pressure and blood oxygen.

use std::fmt;
use std::sync::Arc;

use time::{OffsetDateTime, UtcOffset};
use tracing::{debug, info};

use vitals_types::{DateRange, MetricType, Reading, SampleQuery};

use crate::error::Result;
use crate::readings::log_samples;
use crate::traits::HealthStore;

/// Facade over a health data store, one method per metric.
///
/// "Today" is the calendar day in the facade's UTC offset. Without a fixed
/// offset, the local offset in effect at the reference instant is used, so a
/// date on the other side of a daylight saving change gets its own offset.
/// When the local offset cannot be determined, UTC is used.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use vitals_core::{HealthData, MockHealthStoreBuilder};
/// use vitals_types::MetricType;
///
/// # #[tokio::main]
/// # async fn main() -> vitals_core::Result<()> {
/// let store = MockHealthStoreBuilder::new()
///     .sample(MetricType::Height, 1.82, time::OffsetDateTime::now_utc())
///     .build();
/// let health = HealthData::new(Arc::new(store));
///
/// assert!(health.authorize().await?);
/// assert_eq!(health.height().await?, Some(1.82));
/// assert_eq!(health.weight().await?, None);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct HealthData {
    store: Arc<dyn HealthStore>,
    offset: Option<UtcOffset>,
    reference_time: Option<OffsetDateTime>,
}

impl fmt::Debug for HealthData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HealthData")
            .field("offset", &self.offset)
            .field("reference_time", &self.reference_time)
            .finish_non_exhaustive()
    }
}

impl HealthData {
    /// Create a facade over `store` using the local UTC offset.
    pub fn new(store: Arc<dyn HealthStore>) -> Self {
        Self {
            store,
            offset: None,
            reference_time: None,
        }
    }

    /// Use a fixed UTC offset for "today" instead of the detected one.
    #[must_use]
    pub fn with_offset(mut self, offset: UtcOffset) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Evaluate "today" as of `now` instead of the current time.
    #[must_use]
    pub fn at(mut self, now: OffsetDateTime) -> Self {
        self.reference_time = Some(now);
        self
    }

    /// The UTC offset used for today's day boundaries.
    pub fn offset(&self) -> UtcOffset {
        self.offset_at(self.now())
    }

    /// Today's window: local midnight to the next local midnight.
    pub fn today_range(&self) -> DateRange {
        self.today_range_at(self.now())
    }

    /// The day window containing `now`, in the offset in effect at `now`.
    pub fn today_range_at(&self, now: OffsetDateTime) -> DateRange {
        DateRange::day_containing(now.to_offset(self.offset_at(now)))
    }

    fn now(&self) -> OffsetDateTime {
        self.reference_time.unwrap_or_else(OffsetDateTime::now_utc)
    }

    fn offset_at(&self, now: OffsetDateTime) -> UtcOffset {
        self.offset.unwrap_or_else(|| local_offset_at(now))
    }

    /// Request read access for [`MetricType::AUTHORIZATION_SET`] in one call.
    pub async fn authorize(&self) -> Result<bool> {
        let granted = self
            .store
            .request_authorization(&MetricType::AUTHORIZATION_SET)
            .await?;
        info!(granted, "health data authorization answered");
        Ok(granted)
    }

    /// Most recent height sample, in meters.
    pub async fn height(&self) -> Result<Option<f64>> {
        self.single_value(MetricType::Height).await
    }

    /// Most recent weight sample, in kilograms.
    pub async fn weight(&self) -> Result<Option<f64>> {
        self.single_value(MetricType::BodyMass).await
    }

    /// Total steps for today. No samples yields `0`, not absence.
    pub async fn step_count(&self) -> Result<u64> {
        let range = self.today_range();
        debug!(%range, "querying cumulative step count");
        let sum = self
            .store
            .cumulative_sum(MetricType::StepCount, range)
            .await?;
        let steps = sum.map_or(0, |total| total.max(0.0) as u64);
        debug!(steps, "retrieved step count");
        Ok(steps)
    }

    /// Today's heart rate samples, newest first, at most 10.
    pub async fn todays_heart_rates(&self) -> Result<Vec<Reading>> {
        self.today_readings(MetricType::HeartRate).await
    }

    /// Today's systolic blood pressure samples, newest first, at most 10.
    pub async fn today_systolic_bp(&self) -> Result<Vec<Reading>> {
        self.today_readings(MetricType::BloodPressureSystolic).await
    }

    /// Today's diastolic blood pressure samples, newest first, at most 10.
    pub async fn today_diastolic_bp(&self) -> Result<Vec<Reading>> {
        self.today_readings(MetricType::BloodPressureDiastolic).await
    }

    /// Today's blood oxygen samples, newest first, at most 10.
    pub async fn today_blood_oxygen(&self) -> Result<Vec<Reading>> {
        self.today_readings(MetricType::OxygenSaturation).await
    }

    /// Today's samples for any metric, newest first, at most 10.
    pub async fn today_readings(&self, metric: MetricType) -> Result<Vec<Reading>> {
        let query = SampleQuery::today(metric, self.today_range());
        debug!(?query, "querying today's samples");
        let readings = self.store.samples(&query).await?;
        log_samples(metric, &readings);
        Ok(readings)
    }

    async fn single_value(&self, metric: MetricType) -> Result<Option<f64>> {
        let sample = self.store.latest_sample(metric).await?;
        match &sample {
            Some(reading) => log_samples(metric, std::slice::from_ref(reading)),
            None => debug!(%metric, "no samples"),
        }
        Ok(sample.map(|reading| reading.value))
    }
}

/// The local UTC offset in effect at `instant`, falling back to UTC when it
/// cannot be determined.
pub fn local_offset_at(instant: OffsetDateTime) -> UtcOffset {
    UtcOffset::local_offset_at(instant).unwrap_or(UtcOffset::UTC)
}
