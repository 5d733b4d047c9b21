//! Helpers for selecting and summarizing sample lists.
//!
//! Store implementations share these so that the mock and fixture stores
//! answer queries the same way.

use tracing::debug;

use vitals_types::{DateRange, MetricType, Reading, SampleQuery};

/// The most recent reading of a list sorted newest first.
///
/// "Latest wins": this is simply the first element, with no averaging.
#[must_use]
pub fn latest(readings: &[Reading]) -> Option<&Reading> {
    readings.first()
}

/// One sample in store order, as answered by a limit-1 query with no sort.
#[must_use]
pub fn first_sample(metric: MetricType, samples: &[Reading]) -> Option<Reading> {
    SampleQuery::new(metric)
        .limit(1)
        .apply(samples)
        .into_iter()
        .next()
}

/// Sum of the samples whose end date falls in `range`, or `None` if there are none.
#[must_use]
pub fn cumulative_sum(samples: &[Reading], range: DateRange) -> Option<f64> {
    let mut in_range = samples.iter().filter(|r| range.contains(r.date)).peekable();
    in_range.peek()?;
    Some(in_range.map(|r| r.value).sum())
}

/// Log retrieved samples for diagnostics.
pub fn log_samples(metric: MetricType, readings: &[Reading]) {
    debug!(%metric, count = readings.len(), "retrieved samples");
    for reading in readings {
        debug!(
            %metric,
            value = reading.value,
            unit = %metric.unit(),
            date = %reading.date,
            "sample"
        );
    }
}
