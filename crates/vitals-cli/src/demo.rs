//! Demo mode with deterministic mock data.
//!
//! Lets `vitals show --demo` run without a store file. Samples are placed
//! relative to the evaluation time so that "today" always has data.

use time::{Duration, OffsetDateTime};
use vitals_core::{MockHealthStore, MockHealthStoreBuilder};
use vitals_types::{MetricType, Reading};

/// Build a mock store holding a plausible morning of samples.
pub fn create_demo_store(now: OffsetDateTime) -> MockHealthStore {
    MockHealthStoreBuilder::new()
        .sample(MetricType::Height, 1.76, now - Duration::days(120))
        .sample(MetricType::BodyMass, 72.4, now - Duration::days(2))
        .samples(MetricType::StepCount, generate_step_history(now, 12))
        .samples(MetricType::HeartRate, generate_heart_rate_history(now, 16))
        .sample(MetricType::BloodPressureSystolic, 121.0, now - Duration::minutes(40))
        .sample(MetricType::BloodPressureDiastolic, 79.0, now - Duration::minutes(40))
        .samples(
            MetricType::OxygenSaturation,
            [
                Reading::new(0.98, now - Duration::minutes(10)),
                Reading::new(0.97, now - Duration::minutes(70)),
            ],
        )
        .build()
}

/// Step batches at 20-minute intervals, oldest first.
fn generate_step_history(now: OffsetDateTime, count: i64) -> Vec<Reading> {
    (0..count)
        .rev()
        .map(|i| {
            let steps = 180.0 + ((i * 37) % 220) as f64;
            Reading::new(steps, now - Duration::minutes(i * 20))
        })
        .collect()
}

/// Resting heart rate samples at 15-minute intervals, oldest first.
fn generate_heart_rate_history(now: OffsetDateTime, count: i64) -> Vec<Reading> {
    (0..count)
        .rev()
        .map(|i| {
            // Gentle drift between 62 and 77 bpm
            let bpm = 62.0 + ((i * 7) % 16) as f64;
            Reading::new(bpm, now - Duration::minutes(i * 15))
        })
        .collect()
}
