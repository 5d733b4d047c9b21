//! Example: Loading the Dashboard
//!
//! This example builds a mock health store with a morning's worth of
//! samples, runs the dashboard load sequence and prints each field as it
//! settles.
//!
//! Run with: `cargo run --example show_dashboard`
//! Add `RUST_LOG=debug` to see every retrieved sample.

use std::sync::Arc;
use std::time::Duration;

use time::OffsetDateTime;
use vitals_core::{Dashboard, DisplayEvent, DisplayField, HealthData, MockHealthStoreBuilder};
use vitals_types::MetricType;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let now = OffsetDateTime::now_utc();
    let minutes_ago = |minutes: i64| now - time::Duration::minutes(minutes);

    let store = MockHealthStoreBuilder::new()
        .sample(MetricType::Height, 1.78, minutes_ago(60 * 24 * 90))
        .sample(MetricType::BodyMass, 74.3, minutes_ago(60 * 24 * 2))
        .sample(MetricType::StepCount, 2150.0, minutes_ago(45))
        .sample(MetricType::HeartRate, 68.0, minutes_ago(5))
        .sample(MetricType::HeartRate, 74.0, minutes_ago(30))
        .sample(MetricType::BloodPressureSystolic, 122.0, minutes_ago(20))
        .sample(MetricType::BloodPressureDiastolic, 81.0, minutes_ago(20))
        .latency(MetricType::StepCount, Duration::from_millis(400))
        .latency(MetricType::HeartRate, Duration::from_millis(150))
        .build();

    let dashboard = Arc::new(Dashboard::new(HealthData::new(Arc::new(store)).at(now)));
    let mut events = dashboard.subscribe();
    let handle = dashboard.start();

    println!("Loading health metrics...");
    println!();

    while let Ok(event) = events.recv().await {
        match event {
            DisplayEvent::FieldChanged { field, value } => {
                println!("  {:<15} {}", format!("{}:", field.label()), value);
            }
            DisplayEvent::ErrorChanged { message } => {
                eprintln!("  Error: {message}");
            }
            DisplayEvent::PhaseChanged { phase } if phase.is_terminal() => break,
            _ => {}
        }
    }

    let state = handle.await?;

    println!();
    println!("Fields never populated:");
    for field in DisplayField::ALL {
        if state.field(field).is_none() {
            println!("  {}", field.label());
        }
    }

    Ok(())
}
