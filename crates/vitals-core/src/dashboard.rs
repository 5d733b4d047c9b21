//! Presentation state holder.
//!
//! A [`Dashboard`] runs the one-time load sequence against a [`HealthData`]
//! facade and exposes the result as display-ready strings:
//!
//! 1. `loading = true`, request authorization.
//! 2. `loading = false`. If authorized, fetch height, weight, step count,
//!    heart rate and blood pressure concurrently; otherwise record the error
//!    and stop without fetching anything.
//! 3. Each metric writes only its own field. A failing metric leaves its field
//!    unset and overwrites the shared error message.
//!
//! Blood pressure is the one sequential chain: diastolic first, then systolic.
//!
//! State is published twice: as a latest-value snapshot through
//! [`Dashboard::watch`] and as a stream of [`DisplayEvent`]s through
//! [`Dashboard::subscribe`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::error::Error;
use crate::events::{DisplayEvent, EventDispatcher, EventReceiver};
use crate::format::{
    format_blood_pressure, format_heart_rate, format_height, format_steps, format_weight,
};
use crate::health::HealthData;
use crate::state::{DisplayField, DisplayState, Phase};

/// Orchestrates a single load run and holds the resulting display state.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use vitals_core::{Dashboard, HealthData, MockHealthStoreBuilder};
/// use vitals_types::MetricType;
///
/// # #[tokio::main]
/// # async fn main() {
/// let store = MockHealthStoreBuilder::new()
///     .sample(MetricType::BodyMass, 81.6, time::OffsetDateTime::now_utc())
///     .build();
/// let dashboard = Dashboard::new(HealthData::new(Arc::new(store)));
///
/// let state = dashboard.load().await;
/// assert_eq!(state.weight.as_deref(), Some("82 kiloGrams"));
/// assert_eq!(state.step_count.as_deref(), Some("0 steps"));
/// assert_eq!(state.heart_rate.as_deref(), Some("No Readings"));
/// # }
/// ```
#[derive(Debug)]
pub struct Dashboard {
    health: HealthData,
    state: watch::Sender<DisplayState>,
    events: EventDispatcher,
    started: AtomicBool,
}

impl Dashboard {
    /// Create an idle dashboard. Nothing is requested until [`load`](Self::load)
    /// or [`start`](Self::start).
    pub fn new(health: HealthData) -> Self {
        let (state, _) = watch::channel(DisplayState::default());
        Self {
            health,
            state,
            events: EventDispatcher::default(),
            started: AtomicBool::new(false),
        }
    }

    /// Create a dashboard and immediately start its load run on a new task.
    ///
    /// Events sent before a subscriber attaches are not replayed; use
    /// [`watch`](Self::watch) or [`state`](Self::state) to catch up.
    pub fn spawn(health: HealthData) -> (Arc<Self>, JoinHandle<DisplayState>) {
        let dashboard = Arc::new(Self::new(health));
        let handle = dashboard.start();
        (dashboard, handle)
    }

    /// Run [`load`](Self::load) on a new task.
    pub fn start(self: &Arc<Self>) -> JoinHandle<DisplayState> {
        let runner = Arc::clone(self);
        tokio::spawn(async move { runner.load().await })
    }

    /// Run the load sequence and return the settled state.
    ///
    /// The sequence runs once. Later calls wait for that run and return its
    /// result without issuing any request.
    pub async fn load(&self) -> DisplayState {
        if self.started.swap(true, Ordering::SeqCst) {
            debug!("dashboard already started; waiting for the existing run");
            return self.settled().await;
        }

        self.set_phase(Phase::Authorizing);
        self.set_loading(true);
        let authorization = self.health.authorize().await;
        self.set_loading(false);

        match authorization {
            Ok(true) => {
                self.set_phase(Phase::Fetching);
                futures::join!(
                    self.load_height(),
                    self.load_weight(),
                    self.load_step_count(),
                    self.load_heart_rate(),
                    self.load_blood_pressure(),
                );
                self.set_phase(Phase::Settled);
            }
            Ok(false) => {
                warn!("health data authorization denied");
                self.record_error(Error::AuthorizationDenied.to_string());
                self.set_phase(Phase::Denied);
            }
            Err(err) => {
                warn!(error = %err, "health data authorization failed");
                self.record_error(err.to_string());
                self.set_phase(Phase::Denied);
            }
        }

        self.state()
    }

    /// Snapshot of the current display state.
    pub fn state(&self) -> DisplayState {
        self.state.borrow().clone()
    }

    /// Receiver that always holds the latest display state.
    pub fn watch(&self) -> watch::Receiver<DisplayState> {
        self.state.subscribe()
    }

    /// Subscribe to display state changes.
    pub fn subscribe(&self) -> EventReceiver {
        self.events.subscribe()
    }

    /// Wait until the run reaches [`Phase::Settled`] or [`Phase::Denied`].
    pub async fn settled(&self) -> DisplayState {
        let mut rx = self.state.subscribe();
        let settled = rx
            .wait_for(|state| state.phase.is_terminal())
            .await
            .map(|state| (*state).clone());
        settled.unwrap_or_else(|_| self.state())
    }

    async fn load_height(&self) {
        match self.health.height().await {
            Ok(Some(meters)) => self.set_field(DisplayField::Height, format_height(meters)),
            Ok(None) => debug!("no height sample; leaving field unset"),
            Err(err) => self.record_failure(DisplayField::Height, &err),
        }
    }

    async fn load_weight(&self) {
        match self.health.weight().await {
            Ok(Some(kilograms)) => self.set_field(DisplayField::Weight, format_weight(kilograms)),
            Ok(None) => debug!("no weight sample; leaving field unset"),
            Err(err) => self.record_failure(DisplayField::Weight, &err),
        }
    }

    async fn load_step_count(&self) {
        match self.health.step_count().await {
            Ok(steps) => self.set_field(DisplayField::StepCount, format_steps(steps)),
            Err(err) => self.record_failure(DisplayField::StepCount, &err),
        }
    }

    async fn load_heart_rate(&self) {
        match self.health.todays_heart_rates().await {
            Ok(readings) => self.set_field(DisplayField::HeartRate, format_heart_rate(&readings)),
            Err(err) => self.record_failure(DisplayField::HeartRate, &err),
        }
    }

    async fn load_blood_pressure(&self) {
        let diastolic = match self.health.today_diastolic_bp().await {
            Ok(readings) => readings,
            Err(err) => return self.record_failure(DisplayField::BloodPressure, &err),
        };
        let systolic = match self.health.today_systolic_bp().await {
            Ok(readings) => readings,
            Err(err) => return self.record_failure(DisplayField::BloodPressure, &err),
        };
        self.set_field(
            DisplayField::BloodPressure,
            format_blood_pressure(&systolic, &diastolic),
        );
    }

    fn set_loading(&self, loading: bool) {
        self.state.send_modify(|state| state.loading = loading);
        self.events.send(DisplayEvent::LoadingChanged { loading });
    }

    fn set_phase(&self, phase: Phase) {
        info!(%phase, "dashboard phase changed");
        self.state.send_modify(|state| state.phase = phase);
        self.events.send(DisplayEvent::PhaseChanged { phase });
    }

    fn set_field(&self, field: DisplayField, value: String) {
        let written = self
            .state
            .send_if_modified(|state| state.set_field(field, value.clone()));
        if written {
            debug!(%field, %value, "display field set");
            self.events.send(DisplayEvent::FieldChanged { field, value });
        } else {
            warn!(%field, "display field already set; keeping the first value");
        }
    }

    fn record_failure(&self, field: DisplayField, err: &Error) {
        warn!(%field, error = %err, "metric fetch failed");
        self.record_error(err.to_string());
    }

    fn record_error(&self, message: String) {
        self.state
            .send_modify(|state| state.error = Some(message.clone()));
        self.events.send(DisplayEvent::ErrorChanged { message });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::NO_READINGS;
    use crate::mock::{MockHealthStore, MockHealthStoreBuilder};
    use time::macros::{datetime, offset};
    use time::OffsetDateTime;
    use vitals_types::MetricType;

    const NOW: OffsetDateTime = datetime!(2026-10-17 12:00 UTC);

    fn dashboard(store: Arc<MockHealthStore>) -> Dashboard {
        let health = HealthData::new(store).with_offset(offset!(UTC)).at(NOW);
        Dashboard::new(health)
    }

    fn drain(rx: &mut EventReceiver) -> Vec<DisplayEvent> {
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    #[tokio::test]
    async fn test_full_load() {
        let store = Arc::new(
            MockHealthStoreBuilder::new()
                .sample(MetricType::Height, 1.82, datetime!(2025-03-01 08:00 UTC))
                .sample(MetricType::BodyMass, 81.6, datetime!(2026-10-10 07:00 UTC))
                .sample(MetricType::StepCount, 4200.0, datetime!(2026-10-17 09:00 UTC))
                .sample(MetricType::HeartRate, 64.0, datetime!(2026-10-17 08:00 UTC))
                .sample(MetricType::HeartRate, 72.0, datetime!(2026-10-17 11:00 UTC))
                .sample(MetricType::BloodPressureSystolic, 120.0, datetime!(2026-10-17 10:00 UTC))
                .sample(MetricType::BloodPressureDiastolic, 80.0, datetime!(2026-10-17 10:00 UTC))
                .build(),
        );

        let state = dashboard(store).load().await;

        assert_eq!(state.phase, Phase::Settled);
        assert!(!state.loading);
        assert_eq!(state.error, None);
        assert_eq!(state.height.as_deref(), Some("2 meters"));
        assert_eq!(state.weight.as_deref(), Some("82 kiloGrams"));
        assert_eq!(state.step_count.as_deref(), Some("4200 steps"));
        assert_eq!(state.heart_rate.as_deref(), Some("72"));
        assert_eq!(state.blood_pressure.as_deref(), Some("120/80"));
    }

    #[tokio::test]
    async fn test_empty_store() {
        let store = Arc::new(MockHealthStoreBuilder::new().build());
        let state = dashboard(store).load().await;

        assert_eq!(state.phase, Phase::Settled);
        assert_eq!(state.error, None);
        assert_eq!(state.height, None);
        assert_eq!(state.weight, None);
        assert_eq!(state.step_count.as_deref(), Some("0 steps"));
        assert_eq!(state.heart_rate.as_deref(), Some(NO_READINGS));
        assert_eq!(state.blood_pressure.as_deref(), Some(NO_READINGS));
    }

    #[tokio::test]
    async fn test_denied_authorization_fetches_nothing() {
        let store = Arc::new(
            MockHealthStoreBuilder::new()
                .sample(MetricType::Height, 1.82, NOW)
                .deny_authorization()
                .build(),
        );
        let state = dashboard(store.clone()).load().await;

        assert_eq!(state.phase, Phase::Denied);
        assert_eq!(state.populated(), 0);
        assert_eq!(
            state.error.as_deref(),
            Some("Health data authorization was denied")
        );
        assert_eq!(store.query_count(), 0);
    }

    #[tokio::test]
    async fn test_authorization_error_is_recorded_verbatim() {
        let store = Arc::new(
            MockHealthStoreBuilder::new()
                .fail_authorization("Authorization not determined")
                .build(),
        );
        let state = dashboard(store.clone()).load().await;

        assert_eq!(state.phase, Phase::Denied);
        assert_eq!(state.error.as_deref(), Some("Authorization not determined"));
        assert_eq!(state.populated(), 0);
        assert_eq!(store.query_count(), 0);
    }

    #[tokio::test]
    async fn test_metric_failure_blanks_only_that_metric() {
        let store = Arc::new(
            MockHealthStoreBuilder::new()
                .sample(MetricType::Height, 1.82, NOW)
                .fail(MetricType::BodyMass, "weight unavailable")
                .build(),
        );
        let state = dashboard(store).load().await;

        assert_eq!(state.weight, None);
        assert_eq!(state.height.as_deref(), Some("2 meters"));
        assert_eq!(state.step_count.as_deref(), Some("0 steps"));
        assert_eq!(state.error.as_deref(), Some("weight unavailable"));
    }

    #[tokio::test]
    async fn test_diastolic_failure_skips_systolic() {
        let store = Arc::new(
            MockHealthStoreBuilder::new()
                .fail(MetricType::BloodPressureDiastolic, "diastolic failed")
                .build(),
        );
        let state = dashboard(store.clone()).load().await;

        assert_eq!(state.blood_pressure, None);
        assert_eq!(state.error.as_deref(), Some("diastolic failed"));
        assert_eq!(store.queries_for(MetricType::BloodPressureSystolic).await, 0);
    }

    #[tokio::test]
    async fn test_systolic_failure_blanks_blood_pressure() {
        let store = Arc::new(
            MockHealthStoreBuilder::new()
                .sample(MetricType::BloodPressureDiastolic, 80.0, NOW)
                .fail(MetricType::BloodPressureSystolic, "systolic failed")
                .build(),
        );
        let state = dashboard(store).load().await;

        assert_eq!(state.blood_pressure, None);
        assert_eq!(state.error.as_deref(), Some("systolic failed"));
    }

    #[tokio::test]
    async fn test_event_sequence() {
        let store = Arc::new(
            MockHealthStoreBuilder::new()
                .sample(MetricType::HeartRate, 72.0, NOW)
                .build(),
        );
        let dashboard = dashboard(store);
        let mut rx = dashboard.subscribe();

        dashboard.load().await;
        let events = drain(&mut rx);

        assert_eq!(
            &events[..4],
            &[
                DisplayEvent::PhaseChanged { phase: Phase::Authorizing },
                DisplayEvent::LoadingChanged { loading: true },
                DisplayEvent::LoadingChanged { loading: false },
                DisplayEvent::PhaseChanged { phase: Phase::Fetching },
            ]
        );
        assert_eq!(
            events.last(),
            Some(&DisplayEvent::PhaseChanged { phase: Phase::Settled })
        );
        assert!(events.contains(&DisplayEvent::FieldChanged {
            field: DisplayField::HeartRate,
            value: "72".into(),
        }));
        let fields = events
            .iter()
            .filter(|e| matches!(e, DisplayEvent::FieldChanged { .. }))
            .count();
        assert_eq!(fields, 3); // steps, heart rate, blood pressure
    }

    #[tokio::test]
    async fn test_load_runs_once() {
        let store = Arc::new(MockHealthStoreBuilder::new().build());
        let dashboard = dashboard(store.clone());

        let first = dashboard.load().await;
        let queries = store.query_count();
        let second = dashboard.load().await;

        assert_eq!(first, second);
        assert_eq!(store.authorization_requests(), 1);
        assert_eq!(store.query_count(), queries);
    }

    #[tokio::test]
    async fn test_spawn_and_wait() {
        let store = Arc::new(
            MockHealthStoreBuilder::new()
                .sample(MetricType::StepCount, 321.0, NOW)
                .build(),
        );
        let health = HealthData::new(store).with_offset(offset!(UTC)).at(NOW);
        let (dashboard, handle) = Dashboard::spawn(health);

        let settled = dashboard.settled().await;
        let returned = handle.await.unwrap();

        assert_eq!(settled, returned);
        assert_eq!(settled.step_count.as_deref(), Some("321 steps"));
    }
}
