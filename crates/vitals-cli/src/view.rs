//! Label view bound to dashboard display events.
//!
//! The view holds one read-only label per display field plus an error label
//! and copies values out of [`DisplayEvent`]s. It makes no decisions of its
//! own: whatever the dashboard publishes is what the labels show.

use std::io::Write;

use tokio::sync::broadcast::error::RecvError;
use tracing::warn;
use vitals_core::{DisplayEvent, DisplayField, EventReceiver, Phase};

/// Shown for a label that never received a value.
pub const UNSET: &str = "-";

/// Five metric labels plus the error label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelView {
    height: Option<String>,
    weight: Option<String>,
    step_count: Option<String>,
    heart_rate: Option<String>,
    blood_pressure: Option<String>,
    error: Option<String>,
    loading: bool,
    phase: Phase,
}

impl LabelView {
    /// An empty view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of a metric label, if set.
    pub fn label(&self, field: DisplayField) -> Option<&str> {
        match field {
            DisplayField::Height => self.height.as_deref(),
            DisplayField::Weight => self.weight.as_deref(),
            DisplayField::StepCount => self.step_count.as_deref(),
            DisplayField::HeartRate => self.heart_rate.as_deref(),
            DisplayField::BloodPressure => self.blood_pressure.as_deref(),
        }
    }

    /// Text of the error label, if set.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether the loading indicator is on.
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Last phase seen.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Label rows in display order, with unset labels shown as [`UNSET`].
    pub fn rows(&self) -> Vec<(&'static str, &str)> {
        DisplayField::ALL
            .iter()
            .map(|field| (field.label(), self.label(*field).unwrap_or(UNSET)))
            .collect()
    }

    /// Apply one event. Returns the line to echo for visible changes.
    pub fn apply(&mut self, event: DisplayEvent) -> Option<String> {
        match event {
            DisplayEvent::FieldChanged { field, value } => {
                let line = format!("{}: {}", field.label(), value);
                *self.slot_mut(field) = Some(value);
                Some(line)
            }
            DisplayEvent::ErrorChanged { message } => {
                let line = format!("Error: {}", message);
                self.error = Some(message);
                Some(line)
            }
            DisplayEvent::LoadingChanged { loading } => {
                self.loading = loading;
                None
            }
            DisplayEvent::PhaseChanged { phase } => {
                self.phase = phase;
                None
            }
            _ => None,
        }
    }

    fn slot_mut(&mut self, field: DisplayField) -> &mut Option<String> {
        match field {
            DisplayField::Height => &mut self.height,
            DisplayField::Weight => &mut self.weight,
            DisplayField::StepCount => &mut self.step_count,
            DisplayField::HeartRate => &mut self.heart_rate,
            DisplayField::BloodPressure => &mut self.blood_pressure,
        }
    }
}

/// Consume display events into a new view until the run finishes.
///
/// When `echo` is given, every visible change is written to it as
/// `"<Label>: <value>"` as soon as it arrives.
pub async fn bind<W: Write>(mut events: EventReceiver, mut echo: Option<W>) -> LabelView {
    let mut view = LabelView::new();
    loop {
        match events.recv().await {
            Ok(event) => {
                if let Some(line) = view.apply(event)
                    && let Some(writer) = echo.as_mut()
                    && let Err(e) = writeln!(writer, "{}", line)
                {
                    warn!("Failed to echo display change: {}", e);
                }
                if view.phase.is_terminal() {
                    break;
                }
            }
            Err(RecvError::Lagged(skipped)) => {
                warn!(skipped, "label view fell behind; some changes were skipped");
            }
            Err(RecvError::Closed) => break,
        }
    }
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitals_core::EventDispatcher;

    fn field(field: DisplayField, value: &str) -> DisplayEvent {
        DisplayEvent::FieldChanged {
            field,
            value: value.to_string(),
        }
    }

    #[test]
    fn test_apply_field_changes() {
        let mut view = LabelView::new();
        let line = view.apply(field(DisplayField::HeartRate, "72"));

        assert_eq!(line.as_deref(), Some("Heart Rate: 72"));
        assert_eq!(view.label(DisplayField::HeartRate), Some("72"));
        assert_eq!(view.label(DisplayField::Height), None);
    }

    #[test]
    fn test_rows_show_unset_labels() {
        let mut view = LabelView::new();
        view.apply(field(DisplayField::StepCount, "0 steps"));

        let rows = view.rows();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0], ("Height", UNSET));
        assert_eq!(rows[2], ("Step Count", "0 steps"));
    }

    #[test]
    fn test_loading_and_phase_are_silent() {
        let mut view = LabelView::new();
        assert_eq!(view.apply(DisplayEvent::LoadingChanged { loading: true }), None);
        assert!(view.loading());
        assert_eq!(
            view.apply(DisplayEvent::PhaseChanged {
                phase: Phase::Fetching
            }),
            None
        );
        assert_eq!(view.phase(), Phase::Fetching);
    }

    #[tokio::test]
    async fn test_bind_echoes_until_terminal_phase() {
        let dispatcher = EventDispatcher::default();
        let rx = dispatcher.subscribe();

        dispatcher.send(DisplayEvent::PhaseChanged {
            phase: Phase::Fetching,
        });
        dispatcher.send(field(DisplayField::Weight, "82 kiloGrams"));
        dispatcher.send(DisplayEvent::ErrorChanged {
            message: "height failed".to_string(),
        });
        dispatcher.send(DisplayEvent::PhaseChanged {
            phase: Phase::Settled,
        });
        dispatcher.send(field(DisplayField::Height, "ignored"));

        let mut echoed = Vec::new();
        let view = bind(rx, Some(&mut echoed)).await;

        assert_eq!(view.phase(), Phase::Settled);
        assert_eq!(view.label(DisplayField::Weight), Some("82 kiloGrams"));
        assert_eq!(view.label(DisplayField::Height), None);
        assert_eq!(view.error(), Some("height failed"));
        assert_eq!(
            String::from_utf8(echoed).unwrap(),
            "Weight: 82 kiloGrams\nError: height failed\n"
        );
    }

    #[tokio::test]
    async fn test_bind_stops_when_sender_dropped() {
        let dispatcher = EventDispatcher::new(4);
        let rx = dispatcher.subscribe();
        dispatcher.send(field(DisplayField::HeartRate, "No Readings"));
        drop(dispatcher);

        let view = bind(rx, None::<std::io::Sink>).await;
        assert_eq!(view.label(DisplayField::HeartRate), Some("No Readings"));
    }
}
