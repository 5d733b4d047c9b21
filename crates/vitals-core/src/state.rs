//! Display state exposed by the dashboard.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Where a dashboard run currently is.
///
/// `Idle -> Authorizing -> Fetching -> Settled`, or
/// `Idle -> Authorizing -> Denied` when authorization fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Nothing has been requested yet.
    #[default]
    Idle,
    /// Waiting for the authorization answer.
    Authorizing,
    /// Authorized; metric fetches are in flight.
    Fetching,
    /// Every metric fetch has completed.
    Settled,
    /// Authorization failed or was denied; nothing was fetched.
    Denied,
}

impl Phase {
    /// Whether the run has finished.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Settled | Phase::Denied)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Idle => "idle",
            Phase::Authorizing => "authorizing",
            Phase::Fetching => "fetching",
            Phase::Settled => "settled",
            Phase::Denied => "denied",
        };
        f.write_str(name)
    }
}

/// One of the five display fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayField {
    Height,
    Weight,
    StepCount,
    HeartRate,
    BloodPressure,
}

impl DisplayField {
    /// All fields, in display order.
    pub const ALL: [DisplayField; 5] = [
        DisplayField::Height,
        DisplayField::Weight,
        DisplayField::StepCount,
        DisplayField::HeartRate,
        DisplayField::BloodPressure,
    ];

    /// Label shown next to the value.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            DisplayField::Height => "Height",
            DisplayField::Weight => "Weight",
            DisplayField::StepCount => "Step Count",
            DisplayField::HeartRate => "Heart Rate",
            DisplayField::BloodPressure => "Blood Pressure",
        }
    }
}

impl fmt::Display for DisplayField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Formatted strings plus loading and error flags.
///
/// Each field is written at most once per run. `error` is shared by every
/// fetch; the last failure to be recorded is the one that remains.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayState {
    pub phase: Phase,
    pub loading: bool,
    pub error: Option<String>,
    pub height: Option<String>,
    pub weight: Option<String>,
    pub step_count: Option<String>,
    pub heart_rate: Option<String>,
    pub blood_pressure: Option<String>,
}

impl DisplayState {
    /// Current value of `field`.
    #[must_use]
    pub fn field(&self, field: DisplayField) -> Option<&str> {
        self.slot(field).as_deref()
    }

    /// Number of populated display fields.
    #[must_use]
    pub fn populated(&self) -> usize {
        DisplayField::ALL
            .iter()
            .filter(|field| self.field(**field).is_some())
            .count()
    }

    /// Write `value` into an unset field. Returns `false` if it was already set.
    pub(crate) fn set_field(&mut self, field: DisplayField, value: String) -> bool {
        let slot = self.slot_mut(field);
        if slot.is_some() {
            return false;
        }
        *slot = Some(value);
        true
    }

    fn slot(&self, field: DisplayField) -> &Option<String> {
        match field {
            DisplayField::Height => &self.height,
            DisplayField::Weight => &self.weight,
            DisplayField::StepCount => &self.step_count,
            DisplayField::HeartRate => &self.heart_rate,
            DisplayField::BloodPressure => &self.blood_pressure,
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
