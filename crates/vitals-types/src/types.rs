//! Core types for health metric data.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::error::ParseError;

/// Kind of health metric held by the health data store.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new metric types
/// in future versions without breaking downstream code.
///
/// The string form (used by `Display`, `FromStr` and serde) is kebab-case:
///
/// ```
/// use vitals_types::MetricType;
///
/// assert_eq!(MetricType::HeartRate.to_string(), "heart-rate");
/// assert_eq!("body-mass".parse::<MetricType>(), Ok(MetricType::BodyMass));
/// assert!("cholesterol".parse::<MetricType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[non_exhaustive]
pub enum MetricType {
    /// Body height.
    Height,
    /// Body mass (weight).
    BodyMass,
    /// Step count.
    StepCount,
    /// Heart rate.
    HeartRate,
    /// Systolic blood pressure (the higher number).
    BloodPressureSystolic,
    /// Diastolic blood pressure (the lower number).
    BloodPressureDiastolic,
    /// Blood oxygen saturation.
    OxygenSaturation,
}

impl MetricType {
    /// Every known metric type.
    pub const ALL: [MetricType; 7] = [
        MetricType::Height,
        MetricType::BodyMass,
        MetricType::StepCount,
        MetricType::HeartRate,
        MetricType::BloodPressureSystolic,
        MetricType::BloodPressureDiastolic,
        MetricType::OxygenSaturation,
    ];

    /// Read types requested in a single authorization call.
    ///
    /// Blood oxygen can still be queried, but it is not part of the request.
    pub const AUTHORIZATION_SET: [MetricType; 6] = [
        MetricType::Height,
        MetricType::BodyMass,
        MetricType::StepCount,
        MetricType::HeartRate,
        MetricType::BloodPressureSystolic,
        MetricType::BloodPressureDiastolic,
    ];

    /// Canonical unit that readings of this metric are expressed in.
    #[must_use]
    pub fn unit(&self) -> Unit {
        match self {
            MetricType::Height => Unit::Meter,
            MetricType::BodyMass => Unit::Kilogram,
            MetricType::StepCount => Unit::Count,
            MetricType::HeartRate => Unit::CountPerMinute,
            MetricType::BloodPressureSystolic | MetricType::BloodPressureDiastolic => {
                Unit::MillimeterOfMercury
            }
            MetricType::OxygenSaturation => Unit::Percent,
        }
    }

    /// Kebab-case identifier, as accepted by `FromStr`.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricType::Height => "height",
            MetricType::BodyMass => "body-mass",
            MetricType::StepCount => "step-count",
            MetricType::HeartRate => "heart-rate",
            MetricType::BloodPressureSystolic => "blood-pressure-systolic",
            MetricType::BloodPressureDiastolic => "blood-pressure-diastolic",
            MetricType::OxygenSaturation => "oxygen-saturation",
        }
    }

    /// Human-readable name.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            MetricType::Height => "Height",
            MetricType::BodyMass => "Weight",
            MetricType::StepCount => "Step Count",
            MetricType::HeartRate => "Heart Rate",
            MetricType::BloodPressureSystolic => "Systolic Blood Pressure",
            MetricType::BloodPressureDiastolic => "Diastolic Blood Pressure",
            MetricType::OxygenSaturation => "Blood Oxygen",
        }
    }
}

impl fmt::Display for MetricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        MetricType::ALL
            .into_iter()
            .find(|metric| metric.as_str() == wanted)
            .ok_or_else(|| ParseError::UnknownMetric(s.to_string()))
    }
}

/// Measurement unit of a metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub enum Unit {
    /// Meters.
    Meter,
    /// Kilograms.
    Kilogram,
    /// Plain count.
    Count,
    /// Count per minute (beats per minute for heart rate).
    CountPerMinute,
    /// Millimeters of mercury.
    MillimeterOfMercury,
    /// Percentage.
    Percent,
}

impl Unit {
    /// Short unit symbol.
    #[must_use]
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Meter => "m",
            Unit::Kilogram => "kg",
            Unit::Count => "count",
            Unit::CountPerMinute => "count/min",
            Unit::MillimeterOfMercury => "mmHg",
            Unit::Percent => "%",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A single timestamped sample from the health data store.
///
/// `value` is already expressed in the metric's canonical [`Unit`] and
/// `date` is the sample's end date.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Reading {
    /// Numeric sample value.
    pub value: f64,
    /// End date of the sample.
    #[cfg_attr(feature = "serde", serde(with = "time::serde::rfc3339"))]
    pub date: OffsetDateTime,
}

impl Reading {
    /// Create a new reading.
    #[must_use]
    pub fn new(value: f64, date: OffsetDateTime) -> Self {
        Self { value, date }
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.value, self.date)
    }
}
