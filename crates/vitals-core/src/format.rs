//! Display strings for metric values.

use vitals_types::Reading;

use crate::readings::latest;

/// Shown when a dated metric has no readings today.
pub const NO_READINGS: &str = "No Readings";

/// Round to the nearest whole number, halves away from zero.
#[must_use]
pub fn round_whole(value: f64) -> i64 {
    value.round() as i64
}

/// Render a raw sample value: whole numbers without a fractional part,
/// anything else in its shortest decimal form.
///
/// ```
/// use vitals_core::format::format_value;
///
/// assert_eq!(format_value(72.0), "72");
/// assert_eq!(format_value(72.5), "72.5");
/// ```
#[must_use]
pub fn format_value(value: f64) -> String {
    value.to_string()
}

/// `"<N> meters"`.
#[must_use]
pub fn format_height(meters: f64) -> String {
    format!("{} meters", round_whole(meters))
}

/// `"<N> kiloGrams"`.
#[must_use]
pub fn format_weight(kilograms: f64) -> String {
    format!("{} kiloGrams", round_whole(kilograms))
}

/// `"<N> steps"`.
#[must_use]
pub fn format_steps(count: u64) -> String {
    format!("{count} steps")
}

/// Value of the most recent heart rate reading, or [`NO_READINGS`].
#[must_use]
pub fn format_heart_rate(readings: &[Reading]) -> String {
    latest(readings).map_or_else(|| NO_READINGS.to_string(), |r| format_value(r.value))
}

/// `"<systolic>/<diastolic>"` from each list's most recent reading, or
/// [`NO_READINGS`] if either list is empty.
#[must_use]
pub fn format_blood_pressure(systolic: &[Reading], diastolic: &[Reading]) -> String {
    match (latest(systolic), latest(diastolic)) {
        (Some(sys), Some(dia)) => {
            format!("{}/{}", format_value(sys.value), format_value(dia.value))
        }
        _ => NO_READINGS.to_string(),
    }
}
