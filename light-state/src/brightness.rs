//! Brightness unit conversion
//!
//! The API speaks device-native brightness (0-255); everything user facing is
//! a percentage (0-100). Both directions compute `round(value * to / from)`
//! with round-half-away-from-zero. Inputs are not clamped, so out-of-range
//! values map to proportionally out-of-range outputs.

/// Upper bound of the device-native range
pub const DEVICE_MAX: i64 = 255;

/// Upper bound of the percentage range
pub const PERCENT_MAX: i64 = 100;

/// Convert a device-native value (0-255) to a percentage (0-100)
pub fn to_percentage(value: i64) -> i64 {
    rescale(value, DEVICE_MAX, PERCENT_MAX)
}

/// Convert a percentage (0-100) to a device-native value (0-255)
pub fn from_percentage(value: i64) -> i64 {
    rescale(value, PERCENT_MAX, DEVICE_MAX)
}

// Multiply before dividing so exact halves stay exact and `round` sees them.
fn rescale(value: i64, from_max: i64, to_max: i64) -> i64 {
    ((value as f64 * to_max as f64) / from_max as f64).round() as i64
}
