//! # Frequency Validation
//!
//! The supported frequency range is the single source of truth for every
//! other bound in the crate: pitch indices, octaves, wavelengths and periods
//! are all derived from these two constants (see [`crate::bounds`]).

use crate::error::{PitchError, Result};

/// Lowest accepted frequency in Hz.
pub const MINIMUM_FREQUENCY: f64 = 20.0;

/// Highest accepted frequency in Hz.
pub const MAXIMUM_FREQUENCY: f64 = 4190.0;

/// Returns `true` if `frequency` is positive and lies within
/// [`MINIMUM_FREQUENCY`, `MAXIMUM_FREQUENCY`] inclusive.
///
/// NaN is never valid.
pub fn is_valid(frequency: f64) -> bool {
    frequency > 0.0 && (MINIMUM_FREQUENCY..=MAXIMUM_FREQUENCY).contains(&frequency)
}

/// Like [`is_valid`], but reports the rejected value as an error.
///
/// # Errors
/// * `InvalidFrequency` carrying the rejected frequency
pub fn validate(frequency: f64) -> Result<()> {
    if is_valid(frequency) {
        Ok(())
    } else {
        Err(PitchError::InvalidFrequency(frequency))
    }
}
