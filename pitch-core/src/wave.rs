//! # Acoustic Wave Module
//!
//! Converts between frequency, wavelength and period of a sound wave
//! travelling through air, and builds [`AcousticWave`] values from any one
//! of the three.
//!
//! ## Relations
//! - `wavelength = speed / frequency`
//! - `period = wavelength / speed = 1 / frequency`

use serde::Serialize;

use crate::bounds::{self, Bounds};
use crate::error::{PitchError, Quantity, Result};
use crate::frequency;

/// Speed of sound in air, m/s.
pub const SPEED_OF_SOUND: f64 = 343.0;

/// Highest harmonic number produced by [`AcousticWave::harmonics`].
pub const HARMONICS_LIMIT: u32 = 16;

/// Wavelength bounds in metres. Higher frequencies give shorter waves, so
/// the minimum comes from the maximum frequency.
pub fn wavelength_bounds() -> Bounds<f64> {
    bounds::derived().wavelength
}

/// Period bounds in seconds.
pub fn period_bounds() -> Bounds<f64> {
    bounds::derived().period
}

/// Checks whether a wavelength lies within [`wavelength_bounds`].
///
/// Zero and negative wavelengths are never valid.
///
/// # Arguments
/// * `wavelength` - Wavelength in metres
pub fn is_valid_wavelength(wavelength: f64) -> bool {
    wavelength > 0.0 && wavelength_bounds().contains(wavelength)
}

/// Checks whether a period lies within [`period_bounds`].
///
/// Zero and negative periods are never valid.
///
/// # Arguments
/// * `period` - Period in seconds
pub fn is_valid_period(period: f64) -> bool {
    period > 0.0 && period_bounds().contains(period)
}

fn validate_wavelength(wavelength: f64) -> Result<()> {
    if is_valid_wavelength(wavelength) {
        Ok(())
    } else {
        Err(PitchError::out_of_range(Quantity::Wavelength, wavelength))
    }
}

fn validate_period(period: f64) -> Result<()> {
    if is_valid_period(period) {
        Ok(())
    } else {
        Err(PitchError::out_of_range(Quantity::Period, period))
    }
}

/// Calculates the frequency of a wave with the given wavelength.
///
/// # Arguments
/// * `wavelength` - Wavelength in metres
///
/// # Returns
/// * Frequency in Hz, `speed / wavelength`
///
/// # Errors
/// * `OutOfRange` if the wavelength is invalid
pub fn frequency_for_wavelength(wavelength: f64) -> Result<f64> {
    validate_wavelength(wavelength)?;
    Ok(SPEED_OF_SOUND / wavelength)
}

/// Calculates the wavelength of a wave with the given frequency.
///
/// # Arguments
/// * `frequency` - Frequency in Hz
///
/// # Returns
/// * Wavelength in metres, `speed / frequency`
///
/// # Errors
/// * `InvalidFrequency` if the frequency is outside the supported range
pub fn wavelength_for_frequency(frequency: f64) -> Result<f64> {
    frequency::validate(frequency)?;
    Ok(SPEED_OF_SOUND / frequency)
}

/// Calculates the wavelength of a wave with the given period.
///
/// # Arguments
/// * `period` - Period in seconds
///
/// # Returns
/// * Wavelength in metres, `speed * period`
///
/// # Errors
/// * `OutOfRange` if the period is invalid
pub fn wavelength_for_period(period: f64) -> Result<f64> {
    validate_period(period)?;
    Ok(SPEED_OF_SOUND * period)
}

/// Calculates the period of a wave with the given wavelength.
///
/// # Arguments
/// * `wavelength` - Wavelength in metres
///
/// # Returns
/// * Period in seconds, `wavelength / speed`
///
/// # Errors
/// * `OutOfRange` if the wavelength is invalid
pub fn period_for_wavelength(wavelength: f64) -> Result<f64> {
    validate_wavelength(wavelength)?;
    Ok(wavelength / SPEED_OF_SOUND)
}

/// A sound wave described by its frequency, wavelength and period.
///
/// The three values are always mutually consistent: `frequency * wavelength`
/// is [`SPEED_OF_SOUND`] for every instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AcousticWave {
    frequency: f64,
    wavelength: f64,
    period: f64,
}

impl AcousticWave {
    /// Builds a wave from its frequency in Hz.
    ///
    /// # Errors
    /// * `InvalidFrequency` if the frequency is outside the supported range
    pub fn from_frequency(frequency: f64) -> Result<Self> {
        let wavelength = wavelength_for_frequency(frequency)?;
        Ok(AcousticWave {
            frequency,
            wavelength,
            period: wavelength / SPEED_OF_SOUND,
        })
    }

    /// Builds a wave from its wavelength in metres.
    ///
    /// # Errors
    /// * `OutOfRange` if the wavelength is outside [`wavelength_bounds`]
    pub fn from_wavelength(wavelength: f64) -> Result<Self> {
        Ok(AcousticWave {
            frequency: frequency_for_wavelength(wavelength)?,
            wavelength,
            period: period_for_wavelength(wavelength)?,
        })
    }

    /// Builds a wave from its period in seconds.
    ///
    /// # Errors
    /// * `OutOfRange` if the period is outside [`period_bounds`]
    pub fn from_period(period: f64) -> Result<Self> {
        let wavelength = wavelength_for_period(period)?;
        Ok(AcousticWave {
            frequency: SPEED_OF_SOUND / wavelength,
            wavelength,
            period,
        })
    }

    /// Frequency in Hz.
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Wavelength in metres.
    pub fn wavelength(&self) -> f64 {
        self.wavelength
    }

    /// Period in seconds.
    pub fn period(&self) -> f64 {
        self.period
    }

    /// Propagation speed recovered from the wave itself.
    pub fn speed(&self) -> f64 {
        self.frequency * self.wavelength
    }

    /// Harmonic series of this wave. The first element is the fundamental
    /// itself, the n-th is `n * frequency`, up to [`HARMONICS_LIMIT`].
    ///
    /// Harmonics above the maximum frequency are left out. Each call starts
    /// a fresh iterator.
    pub fn harmonics(&self) -> impl Iterator<Item = AcousticWave> + use<> {
        let fundamental = self.frequency;
        (1..=HARMONICS_LIMIT).filter_map(move |number| {
            let frequency = f64::from(number) * fundamental;
            match AcousticWave::from_frequency(frequency) {
                Ok(wave) => Some(wave),
                Err(_) => {
                    tracing::trace!(number, frequency, "harmonic out of range");
                    None
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// (frequency, wavelength, period)
    const WAVES: [(f64, f64, f64); 2] = [(440.0, 0.7795, 0.00227259), (1000.0, 0.343, 0.001)];

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {expected} ± {tolerance}, got {actual}"
        );
    }

    #[test]
    fn wavelength_bounds_come_from_the_frequency_range() {
        let expected = Bounds {
            minimum: wavelength_for_frequency(frequency::MAXIMUM_FREQUENCY).unwrap(),
            maximum: wavelength_for_frequency(frequency::MINIMUM_FREQUENCY).unwrap(),
        };
        assert_eq!(wavelength_bounds(), expected);
    }

    #[test]
    fn period_bounds_come_from_the_wavelength_bounds() {
        let wavelengths = wavelength_bounds();
        let expected = Bounds {
            minimum: period_for_wavelength(wavelengths.minimum).unwrap(),
            maximum: period_for_wavelength(wavelengths.maximum).unwrap(),
        };
        assert_eq!(period_bounds(), expected);
    }

    #[test]
    fn wavelength_validity() {
        assert!(!is_valid_wavelength(1000.0));
        assert!(!is_valid_wavelength(0.01));
        assert!(!is_valid_wavelength(0.0));
        assert!(is_valid_wavelength(16.0));
        assert!(is_valid_wavelength(wavelength_bounds().minimum));
        assert!(is_valid_wavelength(wavelength_bounds().maximum));
    }

    #[test]
    fn period_validity() {
        assert!(!is_valid_period(10.0));
        assert!(!is_valid_period(0.0001));
        assert!(!is_valid_period(0.0));
        assert!(is_valid_period(0.02));
    }

    #[test]
    fn conversions_match_table() {
        for (frequency, wavelength, period) in WAVES {
            assert_close(frequency_for_wavelength(wavelength).unwrap(), frequency, 0.1);
            assert_close(wavelength_for_frequency(frequency).unwrap(), wavelength, 0.1);
            assert_close(wavelength_for_period(period).unwrap(), wavelength, 0.0001);
            assert_close(period_for_wavelength(wavelength).unwrap(), period, 0.0001);
        }
    }

    #[test]
    fn conversions_reject_out_of_range_inputs() {
        assert_eq!(
            frequency_for_wavelength(0.0),
            Err(PitchError::out_of_range(Quantity::Wavelength, 0.0))
        );
        assert_eq!(
            wavelength_for_period(10.0),
            Err(PitchError::out_of_range(Quantity::Period, 10.0))
        );
        assert_eq!(
            wavelength_for_frequency(5000.0),
            Err(PitchError::InvalidFrequency(5000.0))
        );
    }

    #[test]
    fn wave_from_each_property() {
        for (frequency, wavelength, period) in WAVES {
            for wave in [
                AcousticWave::from_frequency(frequency).unwrap(),
                AcousticWave::from_wavelength(wavelength).unwrap(),
                AcousticWave::from_period(period).unwrap(),
            ] {
                assert_close(wave.frequency(), frequency, 0.1);
                assert_close(wave.wavelength(), wavelength, 0.01);
                assert_close(wave.period(), period, 0.01);
                assert_close(wave.speed(), SPEED_OF_SOUND, 0.001);
            }
        }
    }

    #[test]
    fn harmonics_are_multiples_of_the_fundamental() {
        let wave = AcousticWave::from_frequency(100.0).unwrap();
        let harmonics: Vec<_> = wave.harmonics().collect();
        assert_eq!(harmonics.len(), 16);
        assert_eq!(harmonics[0], wave);
        for (position, harmonic) in harmonics.iter().enumerate() {
            assert_close(harmonic.frequency(), (position + 1) as f64 * 100.0, 1e-9);
        }
    }

    #[test]
    fn harmonics_start_at_the_fundamental_for_every_constructor() {
        for (frequency, wavelength, period) in WAVES {
            let from_frequency = AcousticWave::from_frequency(frequency).unwrap();
            for (position, harmonic) in from_frequency.harmonics().enumerate() {
                assert_close(harmonic.frequency(), (position + 1) as f64 * frequency, 0.01);
            }
            for wave in [
                AcousticWave::from_wavelength(wavelength).unwrap(),
                AcousticWave::from_period(period).unwrap(),
            ] {
                for (position, harmonic) in wave.harmonics().enumerate() {
                    let expected = (position + 1) as f64 * frequency;
                    assert_close(harmonic.frequency(), expected, 1.0);
                }
            }
        }
    }

    #[test]
    fn harmonics_stop_at_the_maximum_frequency() {
        let wave = AcousticWave::from_frequency(1000.0).unwrap();
        let frequencies: Vec<f64> = wave.harmonics().map(|h| h.frequency()).collect();
        assert_eq!(frequencies, vec![1000.0, 2000.0, 3000.0, 4000.0]);
        // restartable
        assert_eq!(wave.harmonics().count(), 4);
    }

    #[test]
    fn rejects_invalid_construction() {
        assert!(AcousticWave::from_frequency(0.0).is_err());
        assert!(AcousticWave::from_wavelength(1000.0).is_err());
        assert!(AcousticWave::from_period(0.0).is_err());
    }
}
