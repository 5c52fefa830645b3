//! # Equal Temperament Module
//!
//! Conversions between the signed pitch index (semitones away from A4),
//! note letters, octaves and frequencies in twelve-tone equal temperament.
//!
//! ## Conventions
//! - A4 = 440 Hz is pitch index 0
//! - Each semitone is a frequency ratio of `2^(1/12)`
//! - Octave numbers change at C, so C4 is index -9 and B3 is index -10

use crate::bounds::{self, Bounds};
use crate::error::{PitchError, Quantity, Result};
use crate::frequency;
use crate::note::Letter;

/// The reference pitch every index is measured from.
pub struct Standard;

impl Standard {
    /// A4 in Hz.
    pub const FREQUENCY: f64 = 440.0;
    pub const OCTAVE: i32 = 4;
    pub const INDEX: i32 = 0;
}

/// Semitones in one octave, and the number of note letters.
pub const SEMITONES_PER_OCTAVE: i32 = 12;

/// Semitones from C up to A within one octave.
const C_TO_A: i32 = 9;

/// The twelve note letters in cyclic order starting at A.
pub fn letters() -> &'static [Letter; 12] {
    &Letter::ALL
}

/// Lowest and highest valid pitch index.
///
/// These are the indices nearest to the minimum and maximum frequency.
/// The lowest one (-54, about 19.45 Hz) sits just below the frequency
/// range itself.
pub fn index_bounds() -> Bounds<i32> {
    bounds::derived().index
}

/// Octaves of the lowest and highest valid pitch index.
pub fn octave_bounds() -> Bounds<i32> {
    bounds::derived().octave
}

/// Checks whether a pitch index lies within [`index_bounds`].
///
/// # Arguments
/// * `index` - Semitones away from A4
///
/// # Returns
/// * `true` if the index is within the bounds, inclusive
pub fn is_valid_index(index: i32) -> bool {
    index_bounds().contains(index)
}

/// Checks whether an octave number lies within [`octave_bounds`].
///
/// # Arguments
/// * `octave` - Octave number, changing at C (C4 is middle C)
///
/// # Returns
/// * `true` if the octave is within the bounds, inclusive
pub fn is_valid_octave(octave: i32) -> bool {
    octave_bounds().contains(octave)
}

pub(crate) fn validate_index(index: i32) -> Result<()> {
    if is_valid_index(index) {
        Ok(())
    } else {
        Err(PitchError::out_of_range(Quantity::Index, index))
    }
}

pub(crate) fn validate_octave(octave: i32) -> Result<()> {
    if is_valid_octave(octave) {
        Ok(())
    } else {
        Err(PitchError::out_of_range(Quantity::Octave, octave))
    }
}

/// Calculates the equal-tempered frequency of a pitch index.
///
/// `f = 440 * 2^(index / 12)`
///
/// # Arguments
/// * `index` - Semitones away from A4
///
/// # Returns
/// * Frequency in Hz
///
/// # Errors
/// * `OutOfRange` if the index is outside [`index_bounds`]
pub fn frequency_for_index(index: i32) -> Result<f64> {
    validate_index(index)?;
    Ok(equal_tempered_frequency(index))
}

pub(crate) fn equal_tempered_frequency(index: i32) -> f64 {
    Standard::FREQUENCY * 2f64.powf(f64::from(index) / f64::from(SEMITONES_PER_OCTAVE))
}

/// Finds the pitch index closest to a frequency.
///
/// Rounds `12 * log2(frequency / 440)` to the nearest integer.
///
/// # Arguments
/// * `frequency` - Frequency in Hz
///
/// # Returns
/// * Signed number of semitones away from A4
///
/// # Errors
/// * `InvalidFrequency` if the frequency is outside the supported range
pub fn index_for_frequency(frequency: f64) -> Result<i32> {
    frequency::validate(frequency)?;
    Ok(nearest_index(frequency))
}

/// Fractional number of semitones between A4 and `frequency`.
pub(crate) fn continuous_index(frequency: f64) -> f64 {
    f64::from(SEMITONES_PER_OCTAVE) * (frequency / Standard::FREQUENCY).log2()
}

/// Unvalidated nearest index, rounding half away from zero.
pub(crate) fn nearest_index(frequency: f64) -> i32 {
    continuous_index(frequency).round() as i32
}

/// Note letter of any pitch index; the letters repeat every 12 semitones.
pub fn letter_for_index(index: i32) -> Letter {
    Letter::ALL[index.rem_euclid(SEMITONES_PER_OCTAVE) as usize]
}

/// Octave of any pitch index. Octaves start at C.
pub fn octave_for_index(index: i32) -> i32 {
    Standard::OCTAVE + (index + C_TO_A).div_euclid(SEMITONES_PER_OCTAVE)
}

/// Pitch index of a letter in a given octave.
///
/// A, A# and B sit above C within their octave, so every other letter is
/// shifted down by a full octave relative to A.
///
/// # Errors
/// * `OutOfRange` if the octave is outside [`octave_bounds`]
pub fn index_for_letter(letter: Letter, octave: i32) -> Result<i32> {
    validate_octave(octave)?;
    let position = letter.position();
    let offset = if position < Letter::C.position() {
        0
    } else {
        SEMITONES_PER_OCTAVE
    };
    Ok(position + SEMITONES_PER_OCTAVE * (octave - Standard::OCTAVE) - offset)
}

/// Calculates the deviation from a target frequency in cents.
///
/// - 100 cents = 1 semitone
/// - 1200 cents = 1 octave
/// - Positive values mean `frequency` is sharp of `target`
///
/// # Arguments
/// * `target` - Target frequency in Hz
/// * `frequency` - Measured frequency in Hz
///
/// # Errors
/// * `InvalidFrequency` if either frequency is outside the supported range
pub fn cents(target: f64, frequency: f64) -> Result<f64> {
    frequency::validate(target)?;
    frequency::validate(frequency)?;
    Ok(cents_between(target, frequency))
}

/// Unvalidated cents from `target` to `frequency`.
pub(crate) fn cents_between(target: f64, frequency: f64) -> f64 {
    1200.0 * (frequency / target).log2()
}
