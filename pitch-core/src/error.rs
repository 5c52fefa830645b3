use std::fmt;

use thiserror::Error;

/// The quantity whose derived range was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    Index,
    Octave,
    Wavelength,
    Period,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Quantity::Index => "pitch index",
            Quantity::Octave => "octave",
            Quantity::Wavelength => "wavelength",
            Quantity::Period => "period",
        };
        f.write_str(name)
    }
}

/// Errors produced by the conversion functions and value constructors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PitchError {
    /// The frequency is non-positive or outside the supported range.
    #[error("pitch: invalid frequency {0} Hz")]
    InvalidFrequency(f64),

    /// An index, octave, wavelength or period is outside its derived range.
    #[error("pitch: {quantity} {value} is out of range")]
    OutOfRange { quantity: Quantity, value: f64 },

    #[error("pitch: invalid note name {0:?}")]
    InvalidNoteName(String),
}

impl PitchError {
    pub(crate) fn out_of_range(quantity: Quantity, value: impl Into<f64>) -> Self {
        PitchError::OutOfRange {
            quantity,
            value: value.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PitchError>;
