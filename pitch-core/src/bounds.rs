//! # Derived Bounds
//!
//! Index, octave, wavelength and period limits all follow from the
//! frequency range in [`crate::frequency`] and the A4 reference pitch.
//! They are computed once, on first use, and never change afterwards.

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::{frequency, tuning, wave};

/// An inclusive `(minimum, maximum)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds<T> {
    pub minimum: T,
    pub maximum: T,
}

impl<T: PartialOrd> Bounds<T> {
    /// `true` if `value` lies between the bounds, inclusive.
    pub fn contains(&self, value: T) -> bool {
        value >= self.minimum && value <= self.maximum
    }
}

/// Every range derived from the supported frequency range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedBounds {
    pub index: Bounds<i32>,
    pub octave: Bounds<i32>,
    /// Metres. The minimum comes from the maximum frequency.
    pub wavelength: Bounds<f64>,
    /// Seconds.
    pub period: Bounds<f64>,
}

static DERIVED: Lazy<DerivedBounds> = Lazy::new(|| {
    let index = Bounds {
        minimum: tuning::nearest_index(frequency::MINIMUM_FREQUENCY),
        maximum: tuning::nearest_index(frequency::MAXIMUM_FREQUENCY),
    };
    let octave = Bounds {
        minimum: tuning::octave_for_index(index.minimum),
        maximum: tuning::octave_for_index(index.maximum),
    };
    let wavelength = Bounds {
        minimum: wave::SPEED_OF_SOUND / frequency::MAXIMUM_FREQUENCY,
        maximum: wave::SPEED_OF_SOUND / frequency::MINIMUM_FREQUENCY,
    };
    let period = Bounds {
        minimum: wavelength.minimum / wave::SPEED_OF_SOUND,
        maximum: wavelength.maximum / wave::SPEED_OF_SOUND,
    };

    let derived = DerivedBounds {
        index,
        octave,
        wavelength,
        period,
    };
    tracing::debug!(?derived, "derived pitch bounds initialised");
    derived
});

/// The process-wide derived bounds.
pub fn derived() -> &'static DerivedBounds {
    &DERIVED
}
