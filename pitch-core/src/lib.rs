// pitch-core/src/lib.rs

//! Pitch arithmetic for tuners and audio tools.
//! Converts between pitch indices, notes, frequencies, wavelengths and
//! periods in twelve-tone equal temperament (A4 = 440 Hz), and measures
//! how far a frequency sits from its neighbouring notes.
//! It performs no audio I/O.

pub mod bounds;
pub mod error;
pub mod frequency;
pub mod note;
pub mod pitch;
pub mod tuning;
pub mod wave;

pub use bounds::{Bounds, DerivedBounds};
pub use error::{PitchError, Quantity, Result};
pub use note::{Letter, Note};
pub use pitch::{Offset, Offsets, Pitch};
pub use wave::AcousticWave;
