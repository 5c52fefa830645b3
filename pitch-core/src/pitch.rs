//! # Pitch Offsets Module
//!
//! Measures how far a frequency is from the two equal-tempered notes that
//! surround it. This is the tuner's view of a frequency: which note it is
//! closest to and how sharp or flat it sounds against each neighbour.

use serde::Serialize;

use crate::error::Result;
use crate::frequency;
use crate::note::Note;
use crate::tuning;
use crate::wave::AcousticWave;

/// Deviation of a frequency from one specific note.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Offset {
    pub note: Note,
    /// Signed difference in Hz (positive = sharp of `note`).
    pub frequency: f64,
    /// Signed difference as a share of the semitone between the two
    /// neighbouring notes, in percent.
    pub percentage: f64,
    /// Signed difference in cents.
    pub cents: f64,
}

impl Offset {
    fn new(frequency: f64, note: Note, semitone_gap: f64) -> Self {
        let target = note.frequency();
        let delta = frequency - target;
        Offset {
            note,
            frequency: delta,
            percentage: delta * 100.0 / semitone_gap,
            cents: tuning::cents_between(target, frequency),
        }
    }
}

/// The offsets to the notes directly below and above a frequency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Offsets {
    pub lower: Offset,
    pub higher: Offset,
}

impl Offsets {
    /// The offset with the smaller absolute cents. Ties go to `lower`.
    pub fn closest(&self) -> &Offset {
        if self.lower.cents.abs() <= self.higher.cents.abs() {
            &self.lower
        } else {
            &self.higher
        }
    }
}

/// Finds the neighbouring notes of `frequency` and its offsets to each.
///
/// A frequency that lands exactly on a note has that note as its lower
/// neighbour.
///
/// # Errors
/// * `InvalidFrequency` if the frequency is outside the supported range
/// * `OutOfRange` if a neighbour falls outside the index bounds, which
///   happens just below the maximum frequency
pub fn offsets(frequency: f64) -> Result<Offsets> {
    frequency::validate(frequency)?;

    let nearest = tuning::nearest_index(frequency);
    let (lower, higher) = if frequency >= tuning::equal_tempered_frequency(nearest) {
        (nearest, nearest + 1)
    } else {
        (nearest - 1, nearest)
    };
    let lower = Note::from_index(lower)?;
    let higher = Note::from_index(higher)?;
    let semitone_gap = higher.frequency() - lower.frequency();

    Ok(Offsets {
        lower: Offset::new(frequency, lower, semitone_gap),
        higher: Offset::new(frequency, higher, semitone_gap),
    })
}

/// A measured frequency together with its nearest notes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pitch {
    frequency: f64,
    wave: AcousticWave,
    offsets: Offsets,
}

impl Pitch {
    /// Measures `frequency` against its neighbouring notes.
    ///
    /// # Errors
    /// * `InvalidFrequency` if the frequency is outside the supported range
    /// * `OutOfRange` as for [`offsets`]
    pub fn from_frequency(frequency: f64) -> Result<Self> {
        let wave = AcousticWave::from_frequency(frequency)?;
        let offsets = offsets(frequency)?;
        Ok(Pitch {
            frequency,
            wave,
            offsets,
        })
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn wave(&self) -> &AcousticWave {
        &self.wave
    }

    pub fn offsets(&self) -> &Offsets {
        &self.offsets
    }

    /// Offset to the note at or below the frequency.
    pub fn lower_offset(&self) -> &Offset {
        &self.offsets.lower
    }

    /// Offset to the note above the frequency.
    pub fn higher_offset(&self) -> &Offset {
        &self.offsets.higher
    }

    pub fn closest_offset(&self) -> &Offset {
        self.offsets.closest()
    }

    /// The closest note.
    pub fn note(&self) -> Note {
        self.offsets.closest().note
    }
}
