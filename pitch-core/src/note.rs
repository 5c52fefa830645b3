//! # Notes
//!
//! A [`Note`] is a letter and an octave, or equivalently a pitch index
//! relative to A4. Construction always validates against the derived
//! index and octave bounds, so every `Note` in existence is in range.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PitchError, Result};
use crate::tuning;
use crate::wave::AcousticWave;

/// The twelve chromatic pitch classes, sharps only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Letter {
    A,
    #[serde(rename = "A#")]
    ASharp,
    B,
    C,
    #[serde(rename = "C#")]
    CSharp,
    D,
    #[serde(rename = "D#")]
    DSharp,
    E,
    F,
    #[serde(rename = "F#")]
    FSharp,
    G,
    #[serde(rename = "G#")]
    GSharp,
}

impl Letter {
    /// All letters in cyclic order, zero-indexed at A.
    pub const ALL: [Letter; 12] = [
        Letter::A,
        Letter::ASharp,
        Letter::B,
        Letter::C,
        Letter::CSharp,
        Letter::D,
        Letter::DSharp,
        Letter::E,
        Letter::F,
        Letter::FSharp,
        Letter::G,
        Letter::GSharp,
    ];

    /// Position within [`Letter::ALL`].
    pub fn position(self) -> i32 {
        self as i32
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Letter::A => "A",
            Letter::ASharp => "A#",
            Letter::B => "B",
            Letter::C => "C",
            Letter::CSharp => "C#",
            Letter::D => "D",
            Letter::DSharp => "D#",
            Letter::E => "E",
            Letter::F => "F",
            Letter::FSharp => "F#",
            Letter::G => "G",
            Letter::GSharp => "G#",
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Letter {
    type Err = PitchError;

    fn from_str(s: &str) -> Result<Self> {
        Letter::ALL
            .into_iter()
            .find(|letter| letter.as_str() == s)
            .ok_or_else(|| PitchError::InvalidNoteName(s.to_string()))
    }
}

/// A note of the equal-tempered scale within the supported range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Note {
    index: i32,
    letter: Letter,
    octave: i32,
}

impl Note {
    /// Builds the note `index` semitones away from A4.
    ///
    /// # Errors
    /// * `OutOfRange` if the index is outside the derived index bounds
    pub fn from_index(index: i32) -> Result<Self> {
        tuning::validate_index(index)?;
        Ok(Note {
            index,
            letter: tuning::letter_for_index(index),
            octave: tuning::octave_for_index(index),
        })
    }

    /// The note nearest to `frequency`.
    ///
    /// # Errors
    /// * `InvalidFrequency` if the frequency is outside the supported range
    pub fn from_frequency(frequency: f64) -> Result<Self> {
        let index = tuning::index_for_frequency(frequency)?;
        Note::from_index(index)
    }

    /// Builds a note from its letter and octave, e.g. `(Letter::C, 4)`.
    ///
    /// # Errors
    /// * `OutOfRange` if the octave, or the resulting index, is out of range
    pub fn from_letter(letter: Letter, octave: i32) -> Result<Self> {
        let index = tuning::index_for_letter(letter, octave)?;
        Note::from_index(index)
    }

    /// Semitones away from A4.
    pub fn index(&self) -> i32 {
        self.index
    }

    pub fn letter(&self) -> Letter {
        self.letter
    }

    pub fn octave(&self) -> i32 {
        self.octave
    }

    /// Equal-tempered frequency of this note in Hz.
    pub fn frequency(&self) -> f64 {
        tuning::equal_tempered_frequency(self.index)
    }

    /// Human-readable name such as "A4" or "A#2".
    pub fn string(&self) -> String {
        self.to_string()
    }

    /// The note one semitone below.
    pub fn lower(&self) -> Result<Note> {
        Note::from_index(self.index - 1)
    }

    /// The note one semitone above.
    pub fn higher(&self) -> Result<Note> {
        Note::from_index(self.index + 1)
    }

    /// The acoustic wave of this note's frequency.
    ///
    /// Fails for the lowest indices, whose frequencies fall just below the
    /// supported range.
    pub fn wave(&self) -> Result<AcousticWave> {
        AcousticWave::from_frequency(self.frequency())
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter, self.octave)
    }
}

impl PartialOrd for Note {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Note {
    fn cmp(&self, other: &Self) -> Ordering {
        self.index.cmp(&other.index)
    }
}

impl FromStr for Note {
    type Err = PitchError;

    /// Parses names such as "A4" or "C#3".
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || PitchError::InvalidNoteName(s.to_string());
        let split = s
            .find(|c: char| c.is_ascii_digit() || c == '-')
            .ok_or_else(invalid)?;
        let (letter, octave) = s.split_at(split);
        let letter: Letter = letter.parse().map_err(|_| invalid())?;
        let octave: i32 = octave.parse().map_err(|_| invalid())?;
        Note::from_letter(letter, octave)
    }
}
