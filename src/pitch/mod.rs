// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chromatic pitch model with enharmonic normalization.
//!
//! Provides the twelve canonical pitch classes (sharps-canonical), an
//! enharmonic alias table, and string-level note operations used by the
//! chord parser and reverse lookup.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;

/// Semitone offset type
pub type Semitones = i32;

/// Note names (pitch classes), chromatic order, sharps-canonical
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Note {
    C,
    Cs, // C# / Db
    D,
    Ds, // D# / Eb
    E,
    F,
    Fs, // F# / Gb
    G,
    Gs, // G# / Ab
    A,
    As, // A# / Bb
    B,
}

impl Note {
    /// All notes in chromatic order
    pub const ALL: [Note; 12] = [
        Note::C,
        Note::Cs,
        Note::D,
        Note::Ds,
        Note::E,
        Note::F,
        Note::Fs,
        Note::G,
        Note::Gs,
        Note::A,
        Note::As,
        Note::B,
    ];

    /// Get the pitch class (0-11) for this note
    pub fn pitch_class(self) -> u8 {
        match self {
            Note::C => 0,
            Note::Cs => 1,
            Note::D => 2,
            Note::Ds => 3,
            Note::E => 4,
            Note::F => 5,
            Note::Fs => 6,
            Note::G => 7,
            Note::Gs => 8,
            Note::A => 9,
            Note::As => 10,
            Note::B => 11,
        }
    }

    /// Get note from pitch class
    pub fn from_pitch_class(pc: u8) -> Self {
        Note::ALL[(pc % 12) as usize]
    }

    /// Canonical name of this note (e.g. "C#")
    pub fn name(self) -> &'static str {
        match self {
            Note::C => "C",
            Note::Cs => "C#",
            Note::D => "D",
            Note::Ds => "D#",
            Note::E => "E",
            Note::F => "F",
            Note::Fs => "F#",
            Note::G => "G",
            Note::Gs => "G#",
            Note::A => "A",
            Note::As => "A#",
            Note::B => "B",
        }
    }

    /// Parse a note from a canonical name or enharmonic alias
    pub fn from_name(s: &str) -> Option<Self> {
        index_of(s).map(|i| Note::ALL[i])
    }

    /// Transpose by semitones (negative allowed)
    pub fn transpose(self, semitones: Semitones) -> Self {
        let new_pc = (self.pitch_class() as Semitones + semitones).rem_euclid(12) as u8;
        Note::from_pitch_class(new_pc)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Enharmonic aliases accepted in chord roots and pitch lists.
///
/// Every value is a canonical note name. Flat spellings map to the
/// equivalent sharp; E# and B# fold onto the adjacent naturals.
const ENHARMONIC: &[(&str, &str)] = &[
    ("Db", "C#"),
    ("Eb", "D#"),
    ("Gb", "F#"),
    ("Ab", "G#"),
    ("Bb", "A#"),
    ("E#", "F"),
    ("B#", "C"),
];

/// Resolve an enharmonic alias to its canonical spelling.
///
/// Strings that are neither canonical nor aliased pass through unchanged;
/// validity is checked by the callers that need it, not here.
pub fn normalize(name: &str) -> &str {
    for &(alias, canonical) in ENHARMONIC {
        if alias == name {
            return canonical;
        }
    }
    name
}

/// Chromatic index (0-11) of a note name after normalization
pub fn index_of(name: &str) -> Option<usize> {
    let canonical = normalize(name);
    Note::ALL.iter().position(|n| n.name() == canonical)
}

/// Whether a string names a canonical pitch class or a known alias
pub fn is_valid(name: &str) -> bool {
    index_of(name).is_some()
}

/// Transpose a named note by a semitone offset.
///
/// Offsets may be negative; the result always lands on a canonical note.
pub fn transpose(name: &str, semitones: Semitones) -> Result<Note, TheoryError> {
    let index = index_of(name).ok_or(TheoryError::InvalidRoot)? as Semitones;
    let pc = (index + semitones).rem_euclid(12) as u8;
    Ok(Note::from_pitch_class(pc))
}
