// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! tritone — chord naming, reverse lookup, and tritone substitution.
//!
//! Converts chord symbols ("C major", "G7", "Bbmaj7") into pitch classes,
//! finds chord names containing a given set of pitches, and performs the
//! tritone substitution on dominant chords. Everything operates on
//! immutable static dictionaries; all functions are pure and safe to call
//! from any thread.

pub mod chord;
pub mod error;
pub mod lookup;
pub mod pitch;
pub mod quality;
pub mod registry;
pub mod substitution;

pub use chord::{notes, notes_for_chords, parse, Chord};
pub use error::TheoryError;
pub use lookup::{
    all_chords, extract_pitches, find_chords_containing, find_chords_with_pitches, LookupOptions,
};
pub use pitch::Note;
pub use registry::{ChordRegistry, CustomChordDefinition};
pub use substitution::{substitute, substitute_with_notes};
