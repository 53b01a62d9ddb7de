// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chord parsing and construction.
//!
//! Splits free-form chord strings into root and quality, then realizes
//! them as pitch-class sequences through the quality dictionary.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::TheoryError;
use crate::pitch::{self, Note};
use crate::quality;

/// A chord realized from a root and quality.
///
/// `root` and `quality` keep the caller's spelling; `notes` is fully
/// derived from them and uses canonical pitch names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chord {
    pub root: String,
    pub quality: String,
    pub notes: Vec<Note>,
}

impl Chord {
    /// Build a chord from separate root and quality strings.
    ///
    /// An empty quality is accepted and realized as a major triad.
    pub fn from_parts(root: &str, chord_quality: &str) -> Result<Self, TheoryError> {
        let symbol = format!("{} {}", root, chord_quality);
        let chord_notes = notes(&symbol)?;
        Ok(Chord {
            root: root.to_string(),
            quality: chord_quality.to_string(),
            notes: chord_notes,
        })
    }

    /// Build a chord from a single chord symbol such as "Bbmaj7".
    pub fn from_symbol(symbol: &str) -> Result<Self, TheoryError> {
        let (root, chord_quality) = parse(symbol)?;
        let chord_notes = notes(symbol)?;
        Ok(Chord {
            root,
            quality: chord_quality,
            notes: chord_notes,
        })
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.quality.is_empty() {
            write!(f, "{}", self.root)
        } else {
            write!(f, "{} {}", self.root, self.quality)
        }
    }
}

/// Split a chord string into root and quality.
///
/// The shape is one uppercase letter A-G, an optional single accidental
/// (`#` or `b`), then the quality (possibly empty). The quality is trimmed
/// of surrounding whitespace; internal whitespace is kept. A root that is
/// shaped correctly but names no known pitch (e.g. "Cb", "H") is the same
/// `InvalidFormat` error as a malformed string.
pub fn parse(symbol: &str) -> Result<(String, String), TheoryError> {
    let mut chars = symbol.chars();
    let letter = chars.next().ok_or(TheoryError::InvalidFormat)?;
    if !matches!(letter, 'A'..='G') {
        return Err(TheoryError::InvalidFormat);
    }

    let rest = chars.as_str();
    let (root, quality_part) = match rest.chars().next() {
        Some(accidental @ ('#' | 'b')) => {
            (format!("{}{}", letter, accidental), &rest[1..])
        }
        _ => (letter.to_string(), rest),
    };

    if !pitch::is_valid(&root) {
        return Err(TheoryError::InvalidFormat);
    }

    Ok((root, quality_part.trim().to_string()))
}

/// Realize a chord string as its pitch classes, in chord-tone order.
pub fn notes(symbol: &str) -> Result<Vec<Note>, TheoryError> {
    let (root, chord_quality) = parse(symbol)?;
    let normalized = quality::normalize_quality(&chord_quality);
    let expanded = quality::expand_abbreviation(&normalized);
    let intervals = quality::intervals_for(expanded)?;
    trace!(root = %root, quality = %expanded, "realizing chord");
    intervals
        .iter()
        .map(|&interval| pitch::transpose(&root, interval as pitch::Semitones))
        .collect()
}

/// Realize each chord string independently, preserving order.
///
/// One malformed element never aborts the batch; its slot carries the
/// error instead.
pub fn notes_for_chords<S: AsRef<str>>(symbols: &[S]) -> Vec<Result<Vec<Note>, TheoryError>> {
    symbols.iter().map(|s| notes(s.as_ref())).collect()
}
