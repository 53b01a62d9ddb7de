// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Tritone substitution.
//!
//! Replaces a dominant chord with the dominant chord whose root lies six
//! semitones away. Six is self-inverse mod 12, so applying the
//! substitution twice restores the original root.

use tracing::debug;

use crate::chord::{self, Chord};
use crate::error::TheoryError;
use crate::pitch::{self, Note};
use crate::quality;

/// Semitones between a dominant chord and its substitute
const TRITONE: pitch::Semitones = 6;

/// Substitute a dominant chord, returning the new chord name.
///
/// The suffix keeps the original spelling of the quality: shorthand in,
/// shorthand out. A bare root is treated as a dominant 7th.
pub fn substitute(symbol: &str) -> Result<String, TheoryError> {
    let chord = Chord::from_symbol(symbol)?;
    let normalized = quality::normalize_quality(&chord.quality);
    let expanded = quality::expand_abbreviation(&normalized);

    if !quality::is_dominant(&normalized) && !quality::is_dominant(expanded) {
        return Err(TheoryError::DominantRequired);
    }

    let new_root = pitch::transpose(&chord.root, TRITONE)?;
    let substituted = render(new_root, &chord.quality, &normalized, expanded);
    debug!(from = %symbol, to = %substituted, "tritone substitution");
    Ok(substituted)
}

/// Substitute a dominant chord and realize the substitute's notes.
pub fn substitute_with_notes(symbol: &str) -> Result<(String, Vec<Note>), TheoryError> {
    let substituted = substitute(symbol)?;
    let notes = chord::notes(&substituted)?;
    Ok((substituted, notes))
}

/// Format the substituted chord name from the original quality spelling.
fn render(new_root: Note, original: &str, normalized: &str, expanded: &str) -> String {
    if original.is_empty() {
        // Bare root implies a dominant 7th
        return format!("{}7", new_root);
    }
    if original == "dominant" {
        return format!("{} dominant7", new_root);
    }
    if matches!(original, "7" | "9" | "11" | "13") {
        return format!("{}{}", new_root, original);
    }
    if quality::is_dominant(normalized) || quality::is_dominant(expanded) {
        return format!("{} {}", new_root, original);
    }
    // Unreachable after the dominant check, but keep the spelling intact
    format!("{}{}", new_root, original)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitute_plain_seventh() {
        assert_eq!(substitute("G7").unwrap(), "C#7");
        assert_eq!(substitute("C7").unwrap(), "F#7");
        assert_eq!(substitute("D9").unwrap(), "G#9");
        assert_eq!(substitute("A13").unwrap(), "D#13");
    }

    #[test]
    fn test_substitute_bare_root() {
        assert_eq!(substitute("G").unwrap(), "C#7");
        assert_eq!(substitute("Bb").unwrap(), "E7");
    }

    #[test]
    fn test_substitute_dominant_word() {
        assert_eq!(substitute("G dominant").unwrap(), "C# dominant7");
    }

    #[test]
    fn test_substitute_keeps_altered_spelling() {
        assert_eq!(substitute("G7#9").unwrap(), "C# 7#9");
        assert_eq!(substitute("C 7b5").unwrap(), "F# 7b5");
        assert_eq!(substitute("E 13sus4").unwrap(), "A# 13sus4");
        assert_eq!(substitute("F dominant9").unwrap(), "B dominant9");
    }

    #[test]
    fn test_substitute_enharmonic_root() {
        assert_eq!(substitute("Db7").unwrap(), "G7");
        assert_eq!(substitute("Bb7").unwrap(), "E7");
    }

    #[test]
    fn test_substitute_rejects_non_dominant() {
        assert_eq!(substitute("C major"), Err(TheoryError::DominantRequired));
        assert_eq!(substitute("A m7"), Err(TheoryError::DominantRequired));
        assert_eq!(substitute("F maj7"), Err(TheoryError::DominantRequired));
    }

    #[test]
    fn test_substitute_rejects_bad_input() {
        assert_eq!(substitute("notachord"), Err(TheoryError::InvalidFormat));
        assert_eq!(substitute(""), Err(TheoryError::InvalidFormat));
    }

    #[test]
    fn test_substitution_is_an_involution_on_the_root() {
        for symbol in ["G7", "C#9", "F 7#9", "A 13b9", "E7sus4"] {
            let once = substitute(symbol).unwrap();
            let twice = substitute(&once).unwrap();
            let original_root = crate::chord::parse(symbol).unwrap().0;
            let final_root = crate::chord::parse(&twice).unwrap().0;
            assert_eq!(
                pitch::normalize(&original_root),
                pitch::normalize(&final_root),
                "{} -> {} -> {}",
                symbol,
                once,
                twice
            );
        }
    }

    #[test]
    fn test_substitute_with_notes() {
        let (name, notes) = substitute_with_notes("G7").unwrap();
        assert_eq!(name, "C#7");
        assert_eq!(notes, vec![Note::Cs, Note::F, Note::Gs, Note::B]);
    }

    #[test]
    fn test_substitute_with_notes_altered() {
        let (name, notes) = substitute_with_notes("G7#9").unwrap();
        assert_eq!(name, "C# 7#9");
        // dominant7_sharp9 from C#
        assert_eq!(
            notes,
            vec![Note::Cs, Note::F, Note::Gs, Note::B, Note::E]
        );
    }
}
