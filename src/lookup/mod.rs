// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Reverse chord lookup.
//!
//! Enumerates every root and dictionary quality, rebuilding each candidate
//! chord fresh, and keeps those whose note sets satisfy the match
//! predicate. Bounded by dictionary size; no caching.

use tracing::debug;

use crate::error::TheoryError;
use crate::pitch::{self, Note};
use crate::quality;

/// Options for reverse lookup
#[derive(Debug, Clone, Copy, Default)]
pub struct LookupOptions {
    /// Require the candidate's note set to equal the input set instead of
    /// merely containing it
    pub match_exact: bool,
}

/// Distinct normalized pitches required per mode
fn required_pitches(options: &LookupOptions) -> usize {
    if options.match_exact {
        3
    } else {
        2
    }
}

/// Scan free text for pitch tokens.
///
/// A token is one letter A-G optionally followed by `#` or `b`; everything
/// else is ignored.
pub fn extract_pitches(text: &str) -> Vec<String> {
    let mut pitches = Vec::new();
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if matches!(c, 'A'..='G') {
            let mut token = c.to_string();
            if let Some(&accidental) = chars.peek() {
                if matches!(accidental, '#' | 'b') {
                    token.push(accidental);
                    chars.next();
                }
            }
            pitches.push(token);
        }
    }
    pitches
}

/// Find chord names containing the pitches scanned from free text.
pub fn find_chords_containing(
    text: &str,
    options: &LookupOptions,
) -> Result<Vec<String>, TheoryError> {
    let pitches = extract_pitches(text);
    find_matches(&pitches, options)
}

/// Find chord names containing an explicit list of pitches.
pub fn find_chords_with_pitches<S: AsRef<str>>(
    pitches: &[S],
    options: &LookupOptions,
) -> Result<Vec<String>, TheoryError> {
    let pitches: Vec<String> = pitches.iter().map(|p| p.as_ref().to_string()).collect();
    find_matches(&pitches, options)
}

fn find_matches(pitches: &[String], options: &LookupOptions) -> Result<Vec<String>, TheoryError> {
    // Normalize and de-duplicate, keeping first occurrence
    let mut unique: Vec<&str> = Vec::new();
    for pitch_name in pitches {
        let canonical = pitch::normalize(pitch_name);
        if !unique.contains(&canonical) {
            unique.push(canonical);
        }
    }

    if unique.len() < required_pitches(options) {
        return Err(TheoryError::InsufficientPitches);
    }

    let mut matches = Vec::new();
    for root in Note::ALL {
        for (identifier, intervals) in quality::all_quality_entries() {
            let candidate: Vec<&str> = intervals
                .iter()
                .map(|&i| root.transpose(i as pitch::Semitones).name())
                .collect();

            let contains_all = unique.iter().all(|p| candidate.contains(p));
            let selected = if options.match_exact {
                contains_all && candidate.len() == unique.len()
            } else {
                contains_all
            };

            if selected {
                matches.push(format!("{} {}", root, identifier));
            }
        }
    }

    debug!(
        pitches = unique.len(),
        matches = matches.len(),
        exact = options.match_exact,
        "reverse lookup"
    );
    Ok(matches)
}

/// Every chord the dictionary can name, with its notes, in enumeration
/// order (roots in chromatic order, qualities in dictionary order).
pub fn all_chords() -> Vec<(String, Vec<Note>)> {
    let mut chords = Vec::new();
    for root in Note::ALL {
        for (identifier, intervals) in quality::all_quality_entries() {
            let notes: Vec<Note> = intervals
                .iter()
                .map(|&i| root.transpose(i as pitch::Semitones))
                .collect();
            chords.push((format!("{} {}", root, identifier), notes));
        }
    }
    chords
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_pitches() {
        assert_eq!(extract_pitches("CEG"), vec!["C", "E", "G"]);
        assert_eq!(extract_pitches("C# D# F#"), vec!["C#", "D#", "F#"]);
        assert_eq!(extract_pitches("Db, Eb and Gb!"), vec!["Db", "Eb", "Gb"]);
        assert_eq!(extract_pitches("xyz123"), Vec::<String>::new());
    }

    #[test]
    fn test_extract_ignores_lone_flats() {
        // 'b' only attaches to a preceding note letter
        assert_eq!(extract_pitches("bC"), vec!["C"]);
    }

    #[test]
    fn test_find_contains_expected_chords() {
        let results = find_chords_containing("CEG", &LookupOptions::default()).unwrap();
        assert!(results.contains(&"C major".to_string()));
        assert!(results.contains(&"C major7".to_string()));
        assert!(results.contains(&"A minor7".to_string()));
    }

    #[test]
    fn test_find_too_few_pitches() {
        assert_eq!(
            find_chords_with_pitches(&["C"], &LookupOptions::default()),
            Err(TheoryError::InsufficientPitches)
        );
        // Duplicates collapse before the threshold check
        assert_eq!(
            find_chords_containing("C C C", &LookupOptions::default()),
            Err(TheoryError::InsufficientPitches)
        );
    }

    #[test]
    fn test_exact_mode_needs_three() {
        let options = LookupOptions { match_exact: true };
        assert_eq!(
            find_chords_containing("C G", &options),
            Err(TheoryError::InsufficientPitches)
        );
    }

    #[test]
    fn test_exact_mode_matches_whole_sets() {
        let options = LookupOptions { match_exact: true };
        let results = find_chords_containing("C E G", &options).unwrap();
        assert!(results.contains(&"C major".to_string()));
        // Every exact match realizes exactly the three input pitches
        for name in &results {
            let notes = crate::chord::notes(name).unwrap();
            assert_eq!(notes.len(), 3, "{} is not a three-note chord", name);
        }
        // Supersets are excluded in exact mode
        assert!(!results.contains(&"C major7".to_string()));
    }

    #[test]
    fn test_enharmonic_inputs_match_identically() {
        let sharps = find_chords_containing("C# D# F#", &LookupOptions::default()).unwrap();
        let flats = find_chords_containing("Db Eb Gb", &LookupOptions::default()).unwrap();
        assert_eq!(sharps, flats);
        assert!(!sharps.is_empty());
    }

    #[test]
    fn test_results_follow_enumeration_order() {
        let results = find_chords_containing("CEG", &LookupOptions::default()).unwrap();
        // Roots appear in chromatic order within the result list
        let roots: Vec<usize> = results
            .iter()
            .map(|name| {
                let root = name.split_whitespace().next().unwrap();
                pitch::index_of(root).unwrap()
            })
            .collect();
        let mut sorted = roots.clone();
        sorted.sort_unstable();
        assert_eq!(roots, sorted);
    }

    #[test]
    fn test_unrecognized_pitch_matches_nothing() {
        let results =
            find_chords_with_pitches(&["C", "E", "X"], &LookupOptions::default()).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_all_chords_enumeration() {
        let chords = all_chords();
        let per_root = quality::all_quality_entries().count();
        assert_eq!(chords.len(), 12 * per_root);
        assert_eq!(chords[0].0, "C major");
        assert_eq!(chords[0].1, vec![Note::C, Note::E, Note::G]);
    }

    #[test]
    fn test_all_chord_names_parse_back() {
        for (name, notes) in all_chords().into_iter().take(200) {
            assert_eq!(crate::chord::notes(&name).unwrap(), notes, "{}", name);
        }
    }
}
