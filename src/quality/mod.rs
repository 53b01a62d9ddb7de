// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chord quality dictionary.
//!
//! Maps canonical quality identifiers to chord-tone interval lists and
//! shorthand symbols to canonical identifiers. The dominant sub-dictionary
//! is merged into the general dictionary and also exposed standalone for
//! tritone substitution.

pub mod tables;

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

use crate::error::TheoryError;

pub use tables::{QualityEntry, ABBREVIATIONS, DOMINANT_QUALITIES, GENERAL_QUALITIES};

/// Merged identifier -> intervals index (general plus dominant entries)
static QUALITY_INDEX: Lazy<HashMap<&'static str, &'static [u8]>> = Lazy::new(|| {
    GENERAL_QUALITIES
        .iter()
        .chain(DOMINANT_QUALITIES.iter())
        .copied()
        .collect()
});

/// Shorthand -> canonical identifier index
static ABBREVIATION_INDEX: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| ABBREVIATIONS.iter().copied().collect());

/// Identifiers that qualify a chord for tritone substitution
static DOMINANT_IDS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| DOMINANT_QUALITIES.iter().map(|&(id, _)| id).collect());

/// Lowercase and trim a quality string. Internal whitespace is preserved.
pub fn normalize_quality(quality: &str) -> String {
    quality.trim().to_lowercase()
}

/// Expand a shorthand symbol to its canonical identifier.
///
/// Unknown tokens pass through unchanged; the dictionary lookup reports
/// them, not this function.
pub fn expand_abbreviation(quality: &str) -> &str {
    ABBREVIATION_INDEX.get(quality).copied().unwrap_or(quality)
}

/// Look up the chord-tone intervals for a canonical identifier.
///
/// An empty identifier means an unadorned root and maps to "major".
pub fn intervals_for(identifier: &str) -> Result<&'static [u8], TheoryError> {
    let identifier = if identifier.is_empty() {
        "major"
    } else {
        identifier
    };
    QUALITY_INDEX
        .get(identifier)
        .copied()
        .ok_or_else(|| TheoryError::UnknownQuality(identifier.to_string()))
}

/// Whether an identifier belongs to the dominant family.
///
/// The empty string counts as dominant so that a bare root can take a
/// tritone substitution, even though the same chord renders as major
/// elsewhere. Inherited behavior; keep it.
pub fn is_dominant(identifier: &str) -> bool {
    identifier.is_empty() || DOMINANT_IDS.contains(identifier)
}

/// All dictionary entries in fixed order: general first, then dominant.
///
/// Reverse lookup depends on this order being stable.
pub fn all_quality_entries() -> impl Iterator<Item = QualityEntry> {
    GENERAL_QUALITIES
        .iter()
        .chain(DOMINANT_QUALITIES.iter())
        .copied()
}

/// The standalone dominant sub-dictionary
pub fn dominant_quality_entries() -> &'static [QualityEntry] {
    DOMINANT_QUALITIES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_quality() {
        assert_eq!(normalize_quality("  Major "), "major");
        assert_eq!(normalize_quality("MAJ7"), "maj7");
        assert_eq!(normalize_quality("minor 7"), "minor 7");
        assert_eq!(normalize_quality(""), "");
    }

    #[test]
    fn test_expand_abbreviation() {
        assert_eq!(expand_abbreviation("m7"), "minor7");
        assert_eq!(expand_abbreviation("min"), "minor");
        assert_eq!(expand_abbreviation("7#9"), "dominant7_sharp9");
        assert_eq!(expand_abbreviation("dominant"), "dominant7");
        assert_eq!(expand_abbreviation("major"), "major");
        assert_eq!(expand_abbreviation("nonsense"), "nonsense");
    }

    #[test]
    fn test_intervals_for_basic() {
        assert_eq!(intervals_for("major").unwrap(), &[0, 4, 7]);
        assert_eq!(intervals_for("minor7").unwrap(), &[0, 3, 7, 10]);
        assert_eq!(intervals_for("dominant7").unwrap(), &[0, 4, 7, 10]);
    }

    #[test]
    fn test_intervals_for_empty_is_major() {
        assert_eq!(intervals_for("").unwrap(), intervals_for("major").unwrap());
    }

    #[test]
    fn test_intervals_for_unknown() {
        assert_eq!(
            intervals_for("zzz"),
            Err(TheoryError::UnknownQuality("zzz".to_string()))
        );
    }

    #[test]
    fn test_is_dominant() {
        assert!(is_dominant("dominant7"));
        assert!(is_dominant("dominant13_sharp9_sharp11"));
        assert!(is_dominant(""));
        assert!(!is_dominant("major"));
        assert!(!is_dominant("minor7"));
        // Shorthand is only dominant after expansion
        assert!(!is_dominant("7"));
        assert!(is_dominant(expand_abbreviation("7")));
    }

    #[test]
    fn test_merged_dictionary_order() {
        let entries: Vec<_> = all_quality_entries().collect();
        assert_eq!(entries.len(), GENERAL_QUALITIES.len() + DOMINANT_QUALITIES.len());
        assert_eq!(entries[0].0, "major");
        assert_eq!(entries[GENERAL_QUALITIES.len()].0, "dominant7");
    }

    #[test]
    fn test_identifiers_are_disjoint() {
        let general: HashSet<_> = GENERAL_QUALITIES.iter().map(|&(id, _)| id).collect();
        for &(id, _) in DOMINANT_QUALITIES {
            assert!(!general.contains(id), "{} appears in both tables", id);
        }
    }

    #[test]
    fn test_every_entry_starts_at_root() {
        for (id, intervals) in all_quality_entries() {
            assert!(intervals.contains(&0), "{} is missing the root", id);
        }
    }

    #[test]
    fn test_no_entry_duplicates_a_note() {
        for (id, intervals) in all_quality_entries() {
            let mut classes: Vec<u8> = intervals.iter().map(|i| i % 12).collect();
            classes.sort_unstable();
            let len = classes.len();
            classes.dedup();
            assert_eq!(classes.len(), len, "{} repeats a pitch class", id);
        }
    }

    #[test]
    fn test_altered_thirteenths_keep_authored_order() {
        assert_eq!(
            intervals_for("dominant13_flat9").unwrap(),
            &[0, 4, 7, 10, 21, 13]
        );
        assert_eq!(
            intervals_for("major13_sharp11").unwrap(),
            &[0, 4, 7, 11, 14, 21, 18]
        );
    }

    #[test]
    fn test_every_abbreviation_expands_to_known_identifier() {
        for &(shorthand, canonical) in ABBREVIATIONS {
            assert!(
                intervals_for(canonical).is_ok(),
                "{} expands to unknown {}",
                shorthand,
                canonical
            );
        }
    }

    #[test]
    fn test_abbreviation_keys_are_normalized() {
        for &(shorthand, _) in ABBREVIATIONS {
            assert_eq!(shorthand, normalize_quality(shorthand));
        }
    }
}
