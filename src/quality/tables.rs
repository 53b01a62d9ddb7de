// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Static chord-quality reference data.
//!
//! Hand-curated tables of standard jazz-harmony nomenclature. Interval
//! lists are chord-tone order as authored, not sorted pitch order; the
//! altered-13th entries append the alteration after the 13th, so their
//! interval lists are deliberately not monotonic. Do not reorder.

/// Quality identifier paired with its chord-tone intervals from the root.
pub type QualityEntry = (&'static str, &'static [u8]);

/// General chord qualities: triads, sixths, sevenths, add chords, ninths,
/// elevenths, thirteenths, altered and suspended variants.
pub const GENERAL_QUALITIES: &[QualityEntry] = &[
    // Triads and power chords
    ("major", &[0, 4, 7]),
    ("minor", &[0, 3, 7]),
    ("diminished", &[0, 3, 6]),
    ("augmented", &[0, 4, 8]),
    ("fifth", &[0, 7]),
    ("flat5", &[0, 4, 6]),
    ("minor_sharp5", &[0, 3, 8]),
    // Suspended
    ("sus2", &[0, 2, 7]),
    ("sus4", &[0, 5, 7]),
    ("sus2_sus4", &[0, 2, 5, 7]),
    ("sus4_flat9", &[0, 5, 7, 13]),
    // Sixths
    ("major6", &[0, 4, 7, 9]),
    ("minor6", &[0, 3, 7, 9]),
    ("major6_add9", &[0, 4, 7, 9, 14]),
    ("minor6_add9", &[0, 3, 7, 9, 14]),
    ("major_flat6", &[0, 4, 7, 8]),
    ("minor_flat6", &[0, 3, 7, 8]),
    // Sevenths
    ("major7", &[0, 4, 7, 11]),
    ("major7_flat5", &[0, 4, 6, 11]),
    ("major7_sharp5", &[0, 4, 8, 11]),
    ("major7_sharp11", &[0, 4, 7, 11, 18]),
    ("major7_add11", &[0, 4, 7, 11, 17]),
    ("major7_sus4", &[0, 5, 7, 11]),
    ("minor7", &[0, 3, 7, 10]),
    ("minor7_flat5", &[0, 3, 6, 10]),
    ("minor7_sharp5", &[0, 3, 8, 10]),
    ("minor7_flat9", &[0, 3, 7, 10, 13]),
    ("minor7_add11", &[0, 3, 7, 10, 17]),
    ("minor_major7", &[0, 3, 7, 11]),
    ("diminished7", &[0, 3, 6, 9]),
    ("diminished_major7", &[0, 3, 6, 11]),
    ("augmented7", &[0, 4, 8, 10]),
    // Added tones
    ("add4", &[0, 4, 5, 7]),
    ("add9", &[0, 4, 7, 14]),
    ("minor_add9", &[0, 3, 7, 14]),
    ("add11", &[0, 4, 7, 17]),
    ("minor_add11", &[0, 3, 7, 17]),
    // Ninths
    ("major9", &[0, 4, 7, 11, 14]),
    ("major9_sharp11", &[0, 4, 7, 11, 14, 18]),
    ("minor9", &[0, 3, 7, 10, 14]),
    ("minor9_flat5", &[0, 3, 6, 10, 14]),
    ("minor_major9", &[0, 3, 7, 11, 14]),
    // Elevenths
    ("major11", &[0, 4, 7, 11, 14, 17]),
    ("minor11", &[0, 3, 7, 10, 14, 17]),
    ("minor11_flat5", &[0, 3, 6, 10, 14, 17]),
    ("minor_major11", &[0, 3, 7, 11, 14, 17]),
    // Thirteenths
    ("major13", &[0, 4, 7, 11, 14, 21]),
    ("major13_sharp11", &[0, 4, 7, 11, 14, 21, 18]),
    ("minor13", &[0, 3, 7, 10, 14, 17, 21]),
    ("minor_major13", &[0, 3, 7, 11, 14, 17, 21]),
];

/// Dominant-family qualities. Merged into the general dictionary for
/// lookups and also consulted standalone by tritone substitution.
///
/// The altered-13th entries replace the natural 9th, so the base tones run
/// through the 13th and the alteration follows it.
pub const DOMINANT_QUALITIES: &[QualityEntry] = &[
    ("dominant7", &[0, 4, 7, 10]),
    ("dominant9", &[0, 4, 7, 10, 14]),
    ("dominant11", &[0, 4, 7, 10, 14, 17]),
    ("dominant13", &[0, 4, 7, 10, 14, 21]),
    ("dominant7_flat5", &[0, 4, 6, 10]),
    ("dominant7_sharp5", &[0, 4, 8, 10]),
    ("dominant7_flat9", &[0, 4, 7, 10, 13]),
    ("dominant7_sharp9", &[0, 4, 7, 10, 15]),
    ("dominant7_sharp11", &[0, 4, 7, 10, 18]),
    ("dominant7_flat13", &[0, 4, 7, 10, 20]),
    ("dominant7_flat5_flat9", &[0, 4, 6, 10, 13]),
    ("dominant7_sharp5_sharp9", &[0, 4, 8, 10, 15]),
    ("dominant9_flat5", &[0, 4, 6, 10, 14]),
    ("dominant9_sharp5", &[0, 4, 8, 10, 14]),
    ("dominant9_sharp11", &[0, 4, 7, 10, 14, 18]),
    ("dominant13_flat9", &[0, 4, 7, 10, 21, 13]),
    ("dominant13_sharp9", &[0, 4, 7, 10, 21, 15]),
    ("dominant13_sharp11", &[0, 4, 7, 10, 21, 18]),
    ("dominant13_sharp9_sharp11", &[0, 4, 7, 10, 21, 15, 18]),
    ("dominant7_sus4", &[0, 5, 7, 10]),
    ("dominant9_sus4", &[0, 5, 7, 10, 14]),
    ("dominant13_sus4", &[0, 5, 7, 10, 14, 21]),
];

/// Shorthand chord symbols mapped to canonical quality identifiers.
///
/// Keys are matched after quality normalization (lowercase, trimmed), so
/// every key is spelled lowercase. Many-to-one is expected; tokens absent
/// from this table pass through expansion unchanged.
pub const ABBREVIATIONS: &[(&str, &str)] = &[
    // Major family
    ("maj", "major"),
    ("ma", "major"),
    ("6", "major6"),
    ("maj6", "major6"),
    ("ma6", "major6"),
    ("69", "major6_add9"),
    ("6/9", "major6_add9"),
    ("maj69", "major6_add9"),
    ("6add9", "major6_add9"),
    ("maj7", "major7"),
    ("ma7", "major7"),
    ("maj7b5", "major7_flat5"),
    ("maj7-5", "major7_flat5"),
    ("maj7#5", "major7_sharp5"),
    ("maj7+5", "major7_sharp5"),
    ("maj7#11", "major7_sharp11"),
    ("maj7+11", "major7_sharp11"),
    ("maj7add11", "major7_add11"),
    ("maj7sus4", "major7_sus4"),
    ("maj9", "major9"),
    ("ma9", "major9"),
    ("maj9#11", "major9_sharp11"),
    ("maj11", "major11"),
    ("ma11", "major11"),
    ("maj13", "major13"),
    ("ma13", "major13"),
    ("maj13#11", "major13_sharp11"),
    ("add2", "add9"),
    ("b6", "major_flat6"),
    // Minor family
    ("m", "minor"),
    ("min", "minor"),
    ("mi", "minor"),
    ("-", "minor"),
    ("m6", "minor6"),
    ("min6", "minor6"),
    ("mi6", "minor6"),
    ("m69", "minor6_add9"),
    ("min69", "minor6_add9"),
    ("mb6", "minor_flat6"),
    ("m7", "minor7"),
    ("min7", "minor7"),
    ("mi7", "minor7"),
    ("-7", "minor7"),
    ("m7b5", "minor7_flat5"),
    ("min7b5", "minor7_flat5"),
    ("m7-5", "minor7_flat5"),
    ("m7#5", "minor7_sharp5"),
    ("m7+5", "minor7_sharp5"),
    ("m7b9", "minor7_flat9"),
    ("m7add11", "minor7_add11"),
    ("mmaj7", "minor_major7"),
    ("minmaj7", "minor_major7"),
    ("m(maj7)", "minor_major7"),
    ("mm7", "minor_major7"),
    ("mmaj9", "minor_major9"),
    ("minmaj9", "minor_major9"),
    ("mmaj11", "minor_major11"),
    ("mmaj13", "minor_major13"),
    ("m9", "minor9"),
    ("min9", "minor9"),
    ("-9", "minor9"),
    ("m9b5", "minor9_flat5"),
    ("m11", "minor11"),
    ("min11", "minor11"),
    ("m11b5", "minor11_flat5"),
    ("m13", "minor13"),
    ("min13", "minor13"),
    ("madd9", "minor_add9"),
    ("m(add9)", "minor_add9"),
    ("madd11", "minor_add11"),
    ("m#5", "minor_sharp5"),
    ("m+5", "minor_sharp5"),
    // Diminished and augmented
    ("dim", "diminished"),
    ("o", "diminished"),
    ("dim7", "diminished7"),
    ("o7", "diminished7"),
    ("dimmaj7", "diminished_major7"),
    ("aug", "augmented"),
    ("+", "augmented"),
    ("aug7", "augmented7"),
    ("+7", "augmented7"),
    // Suspended and power
    ("sus", "sus4"),
    ("suspended", "sus4"),
    ("sus24", "sus2_sus4"),
    ("susb9", "sus4_flat9"),
    ("sus4b9", "sus4_flat9"),
    ("5", "fifth"),
    ("b5", "flat5"),
    ("(b5)", "flat5"),
    // Dominant family
    ("7", "dominant7"),
    ("dom", "dominant7"),
    ("dom7", "dominant7"),
    ("dominant", "dominant7"),
    ("9", "dominant9"),
    ("dom9", "dominant9"),
    ("11", "dominant11"),
    ("dom11", "dominant11"),
    ("13", "dominant13"),
    ("dom13", "dominant13"),
    ("7b5", "dominant7_flat5"),
    ("7-5", "dominant7_flat5"),
    ("7#5", "dominant7_sharp5"),
    ("7+5", "dominant7_sharp5"),
    ("7b9", "dominant7_flat9"),
    ("7-9", "dominant7_flat9"),
    ("7#9", "dominant7_sharp9"),
    ("7+9", "dominant7_sharp9"),
    ("7#11", "dominant7_sharp11"),
    ("7+11", "dominant7_sharp11"),
    ("7b13", "dominant7_flat13"),
    ("7b5b9", "dominant7_flat5_flat9"),
    ("7#5#9", "dominant7_sharp5_sharp9"),
    ("9b5", "dominant9_flat5"),
    ("9-5", "dominant9_flat5"),
    ("9#5", "dominant9_sharp5"),
    ("9+5", "dominant9_sharp5"),
    ("9#11", "dominant9_sharp11"),
    ("13b9", "dominant13_flat9"),
    ("13-9", "dominant13_flat9"),
    ("13#9", "dominant13_sharp9"),
    ("13+9", "dominant13_sharp9"),
    ("13#11", "dominant13_sharp11"),
    ("13+11", "dominant13_sharp11"),
    ("13#9#11", "dominant13_sharp9_sharp11"),
    ("7sus", "dominant7_sus4"),
    ("7sus4", "dominant7_sus4"),
    ("9sus", "dominant9_sus4"),
    ("9sus4", "dominant9_sus4"),
    ("13sus", "dominant13_sus4"),
    ("13sus4", "dominant13_sus4"),
];
