// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for the chord pipeline.
//!
//! Every fallible library operation returns exactly one of these kinds.
//! Expected failures (malformed input, unknown qualities) are values, not
//! panics.

use thiserror::Error;

/// Errors produced by pitch and chord operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    /// Input does not match the root-plus-quality shape, or the root portion
    /// is not a recognized pitch (e.g. "H", "Cb").
    #[error("invalid chord format")]
    InvalidFormat,

    /// The quality has no dictionary entry after normalization and
    /// abbreviation expansion. Carries the expanded identifier.
    #[error("unknown chord quality: {0}")]
    UnknownQuality(String),

    /// Fewer distinct pitches supplied to reverse lookup than the match
    /// mode requires.
    #[error("not enough distinct pitches for chord lookup")]
    InsufficientPitches,

    /// Tritone substitution requested for a chord outside the dominant
    /// family.
    #[error("tritone substitution requires a dominant chord")]
    DominantRequired,

    /// Transposition requested on a root that is not a recognized pitch.
    /// Only reachable through direct `transpose` calls; the string entry
    /// points report `InvalidFormat` instead.
    #[error("invalid root note")]
    InvalidRoot,
}
