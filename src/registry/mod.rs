// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! User-defined chord qualities.
//!
//! Loads extra chord definitions from YAML files and resolves quality
//! names against them before falling back to the built-in dictionary.
//! The registry never alters the built-in tables; the core string
//! pipeline ignores it entirely.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::chord::Chord;
use crate::error::TheoryError;
use crate::pitch;
use crate::quality;

/// A chord quality defined outside the built-in dictionary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomChordDefinition {
    /// Name of the quality
    pub name: String,
    /// Chord-tone intervals from the root (semitones)
    pub intervals: Vec<u8>,
}

/// Registry of custom chord definitions layered over the built-ins
#[derive(Debug, Clone, Default)]
pub struct ChordRegistry {
    custom_chords: HashMap<String, CustomChordDefinition>,
}

impl ChordRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a custom chord quality
    pub fn register(&mut self, def: CustomChordDefinition) {
        self.custom_chords.insert(def.name.clone(), def);
    }

    /// Load a registry from a YAML file containing a list of definitions
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read chord definitions: {:?}", path.as_ref()))?;
        Self::from_yaml(&contents)
    }

    /// Parse a registry from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let definitions: Vec<CustomChordDefinition> =
            serde_yaml::from_str(yaml).context("Failed to parse chord definitions")?;
        let mut registry = Self::new();
        for def in definitions {
            registry.register(def);
        }
        Ok(registry)
    }

    /// Serialize the custom definitions to a YAML string
    pub fn to_yaml(&self) -> Result<String> {
        let mut definitions: Vec<&CustomChordDefinition> = self.custom_chords.values().collect();
        definitions.sort_by(|a, b| a.name.cmp(&b.name));
        serde_yaml::to_string(&definitions).context("Failed to serialize chord definitions")
    }

    /// Intervals for a quality name (custom first, then built-in)
    pub fn intervals_for(&self, name: &str) -> Option<Vec<u8>> {
        if let Some(def) = self.custom_chords.get(name) {
            return Some(def.intervals.clone());
        }

        let normalized = quality::normalize_quality(name);
        let expanded = quality::expand_abbreviation(&normalized);
        quality::intervals_for(expanded).ok().map(|i| i.to_vec())
    }

    /// Build a chord from a root and a registered or built-in quality name
    pub fn build(&self, root: &str, name: &str) -> Result<Chord, TheoryError> {
        if let Some(def) = self.custom_chords.get(name) {
            let notes = def
                .intervals
                .iter()
                .map(|&i| pitch::transpose(root, i as pitch::Semitones))
                .collect::<Result<Vec<_>, _>>()?;
            return Ok(Chord {
                root: root.to_string(),
                quality: name.to_string(),
                notes,
            });
        }

        Chord::from_parts(root, name)
    }

    /// All quality names this registry can resolve, sorted and deduped
    pub fn available_qualities(&self) -> Vec<String> {
        let mut names: Vec<String> = self.custom_chords.keys().cloned().collect();
        names.extend(quality::all_quality_entries().map(|(id, _)| id.to_string()));
        names.sort();
        names.dedup();
        names
    }
}
