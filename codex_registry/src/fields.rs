//! Labeled field extraction from entry blocks.
//!
//! Fields live on lines of the form `- <Label>: <value>`. Labels are matched
//! as literal text (escaped before compilation), so `Ray` never matches a
//! `Ray2` line and labels like `Angel/Demon` carry no pattern meaning.

use regex::Regex;
use std::collections::HashMap;

use crate::error::Result;

/// The fixed set of labels the compiler pulls from each block.
pub const LABELS: &[&str] = &[
    "Letter",
    "Astrology",
    "Ray",
    "Angel/Demon",
    "Deities",
    "Crystal",
    "Artifact",
    "Pigment",
    "Secret Tara",
    "Thought-form",
    "HGA Fragment",
    "Pattern Glyph",
    "Psyche",
    "Technical",
    "App Pulls",
];

/// Extractor holding one compiled pattern per known label.
#[derive(Debug)]
pub struct FieldExtractor {
    patterns: HashMap<&'static str, Regex>,
}

impl FieldExtractor {
    /// Compile patterns for every label in [`LABELS`].
    ///
    /// # Errors
    /// Returns an error if pattern compilation fails.
    pub fn new() -> Result<Self> {
        let mut patterns = HashMap::with_capacity(LABELS.len());
        for label in LABELS {
            patterns.insert(*label, Self::label_pattern(label)?);
        }
        Ok(Self { patterns })
    }

    fn label_pattern(label: &str) -> Result<Regex> {
        Ok(Regex::new(&format!(
            r"-\s*{}:\s*([^\n]+)",
            regex::escape(label)
        ))?)
    }

    /// Trimmed value of the first `- <label>: <value>` line in the block.
    ///
    /// Absent labels resolve to the empty string; later duplicate-labeled
    /// lines are ignored.
    #[must_use]
    pub fn value(&self, block: &str, label: &str) -> String {
        debug_assert!(self.patterns.contains_key(label), "unknown label {label}");
        self.patterns
            .get(label)
            .and_then(|re| re.captures(block))
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default()
    }
}
