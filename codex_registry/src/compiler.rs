//! The registry compiler core.
//!
//! One in-memory pass: split the document into entry blocks, extract the
//! labeled fields from each, derive the classification attributes, and
//! collect the records in document order. All patterns are compiled once
//! at construction.

use regex::Regex;
use std::collections::HashSet;
use tracing::{debug, warn};

use crate::blocks::{self, split_blocks};
use crate::card::{CardRecord, Suit};
use crate::derive::{resolve_frequency, split_angel_demon, split_crystal};
use crate::error::Result;
use crate::fields::FieldExtractor;

/// Compiles a master markdown document into card records.
pub struct RegistryCompiler {
    fields: FieldExtractor,
    heading: Regex,
    solfeggio: Regex,
    chemistry: Regex,
    non_word: Regex,
}

impl RegistryCompiler {
    /// Create a compiler with all patterns compiled.
    ///
    /// # Errors
    /// Returns an error if pattern compilation fails.
    pub fn new() -> Result<Self> {
        Ok(Self {
            fields: FieldExtractor::new()?,
            heading: blocks::heading_pattern()?,
            solfeggio: crate::derive::solfeggio_pattern()?,
            chemistry: crate::derive::chemistry_pattern()?,
            non_word: Regex::new(r"\W+")?,
        })
    }

    /// Compile the full document text into records, in document order.
    ///
    /// # Errors
    /// Returns an error on a malformed heading or an unparsable explicit
    /// Solfeggio value; either aborts the whole run with no partial result.
    pub fn compile(&self, text: &str) -> Result<Vec<CardRecord>> {
        let entry_blocks = split_blocks(text);
        debug!("found {} entry blocks", entry_blocks.len());

        let mut cards = Vec::with_capacity(entry_blocks.len());
        for block in entry_blocks {
            cards.push(self.compile_block(block)?);
        }

        Self::warn_duplicate_ids(&cards);
        Ok(cards)
    }

    fn compile_block(&self, block: &str) -> Result<CardRecord> {
        let name = blocks::heading_name(block, &self.heading)?;
        let f = &self.fields;

        let ray = f.value(block, "Ray");
        let (angel, demon) = split_angel_demon(&f.value(block, "Angel/Demon"));
        let (crystal, chemistry) = split_crystal(&f.value(block, "Crystal"), &self.chemistry);
        let technical = f.value(block, "Technical");
        let freq = resolve_frequency(&technical, &ray, &self.solfeggio)?;

        Ok(CardRecord {
            id: self.slug(&name),
            suit: Suit::classify(&name),
            name,
            letter: f.value(block, "Letter"),
            astrology: f.value(block, "Astrology"),
            ray,
            angel,
            demon,
            deities: f.value(block, "Deities"),
            crystal,
            chemistry,
            artifact: f.value(block, "Artifact"),
            pigment: f.value(block, "Pigment"),
            tara: f.value(block, "Secret Tara"),
            thought: f.value(block, "Thought-form"),
            hga_fragment: f.value(block, "HGA Fragment"),
            pattern_glyph: f.value(block, "Pattern Glyph"),
            psyche: f.value(block, "Psyche"),
            technical,
            app_pulls: f.value(block, "App Pulls"),
            freq,
        })
    }

    /// Slug form of a card name: non-word runs collapsed to `_`, lowercased.
    fn slug(&self, name: &str) -> String {
        self.non_word.replace_all(name, "_").to_lowercase()
    }

    /// Duplicate ids are kept in the output; surface them once so curators
    /// can fix the source document.
    fn warn_duplicate_ids(cards: &[CardRecord]) {
        let mut seen = HashSet::new();
        let mut dupes = Vec::new();
        for card in cards {
            if !seen.insert(card.id.as_str()) && !dupes.contains(&card.id.as_str()) {
                dupes.push(card.id.as_str());
            }
        }
        if !dupes.is_empty() {
            warn!("duplicate card ids in registry: {}", dupes.join(", "));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn compiler() -> RegistryCompiler {
        #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
        let compiler = RegistryCompiler::new().expect("compiler patterns should compile");
        compiler
    }

    const DOC: &str = "\
# Codex Abyssiae

preamble is discarded

## Two of Wands
- Letter: Beth
- Ray: Violet
- Angel/Demon: Raziel \u{2194} Agares
- Crystal: Amethyst (SiO2)
- Technical: Solfeggio = 741; pulse map

## The Tower
- Ray: Scarlet
- Crystal: Obsidian
";

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    #[expect(
        clippy::float_cmp,
        reason = "Testing exact equality of derived frequencies"
    )]
    fn test_compile_document() {
        let cards = compiler().compile(DOC).expect("document should compile");
        assert_eq!(cards.len(), 2);

        let first = &cards[0];
        assert_eq!(first.id, "two_of_wands");
        assert_eq!(first.name, "Two of Wands");
        assert_eq!(first.suit, Suit::Wands);
        assert_eq!(first.letter, "Beth");
        assert_eq!(first.angel, "Raziel");
        assert_eq!(first.demon, "Agares");
        assert_eq!(first.crystal, "Amethyst");
        assert_eq!(first.chemistry, "SiO2");
        // Explicit Solfeggio wins over the violet fallback.
        assert_eq!(first.freq, 741.0);

        let second = &cards[1];
        assert_eq!(second.id, "the_tower");
        assert_eq!(second.suit, Suit::Majors);
        assert_eq!(second.crystal, "Obsidian");
        assert_eq!(second.chemistry, "");
        assert_eq!(second.freq, 285.0);
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_compile_preserves_document_order() {
        let doc = "## Zeta\n## Alpha\n## Mu\n";
        let cards = compiler().compile(doc).expect("document should compile");
        let names: Vec<_> = cards.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Zeta", "Alpha", "Mu"]);
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_compile_empty_document() {
        let cards = compiler()
            .compile("no headings at all\n")
            .expect("empty document should compile");
        assert!(cards.is_empty());
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    #[expect(
        clippy::float_cmp,
        reason = "Testing exact equality of derived frequencies"
    )]
    fn test_compile_heading_only_block_defaults() {
        let cards = compiler()
            .compile("## Bare Card\n")
            .expect("heading-only block should compile");
        assert_eq!(cards.len(), 1);
        let card = &cards[0];
        assert_eq!(card.ray, "");
        assert_eq!(card.letter, "");
        assert_eq!(card.angel, "");
        assert_eq!(card.demon, "");
        // No ray substring can match, so the final fallback applies.
        assert_eq!(card.freq, 432.0);
    }

    #[test]
    fn test_compile_malformed_heading_is_fatal() {
        let result = compiler().compile("## Good\n## \n- Ray: Violet\n");
        assert!(matches!(result, Err(Error::MalformedHeading { .. })));
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_compile_keeps_duplicate_ids() {
        let cards = compiler()
            .compile("## The Fool\n## The Fool\n")
            .expect("duplicates are not an error");
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].id, cards[1].id);
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_slug_collapses_non_word_runs() {
        let c = compiler();
        let cards = c
            .compile("## Ten of Swords -- Ruin!\n")
            .expect("document should compile");
        assert_eq!(cards[0].id, "ten_of_swords_ruin_");
    }
}
