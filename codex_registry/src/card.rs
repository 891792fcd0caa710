//! Card record types for the compiled registry.
//!
//! A `CardRecord` is the structured object derived from one `##` block of
//! the master document. Field declaration order matches the key order of
//! the emitted JSON objects, so reordering fields here changes the artifact.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The suit bucket assigned to a card from its name.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
#[derive(Default)]
pub enum Suit {
    Wands,
    Cups,
    Pentacles,
    Swords,
    /// Major arcana, the bucket for any name no substring rule claims.
    #[default]
    Majors,
}

impl Suit {
    /// Returns the string representation of this suit.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::Wands => "wands",
            Self::Cups => "cups",
            Self::Pentacles => "pentacles",
            Self::Swords => "swords",
            Self::Majors => "majors",
        }
    }

    /// Classify a card name into a suit.
    ///
    /// Substring tests run case-insensitively in a fixed priority order;
    /// the first rule that matches wins, so a name carrying several
    /// trigger words resolves to the earliest-declared suit.
    #[must_use]
    pub fn classify(name: &str) -> Self {
        let n = name.to_lowercase();
        if n.contains("wands") {
            Self::Wands
        } else if n.contains("cups") {
            Self::Cups
        } else if n.contains("pentacles") || n.contains("coin") {
            Self::Pentacles
        } else if n.contains("swords") || n.contains("blade") {
            Self::Swords
        } else {
            Self::Majors
        }
    }
}

impl FromStr for Suit {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "wands" => Ok(Self::Wands),
            "cups" => Ok(Self::Cups),
            "pentacles" => Ok(Self::Pentacles),
            "swords" => Ok(Self::Swords),
            "majors" => Ok(Self::Majors),
            _ => Err("unknown suit"),
        }
    }
}

/// One compiled card, in artifact key order.
///
/// Every string field defaults to empty rather than being omitted; `suit`
/// and `freq` are always assigned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CardRecord {
    /// Slug derived from `name`: non-word runs collapsed to `_`, lowercased.
    pub id: String,

    /// Heading text after `## `, trimmed.
    pub name: String,

    /// Suit bucket classified from `name`.
    pub suit: Suit,

    pub letter: String,
    pub astrology: String,

    /// Raw `Ray` field; also drives the frequency fallback table.
    pub ray: String,

    /// Left half of the `Angel/Demon` field.
    pub angel: String,

    /// Right half of the `Angel/Demon` field.
    pub demon: String,

    pub deities: String,

    /// `Crystal` field text before the first `(`.
    pub crystal: String,

    /// Content of the first parenthesis pair in the `Crystal` field.
    pub chemistry: String,

    pub artifact: String,
    pub pigment: String,

    /// The `Secret Tara` field.
    pub tara: String,

    /// The `Thought-form` field.
    pub thought: String,

    /// The `HGA Fragment` field.
    pub hga_fragment: String,

    /// The `Pattern Glyph` field.
    pub pattern_glyph: String,

    pub psyche: String,

    /// Raw `Technical` field; an embedded `Solfeggio = <n>` overrides `freq`.
    pub technical: String,

    /// The `App Pulls` field.
    #[serde(rename = "appPulls")]
    pub app_pulls: String,

    /// Vibrational frequency, explicit Solfeggio value or ray fallback.
    pub freq: f64,
}
