//! Derivation rules applied to extracted field values.
//!
//! These rules turn raw field text into the derived record attributes:
//! vibrational frequency, the angel/demon pair, and the crystal/chemistry
//! pair. All are pure functions over their inputs.

use regex::Regex;

use crate::error::{Error, Result};

/// Separator glyph between the angel and demon halves of the field.
const ANGEL_DEMON_SEPARATOR: char = '\u{2194}'; // ↔

/// Pattern for an explicit `Solfeggio = <number>` override inside the
/// Technical field text. Compiled once by the caller and reused.
pub(crate) fn solfeggio_pattern() -> Result<Regex> {
    Ok(Regex::new(r"Solfeggio\s*=\s*([\d\.]+)")?)
}

/// Pattern for the first non-empty parenthesis pair in the Crystal field.
pub(crate) fn chemistry_pattern() -> Result<Regex> {
    Ok(Regex::new(r"\(([^)]+)\)")?)
}

/// Resolve a record's frequency.
///
/// An explicit Solfeggio value in the Technical text always wins and is
/// parsed as a float; otherwise the ray fallback table applies.
///
/// # Errors
/// Returns an error if an explicit Solfeggio value fails to parse.
pub(crate) fn resolve_frequency(technical: &str, ray: &str, solfeggio: &Regex) -> Result<f64> {
    match solfeggio.captures(technical).and_then(|caps| caps.get(1)) {
        Some(m) => m
            .as_str()
            .parse::<f64>()
            .map_err(|source| Error::Frequency {
                value: m.as_str().to_string(),
                source,
            }),
        None => Ok(fallback_frequency(ray)),
    }
}

/// Fallback frequency table keyed by case-insensitive substring match
/// against the Ray field, first match wins.
#[must_use]
pub fn fallback_frequency(ray: &str) -> f64 {
    let r = ray.to_lowercase();
    if r.contains("violet") {
        963.0
    } else if r.contains("indigo") || r.contains("silver") {
        852.0
    } else if ["gold", "emerald", "green", "aquamarine", "turquoise"]
        .iter()
        .any(|c| r.contains(c))
    {
        528.0
    } else if r.contains("crimson") {
        417.0
    } else if r.contains("scarlet") || r.contains("red") {
        285.0
    } else {
        432.0
    }
}

/// Split the raw `Angel/Demon` value into its two trimmed halves.
///
/// Without the separator glyph the whole value is the angel. Parts beyond
/// the second are dropped; the owning team only ever records two entities.
#[must_use]
pub fn split_angel_demon(raw: &str) -> (String, String) {
    if raw.contains(ANGEL_DEMON_SEPARATOR) {
        let mut parts = raw.split(ANGEL_DEMON_SEPARATOR);
        let angel = parts.next().unwrap_or_default().trim().to_string();
        let demon = parts.next().unwrap_or_default().trim().to_string();
        (angel, demon)
    } else {
        (raw.trim().to_string(), String::new())
    }
}

/// Split the raw `Crystal` value into mineral name and chemical formula.
///
/// The crystal is the text before the first `(`; the chemistry is the
/// content of the first parenthesis pair, empty when no pair exists (an
/// unmatched `(` still truncates the crystal name).
#[must_use]
pub fn split_crystal(raw: &str, chemistry: &Regex) -> (String, String) {
    let crystal = raw
        .split('(')
        .next()
        .unwrap_or_default()
        .trim()
        .to_string();
    let chem = chemistry
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default();
    (crystal, chem)
}
