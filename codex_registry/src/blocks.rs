//! Block splitting for the master document.
//!
//! The document is partitioned at line starts that open a level-2 heading.
//! Each block runs from its heading line to the next heading line or end of
//! text. Anything before the first heading is preamble and is discarded.

use regex::Regex;

use crate::error::{Error, Result};

/// A line opens a heading boundary when it begins `##` followed by any
/// whitespace character. Mid-line `##` never counts.
fn is_heading_boundary(rest: &str) -> bool {
    rest.strip_prefix("##")
        .and_then(|r| r.chars().next())
        .is_some_and(char::is_whitespace)
}

/// Split a document into entry blocks, in document order.
///
/// Pure function of the input text. Zero heading lines yield zero blocks.
/// Partitions whose heading marker is not the exact `## ` prefix (for
/// example a tab after the hashes) are dropped along with the preamble.
#[must_use]
pub fn split_blocks(text: &str) -> Vec<&str> {
    let mut starts = Vec::new();
    let mut pos = 0;
    while pos <= text.len() {
        if is_heading_boundary(&text[pos..]) {
            starts.push(pos);
        }
        match text[pos..].find('\n') {
            Some(i) => pos += i + 1,
            None => break,
        }
    }

    let mut blocks = Vec::with_capacity(starts.len());
    for (i, &start) in starts.iter().enumerate() {
        let end = starts.get(i + 1).copied().unwrap_or(text.len());
        let block = &text[start..end];
        if block.starts_with("## ") {
            blocks.push(block);
        }
    }
    blocks
}

/// Capture the card name from a block's heading line.
///
/// Only the first line of the block is consulted. A heading marker with no
/// trailing name is a hard failure for the whole run; partial registries
/// are worse than a stop.
pub(crate) fn heading_name(block: &str, heading: &Regex) -> Result<String> {
    let first = block.lines().next().unwrap_or("");
    heading
        .captures(first)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .ok_or_else(|| Error::MalformedHeading {
            heading: first.to_string(),
        })
}

/// Pattern for [`heading_name`]. Compiled once by the caller and reused.
pub(crate) fn heading_pattern() -> Result<Regex> {
    Ok(Regex::new(r"^##\s+(.+?)\s*$")?)
}
