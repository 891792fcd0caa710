#![warn(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Registry compiler for the Codex Abyssiae master document.
//!
//! A single-pass batch transform: split the markdown source into `##`
//! entry blocks, extract the labeled fields from each block, derive the
//! classification attributes (suit, angel/demon, crystal chemistry,
//! vibrational frequency), and serialize the ordered records as one JSON
//! array. No persistence and no state between invocations; re-running on
//! unchanged input overwrites the artifact with identical bytes.

mod blocks;
mod card;
mod compiler;
mod derive;
mod error;
mod fields;
mod output;

pub use blocks::split_blocks;
pub use card::{CardRecord, Suit};
pub use compiler::RegistryCompiler;
pub use derive::{fallback_frequency, split_angel_demon};
pub use error::{Error, Result};
pub use fields::{FieldExtractor, LABELS};
pub use output::{read_source, write_registry};
