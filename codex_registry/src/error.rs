use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read registry source {path}: {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("heading has no name: {heading:?}")]
    MalformedHeading { heading: String },

    #[error("invalid Solfeggio value {value:?}: {source}")]
    Frequency {
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    #[error("failed to compile extraction pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("failed to write registry {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
