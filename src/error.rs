//! Error types for the gesture classification core.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Degenerate geometry: bone {bone} (joint {parent} -> joint {child}) has zero length")]
    DegenerateGeometry {
        bone: usize,
        parent: usize,
        child: usize,
    },

    /// `line` is 1-based and absent when the source itself could not be read
    #[error("Dataset load error{}: {reason}", at_line(.line))]
    DatasetLoad { line: Option<usize>, reason: String },

    #[error("Model has no training samples")]
    EmptyModel,

    #[error("Invalid neighbor count: k = {k} with {samples} training samples (k must be odd, positive and at most the sample count)")]
    InvalidNeighborCount { k: usize, samples: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Random source unavailable: {0}")]
    Random(String),
}

pub type Result<T> = std::result::Result<T, Error>;

fn at_line(line: &Option<usize>) -> String {
    line.map(|n| format!(" at line {}", n)).unwrap_or_default()
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Config(e.to_string())
    }
}

impl From<getrandom::Error> for Error {
    fn from(e: getrandom::Error) -> Self {
        Error::Random(e.to_string())
    }
}
