//! Error types for chainsim-io.

use std::path::PathBuf;

use chainsim_markov::MarkovError;

/// Error type for all fallible operations in the chainsim-io crate.
///
/// Covers access failures on the underlying files and streams, and content
/// problems found while parsing matrices or sequences. Line and column
/// numbers are 1-based.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Returned when a file cannot be opened or a stream cannot be read.
    #[error("read error: {reason}")]
    Read {
        /// Description of the underlying I/O failure.
        reason: String,
    },

    /// Returned when output cannot be written.
    #[error("write error: {reason}")]
    Write {
        /// Description of the underlying I/O failure.
        reason: String,
    },

    /// Returned when a token is not a valid number.
    #[error("line {line}, column {column}: cannot parse '{token}'")]
    MalformedToken {
        /// Line containing the token.
        line: usize,
        /// Position of the token within the line.
        column: usize,
        /// The offending token.
        token: String,
    },

    /// Returned when a matrix row does not have one value per row.
    #[error("line {line}: expected {expected} values, got {got}")]
    RowLength {
        /// Line containing the row.
        line: usize,
        /// Expected number of values (the number of rows).
        expected: usize,
        /// Actual number of values.
        got: usize,
    },

    /// Returned when a probability is negative or non-finite.
    #[error("line {line}, column {column}: invalid probability {value}")]
    InvalidProbability {
        /// Line containing the value.
        line: usize,
        /// Position of the value within the line.
        column: usize,
        /// The offending value.
        value: f64,
    },

    /// Returned when the input holds no data lines.
    #[error("no data lines in input")]
    Empty,

    /// Wraps an error originating from the chainsim-markov crate.
    #[error("markov error: {reason}")]
    Markov {
        /// Description of the underlying failure.
        reason: String,
    },
}

impl From<MarkovError> for IoError {
    fn from(e: MarkovError) -> Self {
        IoError::Markov {
            reason: e.to_string(),
        }
    }
}
