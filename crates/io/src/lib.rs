//! # chainsim-io
//!
//! Read transition matrices and state sequences from plain text, and write
//! them back. Bridges the text formats into the `chainsim-markov` types.
//!
//! Matrix format: one row per line, whitespace-separated probabilities,
//! as many columns as there are lines. Sequence format: one sequence per
//! line, comma-separated state indices.

mod error;
mod reader;
mod writer;

pub use error::IoError;
pub use reader::{parse_matrix, parse_sequences, read_matrix, read_sequences};
pub use writer::{write_matrix, write_sequence, write_sequences};
