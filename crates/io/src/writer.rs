//! Text writers for state sequences and transition matrices.

use std::io::Write;

use chainsim_markov::{State, TransitionMatrix};

use crate::error::IoError;

fn write_err(e: std::io::Error) -> IoError {
    IoError::Write {
        reason: e.to_string(),
    }
}

/// Writes one sequence as a single comma-separated line with no trailing
/// delimiter.
///
/// # Errors
///
/// Returns [`IoError::Write`] if the writer fails.
pub fn write_sequence<W: Write>(writer: &mut W, sequence: &[State]) -> Result<(), IoError> {
    let mut states = sequence.iter();
    if let Some(first) = states.next() {
        write!(writer, "{first}").map_err(write_err)?;
        for s in states {
            write!(writer, ",{s}").map_err(write_err)?;
        }
    }
    writeln!(writer).map_err(write_err)
}

/// Writes every sequence on its own line.
///
/// # Errors
///
/// Returns [`IoError::Write`] if the writer fails.
pub fn write_sequences<W: Write, S: AsRef<[State]>>(
    writer: &mut W,
    sequences: &[S],
) -> Result<(), IoError> {
    for seq in sequences {
        write_sequence(writer, seq.as_ref())?;
    }
    Ok(())
}

/// Writes a transition matrix in the format read by
/// [`read_matrix`](crate::read_matrix).
///
/// Values use the shortest representation that parses back to the same
/// `f64`.
///
/// # Errors
///
/// Returns [`IoError::Write`] if the writer fails.
pub fn write_matrix<W: Write>(writer: &mut W, matrix: &TransitionMatrix) -> Result<(), IoError> {
    for row in matrix.rows() {
        let line = row
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(writer, "{line}").map_err(write_err)?;
    }
    Ok(())
}
