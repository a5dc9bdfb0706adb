//! Text readers for transition matrices and state sequences.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use chainsim_markov::{State, TransitionMatrix};
use tracing::debug;

use crate::error::IoError;

/// Open `path` for buffered reading, returning [`IoError::FileNotFound`] if
/// the path does not exist on disk.
fn open_file(path: &Path) -> Result<BufReader<File>, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path).map_err(|e| IoError::Read {
        reason: format!("{}: {e}", path.display()),
    })?;
    Ok(BufReader::new(file))
}

/// Yields `(line_number, line)` for every non-blank line, 1-based.
fn data_lines<R: BufRead>(reader: R) -> impl Iterator<Item = Result<(usize, String), IoError>> {
    reader
        .lines()
        .enumerate()
        .filter_map(|(i, line)| match line {
            Ok(l) if l.trim().is_empty() => None,
            Ok(l) => Some(Ok((i + 1, l))),
            Err(e) => Some(Err(IoError::Read {
                reason: e.to_string(),
            })),
        })
}

// ---------------------------------------------------------------------------
// Transition matrix
// ---------------------------------------------------------------------------

/// Read a transition matrix from a text file.
///
/// See [`parse_matrix`] for the format.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if `path` does not exist,
/// [`IoError::Read`] if it cannot be read, and the content errors of
/// [`parse_matrix`].
pub fn read_matrix(path: &Path) -> Result<TransitionMatrix, IoError> {
    let reader = open_file(path)?;
    let matrix = parse_matrix(reader)?;
    debug!(
        path = %path.display(),
        n_states = matrix.n_states(),
        "transition matrix loaded"
    );
    Ok(matrix)
}

/// Parse a transition matrix from whitespace-separated text.
///
/// Each non-blank line is one row. The number of rows is the number of
/// states, and every row must hold exactly that many values. Row sums are
/// not checked.
///
/// # Errors
///
/// - [`IoError::MalformedToken`] if a token is not a floating-point literal.
/// - [`IoError::InvalidProbability`] if a value is negative or non-finite.
/// - [`IoError::RowLength`] if a row has the wrong number of values.
/// - [`IoError::Empty`] if there are no rows.
pub fn parse_matrix<R: BufRead>(reader: R) -> Result<TransitionMatrix, IoError> {
    let mut lines = Vec::new();
    let mut rows = Vec::new();

    for entry in data_lines(reader) {
        let (line, text) = entry?;
        let mut row = Vec::new();
        for (c, token) in text.split_whitespace().enumerate() {
            let value: f64 = token.parse().map_err(|_| IoError::MalformedToken {
                line,
                column: c + 1,
                token: token.to_string(),
            })?;
            if !value.is_finite() || value < 0.0 {
                return Err(IoError::InvalidProbability {
                    line,
                    column: c + 1,
                    value,
                });
            }
            row.push(value);
        }
        lines.push(line);
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(IoError::Empty);
    }

    let n_states = rows.len();
    for (row, &line) in rows.iter().zip(&lines) {
        if row.len() != n_states {
            return Err(IoError::RowLength {
                line,
                expected: n_states,
                got: row.len(),
            });
        }
    }

    Ok(TransitionMatrix::from_rows(rows)?)
}

// ---------------------------------------------------------------------------
// State sequences
// ---------------------------------------------------------------------------

/// Read state sequences from a text file.
///
/// See [`parse_sequences`] for the format.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if `path` does not exist,
/// [`IoError::Read`] if it cannot be read, and the content errors of
/// [`parse_sequences`].
pub fn read_sequences(path: &Path) -> Result<Vec<Vec<State>>, IoError> {
    let reader = open_file(path)?;
    let sequences = parse_sequences(reader)?;
    debug!(
        path = %path.display(),
        n_sequences = sequences.len(),
        "sequences loaded"
    );
    Ok(sequences)
}

/// Parse comma-separated state sequences, one per non-blank line.
///
/// Whitespace around tokens is ignored.
///
/// # Errors
///
/// Returns [`IoError::MalformedToken`] if a token is not a non-negative
/// integer.
pub fn parse_sequences<R: BufRead>(reader: R) -> Result<Vec<Vec<State>>, IoError> {
    let mut sequences = Vec::new();
    for entry in data_lines(reader) {
        let (line, text) = entry?;
        let seq = text
            .split(',')
            .enumerate()
            .map(|(c, token)| {
                let token = token.trim();
                token.parse::<State>().map_err(|_| IoError::MalformedToken {
                    line,
                    column: c + 1,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        sequences.push(seq);
    }
    Ok(sequences)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn matrix(text: &str) -> Result<TransitionMatrix, IoError> {
        parse_matrix(Cursor::new(text))
    }

    #[test]
    fn parses_two_state_matrix() {
        let tm = matrix("0.5 0.5\n0.2 0.8\n").unwrap();
        assert_eq!(tm.n_states(), 2);
        assert_eq!(tm.row(0), &[0.5, 0.5]);
        assert_eq!(tm.row(1), &[0.2, 0.8]);
    }

    #[test]
    fn mixed_whitespace_and_blank_lines() {
        let tm = matrix("\n1\t0   0\n0 1 0\n\n  0 0 1  \n\n").unwrap();
        assert_eq!(tm.n_states(), 3);
        assert_eq!(tm.row(2), &[0.0, 0.0, 1.0]);
    }

    #[test]
    fn missing_trailing_newline() {
        let tm = matrix("1").unwrap();
        assert_eq!(tm.n_states(), 1);
    }

    #[test]
    fn scientific_notation() {
        let tm = matrix("5e-1 5E-1\n2.5e-1 7.5e-1").unwrap();
        assert_eq!(tm.row(1), &[0.25, 0.75]);
    }

    #[test]
    fn malformed_token_reports_position() {
        let err = matrix("0.5 0.5\nabc 0.8\n").unwrap_err();
        match err {
            IoError::MalformedToken {
                line,
                column,
                token,
            } => {
                assert_eq!(line, 2);
                assert_eq!(column, 1);
                assert_eq!(token, "abc");
            }
            other => panic!("expected MalformedToken, got {other:?}"),
        }
    }

    #[test]
    fn line_numbers_count_blank_lines() {
        let err = matrix("0.5 0.5\n\n0.2 x\n").unwrap_err();
        assert!(
            matches!(err, IoError::MalformedToken { line: 3, column: 2, .. }),
            "got {err:?}"
        );
    }

    #[test]
    fn short_row_rejected() {
        let err = matrix("0.5 0.5\n1.0\n").unwrap_err();
        assert!(matches!(
            err,
            IoError::RowLength {
                line: 2,
                expected: 2,
                got: 1
            }
        ));
    }

    #[test]
    fn non_square_rejected() {
        // Consistent rows, but three columns for two rows.
        let err = matrix("0.2 0.3 0.5\n0.2 0.3 0.5\n").unwrap_err();
        assert!(matches!(
            err,
            IoError::RowLength {
                line: 1,
                expected: 2,
                got: 3
            }
        ));
    }

    #[test]
    fn negative_rejected() {
        let err = matrix("1.5 -0.5\n0.2 0.8\n").unwrap_err();
        assert!(matches!(
            err,
            IoError::InvalidProbability {
                line: 1,
                column: 2,
                ..
            }
        ));
    }

    #[test]
    fn nan_rejected() {
        let err = matrix("0.5 0.5\nNaN 1\n").unwrap_err();
        assert!(matches!(
            err,
            IoError::InvalidProbability {
                line: 2,
                column: 1,
                ..
            }
        ));
    }

    #[test]
    fn empty_input_rejected() {
        assert!(matches!(matrix(""), Err(IoError::Empty)));
        assert!(matches!(matrix("\n  \n"), Err(IoError::Empty)));
    }

    #[test]
    fn drift_is_tolerated() {
        let tm = matrix("0.5 0.4\n0.2 0.8\n").unwrap();
        assert_eq!(tm.drifting_rows().len(), 1);
    }

    #[test]
    fn parses_sequences() {
        let seqs = parse_sequences(Cursor::new("0,1,1,0\n2, 0 ,1\n\n3\n")).unwrap();
        assert_eq!(seqs, vec![vec![0, 1, 1, 0], vec![2, 0, 1], vec![3]]);
    }

    #[test]
    fn sequence_bad_token() {
        let err = parse_sequences(Cursor::new("0,1\n0,-1\n")).unwrap_err();
        assert!(matches!(
            err,
            IoError::MalformedToken {
                line: 2,
                column: 2,
                ..
            }
        ));
    }

    #[test]
    fn sequence_trailing_comma_rejected() {
        let err = parse_sequences(Cursor::new("0,1,\n")).unwrap_err();
        assert!(matches!(err, IoError::MalformedToken { column: 3, .. }));
    }

    #[test]
    fn no_sequences_is_empty_vec() {
        assert!(parse_sequences(Cursor::new("")).unwrap().is_empty());
    }
}
