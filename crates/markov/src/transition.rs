//! Dense row-stochastic transition matrices.

use crate::error::MarkovError;
use crate::state::State;

/// Largest accepted deviation of a row sum from 1.0 before the row is
/// reported as drifting.
pub const ROW_SUM_TOLERANCE: f64 = 1e-6;

/// An `n x n` transition matrix stored row-major.
///
/// Row `i` contains the probabilities of moving from state `i` to each state
/// `0..n`. Values are finite and non-negative. Row sums are expected to be
/// 1.0 but are not enforced: sampling tolerates drift, and
/// [`drifting_rows`](Self::drifting_rows) reports it.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionMatrix {
    n_states: usize,
    probs: Vec<f64>,
}

impl TransitionMatrix {
    /// Builds a matrix from its rows.
    ///
    /// # Errors
    ///
    /// - [`MarkovError::EmptyMatrix`] if `rows` is empty.
    /// - [`MarkovError::NotSquare`] if any row length differs from the row count.
    /// - [`MarkovError::InvalidProbability`] if any value is negative or non-finite.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, MarkovError> {
        let n_states = rows.len();
        if n_states == 0 {
            return Err(MarkovError::EmptyMatrix);
        }

        let mut probs = Vec::with_capacity(n_states * n_states);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n_states {
                return Err(MarkovError::NotSquare {
                    row: i,
                    expected: n_states,
                    got: row.len(),
                });
            }
            for (j, &p) in row.iter().enumerate() {
                if !p.is_finite() || p < 0.0 {
                    return Err(MarkovError::InvalidProbability {
                        row: i,
                        col: j,
                        value: p,
                    });
                }
            }
            probs.extend(row);
        }

        Ok(Self { n_states, probs })
    }

    /// Returns the number of states.
    pub fn n_states(&self) -> usize {
        self.n_states
    }

    /// Returns the transition probabilities from a given state.
    ///
    /// # Panics
    ///
    /// Panics if `from >= n_states`.
    pub fn row(&self, from: State) -> &[f64] {
        assert!(
            from < self.n_states,
            "state must be < {}, got {from}",
            self.n_states
        );
        let start = from * self.n_states;
        &self.probs[start..start + self.n_states]
    }

    /// Returns the probability of transitioning from one state to another.
    ///
    /// # Panics
    ///
    /// Panics if either state is out of range.
    pub fn prob(&self, from: State, to: State) -> f64 {
        self.row(from)[to]
    }

    /// Iterates over the rows in state order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[f64]> + '_ {
        self.probs.chunks_exact(self.n_states)
    }

    /// Returns the sum of every row.
    pub fn row_sums(&self) -> Vec<f64> {
        self.rows().map(|row| row.iter().sum()).collect()
    }

    /// Returns `(state, row_sum)` for every row whose sum differs from 1.0
    /// by more than [`ROW_SUM_TOLERANCE`].
    pub fn drifting_rows(&self) -> Vec<(State, f64)> {
        self.row_sums()
            .into_iter()
            .enumerate()
            .filter(|&(_, sum)| (sum - 1.0).abs() > ROW_SUM_TOLERANCE)
            .collect()
    }
}
