//! Per-state cumulative distributions for inverse-CDF sampling.

use crate::state::State;
use crate::transition::TransitionMatrix;
use crate::uniform::UniformSource;

/// Row-wise prefix sums of a [`TransitionMatrix`].
///
/// Entry `(i, j)` is the probability of moving from state `i` to any state
/// `0..=j`. Rows are non-decreasing because the source values are
/// non-negative. The last entry of a row approximates 1.0 and may fall short
/// of it through rounding or a malformed source row.
#[derive(Debug, Clone, PartialEq)]
pub struct CumulativeMatrix {
    n_states: usize,
    cumulative: Vec<f64>,
}

impl CumulativeMatrix {
    /// Builds the cumulative table from a transition matrix.
    pub fn from_transitions(matrix: &TransitionMatrix) -> Self {
        let n_states = matrix.n_states();
        let mut cumulative = Vec::with_capacity(n_states * n_states);
        for row in matrix.rows() {
            let mut acc = 0.0;
            for &p in row {
                acc += p;
                cumulative.push(acc);
            }
        }
        Self {
            n_states,
            cumulative,
        }
    }

    /// Returns the number of states.
    pub fn n_states(&self) -> usize {
        self.n_states
    }

    /// Returns the cumulative row of a given state.
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
        &self.cumulative[start..start + self.n_states]
    }

    /// Returns the final cumulative value of a row, i.e. its total probability.
    ///
    /// # Panics
    ///
    /// Panics if `from >= n_states`.
    pub fn last(&self, from: State) -> f64 {
        self.row(from)[self.n_states - 1]
    }

    /// Maps a uniform draw `u` to the next state.
    ///
    /// Returns the first index `i` with `u < row[i]`. If no index qualifies,
    /// which happens when the row total is at or below `u`, the last state
    /// is returned.
    pub fn next_state(&self, from: State, u: f64) -> State {
        let row = self.row(from);
        row.iter()
            .position(|&c| u < c)
            .unwrap_or(self.n_states - 1)
    }

    /// Draws one value from `source` and returns the next state.
    pub fn sample(&self, from: State, source: &mut impl UniformSource) -> State {
        let u = source.next_uniform();
        self.next_state(from, u)
    }
}
