//! Error types for the chainsim-markov crate.

/// Error type for all fallible operations in the chainsim-markov crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum MarkovError {
    /// Returned when no states were observed.
    #[error("input data is empty")]
    EmptyData,

    /// Returned when a transition matrix has no rows.
    #[error("transition matrix has no states")]
    EmptyMatrix,

    /// Returned when a row length differs from the number of rows.
    #[error("transition matrix is not square: row {row} has {got} values, expected {expected}")]
    NotSquare {
        /// Zero-based row index.
        row: usize,
        /// Expected number of values (the number of rows).
        expected: usize,
        /// Actual number of values in the row.
        got: usize,
    },

    /// Returned when a probability is negative or non-finite.
    #[error("invalid probability at row {row}, column {col}: {value}")]
    InvalidProbability {
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        col: usize,
        /// The offending value.
        value: f64,
    },

    /// Returned when an observed state index does not fit the chain.
    #[error("state {state} out of range for {n_states} states")]
    StateOutOfRange {
        /// The offending state index.
        state: usize,
        /// Number of states in the chain.
        n_states: usize,
    },

    /// Returned when the configured start state does not fit the chain.
    #[error("start state {start} out of range for {n_states} states")]
    StartStateOutOfRange {
        /// Configured start state.
        start: usize,
        /// Number of states in the chain.
        n_states: usize,
    },

    /// Returned when an estimation table would exceed the supported size.
    #[error("{n_states} states exceed the estimation limit of {max}")]
    TooManyStates {
        /// Requested number of states, saturated at `usize::MAX`.
        n_states: usize,
        /// Largest supported number of states.
        max: usize,
    },
}
