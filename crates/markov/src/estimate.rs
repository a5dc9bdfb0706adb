//! Transition matrix estimation from observed state sequences.

use tracing::debug;

use crate::error::MarkovError;
use crate::state::{State, check_state};
use crate::transition::TransitionMatrix;

/// Largest number of states a [`TransitionCounts`] table may hold.
///
/// The table is dense, so this bounds it at 128 MiB of counts.
pub const MAX_ESTIMATED_STATES: usize = 4096;

/// Transition counts accumulated from observed sequences.
///
/// Entry `(i, j)` counts how often state `j` directly followed state `i`.
/// Transitions are only counted within a sequence, never across the boundary
/// between two sequences.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionCounts {
    n_states: usize,
    counts: Vec<f64>,
}

impl TransitionCounts {
    /// Creates an all-zero count table for `n_states` states.
    ///
    /// # Errors
    ///
    /// Returns [`MarkovError::TooManyStates`] if `n_states` exceeds
    /// [`MAX_ESTIMATED_STATES`].
    pub fn new(n_states: usize) -> Result<Self, MarkovError> {
        let too_many = MarkovError::TooManyStates {
            n_states,
            max: MAX_ESTIMATED_STATES,
        };
        if n_states > MAX_ESTIMATED_STATES {
            return Err(too_many);
        }
        let cells = n_states.checked_mul(n_states).ok_or(too_many)?;
        Ok(Self {
            n_states,
            counts: vec![0.0; cells],
        })
    }

    /// Returns the number of states.
    pub fn n_states(&self) -> usize {
        self.n_states
    }

    /// Counts every consecutive pair of `sequence`.
    ///
    /// # Errors
    ///
    /// Returns [`MarkovError::StateOutOfRange`] if any state does not fit the
    /// table. The table is left unchanged in that case.
    pub fn observe(&mut self, sequence: &[State]) -> Result<(), MarkovError> {
        for &s in sequence {
            check_state(s, self.n_states)?;
        }
        for pair in sequence.windows(2) {
            self.counts[pair[0] * self.n_states + pair[1]] += 1.0;
        }
        Ok(())
    }

    /// Returns the count of `from -> to` transitions.
    ///
    /// # Panics
    ///
    /// Panics if `from >= n_states` or `to >= n_states`.
    pub fn count(&self, from: State, to: State) -> f64 {
        assert!(
            from < self.n_states && to < self.n_states,
            "states must be < {}, got {from} -> {to}",
            self.n_states
        );
        self.counts[from * self.n_states + to]
    }

    /// Returns the total number of counted transitions.
    pub fn total(&self) -> f64 {
        self.counts.iter().sum()
    }

    /// Normalises each row into transition probabilities.
    ///
    /// A state that was never left has no outgoing evidence and becomes
    /// absorbing: its row is 1.0 on the diagonal.
    ///
    /// # Errors
    ///
    /// Returns [`MarkovError::EmptyMatrix`] if the table has no states.
    pub fn to_matrix(&self) -> Result<TransitionMatrix, MarkovError> {
        let n = self.n_states;
        let rows = self
            .counts
            .chunks(n.max(1))
            .take(n)
            .enumerate()
            .map(|(i, row)| -> Vec<f64> {
                let row_sum: f64 = row.iter().sum();
                if row_sum > 0.0 {
                    row.iter().map(|&c| c / row_sum).collect()
                } else {
                    debug!(state = i, "no observed transitions: state made absorbing");
                    let mut absorbing = vec![0.0; n];
                    absorbing[i] = 1.0;
                    absorbing
                }
            })
            .collect();
        TransitionMatrix::from_rows(rows)
    }
}

/// Estimates a transition matrix from observed sequences.
///
/// # Arguments
///
/// * `sequences` - Observed state sequences.
/// * `n_states` - Number of states, or `None` to use the largest observed
///   state plus one.
///
/// # Errors
///
/// - [`MarkovError::EmptyData`] if no state was observed.
/// - [`MarkovError::StateOutOfRange`] if a state does not fit `n_states`.
/// - [`MarkovError::TooManyStates`] if the state count exceeds
///   [`MAX_ESTIMATED_STATES`].
pub fn estimate_transitions<S: AsRef<[State]>>(
    sequences: &[S],
    n_states: Option<usize>,
) -> Result<TransitionMatrix, MarkovError> {
    let max_state = sequences
        .iter()
        .flat_map(|s| s.as_ref().iter().copied())
        .max()
        .ok_or(MarkovError::EmptyData)?;
    let n_states = match n_states {
        Some(n) => n,
        None => max_state
            .checked_add(1)
            .ok_or(MarkovError::TooManyStates {
                n_states: usize::MAX,
                max: MAX_ESTIMATED_STATES,
            })?,
    };

    let mut counts = TransitionCounts::new(n_states)?;
    for seq in sequences {
        counts.observe(seq.as_ref())?;
    }
    debug!(n_states, n_transitions = counts.total(), "transitions counted");

    counts.to_matrix()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cumulative::CumulativeMatrix;
    use crate::simulate::simulate_sequence;
    use approx::assert_abs_diff_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn counts_consecutive_pairs() {
        let mut counts = TransitionCounts::new(3).unwrap();
        counts.observe(&[0, 0, 1, 2, 0, 1]).unwrap();
        assert_eq!(counts.count(0, 0), 1.0);
        assert_eq!(counts.count(0, 1), 2.0);
        assert_eq!(counts.count(1, 2), 1.0);
        assert_eq!(counts.count(2, 0), 1.0);
        assert_eq!(counts.total(), 5.0);
    }

    #[test]
    fn pairs_do_not_span_sequences() {
        let mut counts = TransitionCounts::new(2).unwrap();
        counts.observe(&[0, 0]).unwrap();
        counts.observe(&[1, 1]).unwrap();
        assert_eq!(counts.count(0, 1), 0.0);
        assert_eq!(counts.count(0, 0), 1.0);
        assert_eq!(counts.count(1, 1), 1.0);
    }

    #[test]
    fn observe_out_of_range_leaves_table_unchanged() {
        let mut counts = TransitionCounts::new(2).unwrap();
        let result = counts.observe(&[0, 1, 2]);
        assert!(matches!(
            result,
            Err(MarkovError::StateOutOfRange {
                state: 2,
                n_states: 2
            })
        ));
        assert_eq!(counts.total(), 0.0);
    }

    #[test]
    fn known_sequence() {
        // 0->0, 0->1, 1->0, 0->1, 1->1
        let tm = estimate_transitions(&[vec![0usize, 0, 1, 0, 1, 1]], None).unwrap();
        assert_eq!(tm.n_states(), 2);
        assert_abs_diff_eq!(tm.prob(0, 0), 1.0 / 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(tm.prob(0, 1), 2.0 / 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(tm.prob(1, 0), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(tm.prob(1, 1), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn unvisited_state_is_absorbing() {
        let tm = estimate_transitions(&[vec![0usize, 1, 0, 1]], Some(3)).unwrap();
        assert_eq!(tm.row(2), &[0.0, 0.0, 1.0]);
        assert!(tm.drifting_rows().is_empty());
    }

    #[test]
    fn terminal_state_is_absorbing() {
        // State 1 appears only at the end, so it is never left.
        let tm = estimate_transitions(&[[0usize, 0, 1]], None).unwrap();
        assert_eq!(tm.row(0), &[0.5, 0.5]);
        assert_eq!(tm.row(1), &[0.0, 1.0]);
    }

    #[test]
    fn empty_input() {
        let none: [Vec<State>; 0] = [];
        assert!(matches!(
            estimate_transitions(&none, None),
            Err(MarkovError::EmptyData)
        ));
        assert!(matches!(
            estimate_transitions(&[Vec::<State>::new()], Some(2)),
            Err(MarkovError::EmptyData)
        ));
    }

    #[test]
    fn explicit_states_too_small() {
        let result = estimate_transitions(&[vec![0usize, 3]], Some(2));
        assert!(matches!(
            result,
            Err(MarkovError::StateOutOfRange { state: 3, .. })
        ));
    }

    #[test]
    fn zero_states_is_empty_matrix() {
        assert!(matches!(
            TransitionCounts::new(0).unwrap().to_matrix(),
            Err(MarkovError::EmptyMatrix)
        ));
    }

    #[test]
    fn largest_index_does_not_overflow() {
        let result = estimate_transitions(&[vec![0usize, usize::MAX]], None);
        assert!(
            matches!(
                result,
                Err(MarkovError::TooManyStates {
                    n_states: usize::MAX,
                    max: MAX_ESTIMATED_STATES
                })
            ),
            "got {result:?}"
        );
    }

    #[test]
    fn index_whose_square_overflows_is_rejected() {
        let result = estimate_transitions(&[vec![0usize, 1usize << 33]], None);
        assert!(
            matches!(
                result,
                Err(MarkovError::TooManyStates { n_states, .. }) if n_states == (1usize << 33) + 1
            ),
            "got {result:?}"
        );
    }

    #[test]
    fn moderate_index_beyond_limit_is_rejected() {
        let result = estimate_transitions(&[vec![0usize, 100_000]], None);
        assert!(matches!(
            result,
            Err(MarkovError::TooManyStates {
                n_states: 100_001,
                ..
            })
        ));
    }

    #[test]
    fn explicit_state_count_beyond_limit_is_rejected() {
        let result = estimate_transitions(&[vec![0usize, 1]], Some(MAX_ESTIMATED_STATES + 1));
        assert!(matches!(result, Err(MarkovError::TooManyStates { .. })));
        assert!(matches!(
            TransitionCounts::new(usize::MAX),
            Err(MarkovError::TooManyStates { .. })
        ));
    }

    #[test]
    fn limit_itself_is_accepted() {
        let counts = TransitionCounts::new(MAX_ESTIMATED_STATES).unwrap();
        assert_eq!(counts.n_states(), MAX_ESTIMATED_STATES);
        assert_eq!(counts.total(), 0.0);
    }

    #[test]
    #[should_panic(expected = "states must be < 2")]
    fn count_out_of_range_panics() {
        let counts = TransitionCounts::new(2).unwrap();
        let _ = counts.count(0, 2);
    }

    #[test]
    fn recovers_generating_matrix() {
        let source = TransitionMatrix::from_rows(vec![
            vec![0.6, 0.3, 0.1],
            vec![0.2, 0.5, 0.3],
            vec![0.3, 0.3, 0.4],
        ])
        .unwrap();
        let cm = CumulativeMatrix::from_transitions(&source);
        let mut rng = StdRng::seed_from_u64(2024);
        let seq = simulate_sequence(&cm, 0, 50_000, &mut rng).unwrap();

        let estimated = estimate_transitions(&[seq], Some(3)).unwrap();
        for i in 0..3 {
            for j in 0..3 {
                assert_abs_diff_eq!(estimated.prob(i, j), source.prob(i, j), epsilon = 0.02);
            }
        }
    }
}
