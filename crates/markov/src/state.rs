//! Chain states.

use crate::error::MarkovError;

/// A state of the chain, identified purely by its zero-based position.
///
/// States carry no labels: row `i` of a transition matrix describes state `i`.
pub type State = usize;

/// Checks that `state` is a valid index for a chain with `n_states` states.
///
/// # Errors
///
/// Returns [`MarkovError::StateOutOfRange`] if `state >= n_states`.
pub fn check_state(state: State, n_states: usize) -> Result<State, MarkovError> {
    if state >= n_states {
        return Err(MarkovError::StateOutOfRange { state, n_states });
    }
    Ok(state)
}
