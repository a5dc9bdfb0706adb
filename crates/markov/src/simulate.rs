//! Markov chain sequence simulation.

use tracing::debug;

use crate::config::SamplerConfig;
use crate::cumulative::CumulativeMatrix;
use crate::error::MarkovError;
use crate::state::{State, check_state};
use crate::uniform::UniformSource;

/// Simulates one sequence of visited states.
///
/// # Arguments
///
/// * `cumulative` - Cumulative transition table.
/// * `start` - The first recorded state.
/// * `length` - Number of states to record.
/// * `source` - Uniform random source; one draw is consumed per step.
///
/// # Returns
///
/// A vector of `length` states. Element 0 is `start`; the state reached after
/// the final step is drawn but not recorded.
///
/// # Errors
///
/// Returns [`MarkovError::StateOutOfRange`] if `start` is not a valid state.
pub fn simulate_sequence(
    cumulative: &CumulativeMatrix,
    start: State,
    length: usize,
    source: &mut impl UniformSource,
) -> Result<Vec<State>, MarkovError> {
    let mut out = vec![0; length];
    simulate_sequence_into(cumulative, start, source, &mut out)?;
    Ok(out)
}

/// Simulates one sequence into a pre-allocated buffer.
///
/// The buffer length is the sequence length.
///
/// # Errors
///
/// Returns [`MarkovError::StateOutOfRange`] if `start` is not a valid state.
pub fn simulate_sequence_into(
    cumulative: &CumulativeMatrix,
    start: State,
    source: &mut impl UniformSource,
    out: &mut [State],
) -> Result<(), MarkovError> {
    let mut current = check_state(start, cumulative.n_states())?;
    for slot in out.iter_mut() {
        *slot = current;
        current = cumulative.sample(current, source);
    }
    Ok(())
}

/// Generates `config.iteration_count()` independent sequences.
///
/// Every sequence restarts from `config.start_state()`; nothing carries over
/// between iterations apart from the position of `source`. A single buffer
/// is reused and handed to `sink` together with the iteration index once it
/// is filled.
///
/// # Errors
///
/// Returns [`MarkovError::StartStateOutOfRange`] (converted into `E`) before
/// any sequence is produced if the start state does not fit the chain, or the
/// first error returned by `sink`.
pub fn generate_sequences<E, F>(
    cumulative: &CumulativeMatrix,
    config: &SamplerConfig,
    source: &mut impl UniformSource,
    mut sink: F,
) -> Result<(), E>
where
    E: From<MarkovError>,
    F: FnMut(usize, &[State]) -> Result<(), E>,
{
    config.validate(cumulative.n_states())?;

    let mut buf = vec![config.start_state(); config.sequence_length()];
    for iteration in 0..config.iteration_count() {
        simulate_sequence_into(cumulative, config.start_state(), source, &mut buf)?;
        debug!(iteration, length = buf.len(), "sequence generated");
        sink(iteration, &buf)?;
    }
    Ok(())
}
