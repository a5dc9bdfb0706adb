//! Configuration for sequence generation.

use crate::error::MarkovError;
use crate::state::State;

/// Default start state.
pub const DEFAULT_START_STATE: State = 0;

/// Default number of steps per sequence.
pub const DEFAULT_SEQUENCE_LENGTH: usize = 10_000;

/// Default number of sequences.
pub const DEFAULT_ITERATION_COUNT: usize = 2;

/// Configuration for sequence generation.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use chainsim_markov::SamplerConfig;
///
/// let config = SamplerConfig::new()
///     .with_sequence_length(500)
///     .with_iteration_count(4);
///
/// assert!(config.validate(3).is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SamplerConfig {
    start_state: State,
    sequence_length: usize,
    iteration_count: usize,
}

impl SamplerConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `start_state = 0`, `sequence_length = 10_000`,
    /// `iteration_count = 2`.
    pub fn new() -> Self {
        Self {
            start_state: DEFAULT_START_STATE,
            sequence_length: DEFAULT_SEQUENCE_LENGTH,
            iteration_count: DEFAULT_ITERATION_COUNT,
        }
    }

    /// Sets the state every sequence starts from.
    pub fn with_start_state(mut self, state: State) -> Self {
        self.start_state = state;
        self
    }

    /// Sets the number of states recorded per sequence.
    pub fn with_sequence_length(mut self, length: usize) -> Self {
        self.sequence_length = length;
        self
    }

    /// Sets the number of sequences to generate.
    pub fn with_iteration_count(mut self, count: usize) -> Self {
        self.iteration_count = count;
        self
    }

    // --- Accessors ---

    /// Returns the start state.
    pub fn start_state(&self) -> State {
        self.start_state
    }

    /// Returns the number of states recorded per sequence.
    pub fn sequence_length(&self) -> usize {
        self.sequence_length
    }

    /// Returns the number of sequences to generate.
    pub fn iteration_count(&self) -> usize {
        self.iteration_count
    }

    /// Validates this configuration against a chain with `n_states` states.
    ///
    /// Zero-length sequences and zero iterations are accepted.
    pub fn validate(&self, n_states: usize) -> Result<(), MarkovError> {
        if self.start_state >= n_states {
            return Err(MarkovError::StartStateOutOfRange {
                start: self.start_state,
                n_states,
            });
        }
        Ok(())
    }
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self::new()
    }
}
