//! Discrete Markov chain sampling over a dense transition matrix.
//!
//! States are plain indices `0..n`. A [`TransitionMatrix`] is turned once
//! into a [`CumulativeMatrix`], which maps uniform draws to next states by
//! inverse-CDF lookup.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌────────────────┐     ┌──────────────────┐
//!  │  transition   │────▶│  cumulative    │────▶│    simulate      │
//!  │  (P matrix)   │     │  (prefix sums) │     │  (draw states)   │
//!  └──────────────┘     └────────────────┘     └──────────────────┘
//!          ▲
//!          │ estimate (count observed transitions)
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use chainsim_markov::{CumulativeMatrix, FixedUniform, TransitionMatrix, simulate_sequence};
//!
//! let matrix = TransitionMatrix::from_rows(vec![vec![0.5, 0.5], vec![0.2, 0.8]]).unwrap();
//! let cumulative = CumulativeMatrix::from_transitions(&matrix);
//!
//! let seq = simulate_sequence(&cumulative, 0, 2, &mut FixedUniform(0.9)).unwrap();
//! assert_eq!(seq, vec![0, 1]);
//! ```

pub mod config;
pub mod cumulative;
pub mod error;
pub mod estimate;
pub mod simulate;
pub mod state;
pub mod transition;
pub mod uniform;

pub use config::SamplerConfig;
pub use cumulative::CumulativeMatrix;
pub use error::MarkovError;
pub use estimate::{MAX_ESTIMATED_STATES, TransitionCounts, estimate_transitions};
pub use simulate::{generate_sequences, simulate_sequence, simulate_sequence_into};
pub use state::State;
pub use transition::{ROW_SUM_TOLERANCE, TransitionMatrix};
pub use uniform::{FixedUniform, ScriptedUniform, UniformSource};
