//! Pure conversion functions: TOML config plus CLI overrides -> crate API config types.

use std::path::PathBuf;

use anyhow::{Result, anyhow};

use chainsim_markov::SamplerConfig;

use crate::cli::GenerateArgs;
use crate::config::{ChainsimConfig, SamplerToml};

/// Builds a `SamplerConfig` from the TOML section, with CLI values taking
/// precedence.
pub fn build_sampler_config(sampler: &SamplerToml, args: &GenerateArgs) -> SamplerConfig {
    SamplerConfig::new()
        .with_start_state(args.start_state.unwrap_or(sampler.start_state))
        .with_sequence_length(args.sequence_length.unwrap_or(sampler.sequence_length))
        .with_iteration_count(args.iteration_count.unwrap_or(sampler.iteration_count))
}

/// Resolves the matrix path: CLI positional first, then `[io].matrix`.
pub fn resolve_matrix_path(config: &ChainsimConfig, args: &GenerateArgs) -> Result<PathBuf> {
    args.matrix
        .clone()
        .or_else(|| config.io.matrix.clone())
        .ok_or_else(|| anyhow!("no matrix path: pass MATRIX or set [io].matrix in config"))
}

/// Resolves the output path: `--output` first, then `[io].output`; `None` means stdout.
pub fn resolve_output_path(config: &ChainsimConfig, args: &GenerateArgs) -> Option<PathBuf> {
    args.output.clone().or_else(|| config.io.output.clone())
}

/// Resolves the RNG seed: `--seed` first, then the top-level `seed`.
pub fn resolve_seed(config: &ChainsimConfig, args: &GenerateArgs) -> Option<u64> {
    args.seed.or(config.seed)
}
