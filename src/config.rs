use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level chainsim configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ChainsimConfig {
    /// Global RNG seed.
    #[serde(default)]
    pub seed: Option<u64>,

    /// I/O settings.
    #[serde(default)]
    pub io: IoConfig,

    /// Sampler settings.
    #[serde(default)]
    pub sampler: SamplerToml,
}

impl ChainsimConfig {
    /// Loads a configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct IoConfig {
    pub matrix: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SamplerToml {
    #[serde(default)]
    pub start_state: usize,
    #[serde(default = "default_sequence_length")]
    pub sequence_length: usize,
    #[serde(default = "default_iteration_count")]
    pub iteration_count: usize,
}

impl Default for SamplerToml {
    fn default() -> Self {
        Self {
            start_state: 0,
            sequence_length: default_sequence_length(),
            iteration_count: default_iteration_count(),
        }
    }
}

fn default_sequence_length() -> usize {
    chainsim_markov::config::DEFAULT_SEQUENCE_LENGTH
}
fn default_iteration_count() -> usize {
    chainsim_markov::config::DEFAULT_ITERATION_COUNT
}
