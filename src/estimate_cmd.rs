//! Estimate command: fit a transition matrix to observed sequences.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use tracing::{info, info_span};

use chainsim_io::{read_sequences, write_matrix};
use chainsim_markov::estimate_transitions;

use crate::cli::EstimateArgs;

/// Run the estimation pipeline.
pub fn run(args: EstimateArgs) -> Result<()> {
    let _cmd = info_span!("estimate").entered();

    info!(path = %args.input.display(), "reading sequences");
    let sequences = read_sequences(&args.input)
        .with_context(|| format!("failed to read sequences: {}", args.input.display()))?;

    let matrix = estimate_transitions(sequences.as_slice(), args.states)
        .with_context(|| format!("failed to estimate transitions from {}", args.input.display()))?;
    info!(
        n_sequences = sequences.len(),
        n_states = matrix.n_states(),
        "transition matrix estimated"
    );

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create output: {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_matrix(&mut writer, &matrix).context("failed to write matrix")?;
            writer.flush().context("failed to flush output")?;
            info!(path = %path.display(), "matrix written");
        }
        None => {
            let mut writer = BufWriter::new(io::stdout().lock());
            write_matrix(&mut writer, &matrix).context("failed to write matrix")?;
            writer.flush().context("failed to flush output")?;
        }
    }

    Ok(())
}
