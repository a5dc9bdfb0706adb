//! Generate command: load a transition matrix and emit sampled sequences.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, info_span, warn};

use chainsim_io::{IoError, read_matrix, write_sequence};
use chainsim_markov::{
    CumulativeMatrix, ROW_SUM_TOLERANCE, SamplerConfig, UniformSource, generate_sequences,
};

use crate::cli::GenerateArgs;
use crate::config::ChainsimConfig;
use crate::convert;

/// Run the generation pipeline.
///
/// The matrix is loaded and the cumulative table built before any output is
/// opened, so a bad input file never leaves partial output behind.
pub fn run(args: GenerateArgs) -> Result<()> {
    let _cmd = info_span!("generate").entered();

    // Step 1: Load optional TOML config
    let config = match &args.config {
        Some(path) => ChainsimConfig::load(path)?,
        None => ChainsimConfig::default(),
    };

    // Step 2: Resolve paths and sampler settings
    let matrix_path = convert::resolve_matrix_path(&config, &args)?;
    let output = convert::resolve_output_path(&config, &args);
    let seed = convert::resolve_seed(&config, &args);
    let sampler_cfg = convert::build_sampler_config(&config.sampler, &args);

    // Step 3: Read the transition matrix
    info!(path = %matrix_path.display(), "reading transition matrix");
    let matrix = read_matrix(&matrix_path)
        .with_context(|| format!("failed to read matrix: {}", matrix_path.display()))?;
    for (state, row_sum) in matrix.drifting_rows() {
        warn!(
            state,
            row_sum,
            tolerance = ROW_SUM_TOLERANCE,
            "row does not sum to 1; draws past the row total fall back to the last state"
        );
    }

    // Step 4: Build the cumulative table and check the config against it
    let cumulative = CumulativeMatrix::from_transitions(&matrix);
    sampler_cfg
        .validate(cumulative.n_states())
        .context("invalid sampler configuration")?;
    info!(
        n_states = cumulative.n_states(),
        start_state = sampler_cfg.start_state(),
        sequence_length = sampler_cfg.sequence_length(),
        iteration_count = sampler_cfg.iteration_count(),
        "sampler ready"
    );

    // Step 5: Create seeded RNG
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };

    // Step 6: Sample and write
    let mut writer = open_output(output.as_deref())?;
    emit(&mut writer, &cumulative, &sampler_cfg, &mut rng)?;
    if let Some(path) = &output {
        info!(path = %path.display(), "sequences written");
    }

    Ok(())
}

/// Opens the buffered sequence sink: the file at `path`, or stdout when
/// `path` is `None`.
fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create output: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

/// Generates every sequence and writes it as one comma-separated line.
fn emit<W: Write>(
    writer: &mut W,
    cumulative: &CumulativeMatrix,
    config: &SamplerConfig,
    source: &mut impl UniformSource,
) -> Result<()> {
    generate_sequences::<IoError, _>(cumulative, config, source, |_, seq| {
        write_sequence(&mut *writer, seq)
    })
    .context("failed to write sequences")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}
