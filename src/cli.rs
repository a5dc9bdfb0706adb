use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Markov chain sequence generator.
#[derive(Parser)]
#[command(
    name = "chainsim",
    version,
    about = "Generate state sequences from a Markov transition matrix",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Optional subcommand; sequence generation runs when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Arguments for sequence generation.
    #[command(flatten)]
    pub generate: GenerateArgs,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Estimate a transition matrix from observed sequences.
    Estimate(EstimateArgs),
}

/// Arguments for sequence generation.
#[derive(clap::Args)]
pub struct GenerateArgs {
    /// Path to the whitespace-delimited transition matrix.
    pub matrix: Option<PathBuf>,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write sequences to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// State every sequence starts from.
    #[arg(long)]
    pub start_state: Option<usize>,

    /// Number of states recorded per sequence.
    #[arg(short = 'n', long = "length")]
    pub sequence_length: Option<usize>,

    /// Number of sequences to generate.
    #[arg(short = 'i', long = "iterations")]
    pub iteration_count: Option<usize>,

    /// RNG seed; drawn from the OS when unset.
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Arguments for the `estimate` subcommand.
#[derive(clap::Args)]
pub struct EstimateArgs {
    /// Path to comma-separated state sequences, one per line.
    pub input: PathBuf,

    /// Number of states; inferred from the largest observed state when unset.
    #[arg(long)]
    pub states: Option<usize>,

    /// Write the matrix to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn positional_matrix_only() {
        let cli = Cli::try_parse_from(["chainsim", "chain.txt"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.generate.matrix, Some(PathBuf::from("chain.txt")));
        assert!(cli.generate.sequence_length.is_none());
        assert!(cli.generate.seed.is_none());
    }

    #[test]
    fn generate_overrides() {
        let cli = Cli::try_parse_from([
            "chainsim",
            "-vv",
            "chain.txt",
            "--start-state",
            "2",
            "-n",
            "50",
            "--iterations",
            "3",
            "--seed",
            "7",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.generate.start_state, Some(2));
        assert_eq!(cli.generate.sequence_length, Some(50));
        assert_eq!(cli.generate.iteration_count, Some(3));
        assert_eq!(cli.generate.seed, Some(7));
    }

    #[test]
    fn estimate_subcommand() {
        let cli =
            Cli::try_parse_from(["chainsim", "estimate", "seqs.csv", "--states", "4"]).unwrap();
        match cli.command {
            Some(Command::Estimate(args)) => {
                assert_eq!(args.input, PathBuf::from("seqs.csv"));
                assert_eq!(args.states, Some(4));
                assert!(args.output.is_none());
            }
            None => panic!("expected estimate subcommand"),
        }
    }
}
