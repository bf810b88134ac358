use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Markov chain toolkit for hidden Markov models.
#[derive(Parser)]
#[command(
    name = "pattrec",
    version,
    about = "Simulate and evaluate discrete Markov chains for hidden Markov models"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Draw random state (and observation) sequences.
    Simulate(SimulateArgs),
    /// Report duration statistics of the chain.
    Durations(DurationsArgs),
    /// Run forward-backward on an observation sequence.
    Evaluate(EvaluateArgs),
}

/// Arguments for the `simulate` subcommand.
#[derive(clap::Args)]
pub struct SimulateArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "pattrec.toml")]
    pub config: PathBuf,

    /// Override global RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Override number of sequences from config.
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Override maximum sequence length from config.
    #[arg(long)]
    pub tmax: Option<usize>,

    /// Path for JSON output (stdout if omitted).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `durations` subcommand.
#[derive(clap::Args)]
pub struct DurationsArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "pattrec.toml")]
    pub config: PathBuf,

    /// Override duration horizon from config.
    #[arg(long)]
    pub tmax: Option<usize>,

    /// Path for JSON output (stdout if omitted).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `evaluate` subcommand.
#[derive(clap::Args)]
pub struct EvaluateArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "pattrec.toml")]
    pub config: PathBuf,

    /// Path to whitespace-separated observation file.
    #[arg(long)]
    pub observations: PathBuf,

    /// Path for JSON output (stdout if omitted).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
