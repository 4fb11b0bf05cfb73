use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

use oddjobs_core::api::DistanceMode;

#[derive(Parser, Debug, Clone)]
#[command(name = "oddjobs", version, about = "Small odd jobs: remap, partition, verify, solve, generate")]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (defaults to ./oddjobs.toml when present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Draw 50 unique values in [99, 1000) and print each rescaled.
    Remap(RemapArgs),
    /// Rewrite a file as header, reversed data lines, trailer.
    Partition(PartitionArgs),
    /// Check that an echo child returns every value it is given.
    ///
    /// Mismatching values are logged as warnings on stderr.
    Verify(VerifyArgs),
    /// Savehouse route solver, stdin to stdout.
    Solve,
    /// Write a random solver input and its expected savehouse list.
    Generate(GenerateArgs),
}

#[derive(ClapArgs, Debug, Clone)]
pub struct RemapArgs {
    /// Redraw duplicates from [99, 1000) instead of the full integer range.
    #[arg(long, default_value_t = false)]
    pub bounded_retry: bool,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct PartitionArgs {
    pub input: Option<PathBuf>,

    pub output: Option<PathBuf>,

    /// Keep data lines themselves and the trailer's line breaks.
    #[arg(long, default_value_t = false)]
    pub records: bool,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct VerifyArgs {
    #[arg(long)]
    pub start: Option<u32>,

    /// Exclusive.
    #[arg(long)]
    pub end: Option<u32>,

    /// Echo child executable (defaults to `oddjobs solve`).
    #[arg(long)]
    pub program: Option<String>,

    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Use the built-in solver instead of spawning children.
    #[arg(long, default_value_t = false)]
    pub in_process: bool,

    /// Print a JSON summary line when done.
    #[arg(long, default_value_t = false)]
    pub summary_json: bool,

    /// Extra arguments for the echo child.
    #[arg(last = true)]
    pub child_args: Vec<String>,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceModeArg {
    AllReachable,
    NoneReachable,
    Random,
}

impl From<DistanceModeArg> for DistanceMode {
    fn from(mode: DistanceModeArg) -> Self {
        match mode {
            DistanceModeArg::AllReachable => DistanceMode::AllReachable,
            DistanceModeArg::NoneReachable => DistanceMode::NoneReachable,
            DistanceModeArg::Random => DistanceMode::Random,
        }
    }
}

#[derive(ClapArgs, Debug, Clone)]
pub struct GenerateArgs {
    pub graph_out: PathBuf,

    pub expected_out: PathBuf,

    pub nodes: u32,

    #[arg(value_enum)]
    pub mode: DistanceModeArg,

    #[arg(long)]
    pub seed: Option<u64>,
}
