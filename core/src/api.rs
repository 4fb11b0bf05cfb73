//! Stable re-exports for consumers (`cli`, `plugins`, and external crates).
//!
//! Prefer importing from `oddjobs_core::api` instead of reaching into internal modules.

pub use crate::config::{AppConfig, LogConfig, PartitionConfig, RemapConfig, VerifyConfig};
pub use crate::error::{
    CliError, ConfigError, GenerateError, PartitionError, RemapError, SolveError, VerifyError,
};
pub use crate::generate::{generate_files, DistanceMode, GenerateSpec, GeneratedGraph};
pub use crate::partition::{partition_file, Partition, PartitionMode};
pub use crate::remap::{run_remap, RemapSpec, RemappedPair, RetryRange};
pub use crate::solve::{run_solver, solve, Problem};
pub use crate::verify::{probe_input, run_range, EchoOracle, Verdict, VerifyOpts, VerifySummary};
