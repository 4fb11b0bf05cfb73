use oddjobs_core::api::{partition_file, AppConfig, PartitionMode};

use super::cli::PartitionArgs;

/// Faults are reported on stderr; the subcommand itself always succeeds.
pub fn run(args: PartitionArgs, cfg: &AppConfig) {
    let mode = if args.records {
        PartitionMode::Records
    } else {
        cfg.partition.mode
    };

    if let Err(e) = partition_file(args.input.as_deref(), args.output.as_deref(), mode) {
        tracing::debug!(error = ?e, "partition failed");
        eprintln!("{e}");
    }
}
