// core/src/error/partition_error.rs
use thiserror::Error;

/// Faults of the line partitioner. All of them are reported on stderr and the
/// process still exits normally.
#[derive(Debug, Error)]
pub enum PartitionError {
    #[error("Input file not found!")]
    InputNotFound,

    #[error("missing input path argument")]
    MissingInputPath,

    #[error("missing output path argument")]
    MissingOutputPath,

    #[error("malformed input: {0}")]
    Malformed(&'static str),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}
