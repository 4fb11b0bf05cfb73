// core/src/error/generate_error.rs
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("node count must be at least 2, got {0}")]
    TooFewNodes(u32),

    #[error("cannot write {}", path.display())]
    Write { path: PathBuf, #[source] source: std::io::Error },
}
