// core/src/error/cli_error.rs
use thiserror::Error;

use super::{ConfigError, GenerateError, RemapError, SolveError, VerifyError};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("remap error: {0}")]
    Remap(#[from] RemapError),

    #[error("verify error: {0}")]
    Verify(#[from] VerifyError),

    #[error("solve error: {0}")]
    Solve(#[from] SolveError),

    #[error("generate error: {0}")]
    Generate(#[from] GenerateError),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}
