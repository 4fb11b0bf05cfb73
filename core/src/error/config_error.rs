// core/src/error/config_error.rs
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("config read error: {}", path.display())]
    Read { path: PathBuf, #[source] source: std::io::Error },

    #[error("config parse error")]
    Parse(#[source] anyhow::Error),

    #[error("env var invalid: {key}")]
    EnvInvalid { key: String, #[source] source: anyhow::Error },
}
