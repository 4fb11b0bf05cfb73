// core/src/error/verify_error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("failed to spawn process: {program}")]
    Spawn { program: String, #[source] source: std::io::Error },

    #[error("io error on child {stream} for value {value}")]
    StreamIo { stream: &'static str, value: u32, #[source] source: std::io::Error },

    #[error("child did not exit within {timeout_ms}ms for value {value}")]
    Timeout { value: u32, timeout_ms: u64 },

    #[error("report write failed")]
    Report(#[source] std::io::Error),
}
