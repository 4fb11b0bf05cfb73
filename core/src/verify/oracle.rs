use async_trait::async_trait;

use crate::error::VerifyError;

/// Something that is asked to echo a value back.
///
/// Implementations return the first line the echo produced, or `None` when it
/// produced no output at all. Errors abort the whole verification run.
#[async_trait]
pub trait EchoOracle: Send + Sync {
    fn name(&self) -> &str;

    async fn echo(&self, value: u32) -> Result<Option<String>, VerifyError>;
}
