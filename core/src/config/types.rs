use serde::{Deserialize, Serialize};

use crate::partition::PartitionMode;
use crate::remap::RetryRange;
use crate::verify::DEFAULT_END;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub remap: RemapConfig,

    #[serde(default)]
    pub partition: PartitionConfig,

    #[serde(default)]
    pub verify: VerifyConfig,

    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemapConfig {
    #[serde(default = "default_retry_range")]
    pub retry: RetryRange,
}

fn default_retry_range() -> RetryRange {
    RetryRange::Unbounded
}

impl Default for RemapConfig {
    fn default() -> Self {
        Self {
            retry: default_retry_range(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartitionConfig {
    #[serde(default = "default_partition_mode")]
    pub mode: PartitionMode,
}

fn default_partition_mode() -> PartitionMode {
    PartitionMode::Compat
}

impl Default for PartitionConfig {
    fn default() -> Self {
        Self {
            mode: default_partition_mode(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyConfig {
    /// Echo child executable. `None` runs this binary's `solve` subcommand.
    #[serde(default)]
    pub program: Option<String>,

    #[serde(default)]
    pub args: Vec<String>,

    #[serde(default)]
    pub start: u32,

    #[serde(default = "default_end")]
    pub end: u32,

    /// Kill the child and abort when it runs longer than this.
    #[serde(default)]
    pub timeout_ms: Option<u64>,

    #[serde(default = "default_progress_every")]
    pub progress_every: u64,

    /// Answer probes with the built-in solver instead of spawning children.
    #[serde(default)]
    pub in_process: bool,
}

fn default_end() -> u32 {
    DEFAULT_END
}

fn default_progress_every() -> u64 {
    10_000
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            program: None,
            args: Vec::new(),
            start: 0,
            end: default_end(),
            timeout_ms: None,
            progress_every: default_progress_every(),
            in_process: false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogConfig {
    /// Write logs to this file instead of stderr.
    #[serde(default)]
    pub file: Option<String>,
}
