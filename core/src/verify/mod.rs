//! Differential echo harness: feeds every counter value to an oracle and
//! reports the values it did not echo back.

mod harness;
mod oracle;
mod verdict;

pub use harness::{probe_input, run_range, VerifyOpts, VerifySummary};
pub use oracle::EchoOracle;
pub use verdict::{classify, Verdict};

/// Exclusive upper bound of the default counter range.
pub const DEFAULT_END: u32 = 3_999_999_999;
