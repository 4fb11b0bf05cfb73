use std::io::Write;

use serde::Serialize;

use crate::error::VerifyError;

use super::oracle::EchoOracle;
use super::verdict::{classify, Verdict};

/// Text written to the echo child for `value`: the value three times on the
/// first line, then the bare value with no trailing newline.
pub fn probe_input(value: u32) -> String {
    format!("{value} {value} {value}\n{value}")
}

#[derive(Debug, Clone)]
pub struct VerifyOpts {
    pub start: u32,
    /// Exclusive.
    pub end: u32,
    /// Log progress every this many trials; 0 disables it.
    pub progress_every: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VerifySummary {
    pub checked: u64,
    pub matched: u64,
    pub mismatched: u64,
    pub unparseable: u64,
}

impl VerifySummary {
    fn record(&mut self, verdict: &Verdict) {
        self.checked += 1;
        match verdict {
            Verdict::Match => self.matched += 1,
            Verdict::Mismatch { .. } => self.mismatched += 1,
            Verdict::Unparseable { .. } => self.unparseable += 1,
        }
    }
}

/// Asks `oracle` about every value in `start..end`, one at a time, and writes a
/// line to `out` for each value that did not come back unchanged.
pub async fn run_range<O, W>(
    oracle: &O,
    opts: &VerifyOpts,
    out: &mut W,
) -> Result<VerifySummary, VerifyError>
where
    O: EchoOracle + ?Sized,
    W: Write,
{
    tracing::info!(
        oracle = oracle.name(),
        start = opts.start,
        end = opts.end,
        "verification started"
    );

    let mut summary = VerifySummary::default();
    for value in opts.start..opts.end {
        let line = oracle.echo(value).await?;
        let verdict = classify(value, line.as_deref());

        match &verdict {
            Verdict::Match => tracing::trace!(value, "echo matched"),
            Verdict::Mismatch { observed } => {
                tracing::warn!(value, observed, "echo returned a different number")
            }
            Verdict::Unparseable { raw } => {
                tracing::warn!(value, raw = %raw, "echo output is not a number")
            }
        }

        if let Some(msg) = verdict.report_line(value) {
            writeln!(out, "{msg}").map_err(VerifyError::Report)?;
            out.flush().map_err(VerifyError::Report)?;
        }

        summary.record(&verdict);
        if opts.progress_every > 0 && summary.checked.is_multiple_of(opts.progress_every) {
            tracing::info!(
                checked = summary.checked,
                last = value,
                mismatched = summary.mismatched,
                unparseable = summary.unparseable,
                "verification progress"
            );
        }
    }

    tracing::info!(
        checked = summary.checked,
        mismatched = summary.mismatched,
        unparseable = summary.unparseable,
        "verification finished"
    );
    Ok(summary)
}
