//! Unique random sampling and linear rescaling into the output range.

use std::fmt;
use std::io::Write;
use std::ops::Range;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::RemapError;

pub const SAMPLE_COUNT: usize = 50;
pub const LOW: i32 = 99;
pub const HIGH: i32 = 1000;

/// `(HIGH - LOW) / (SAMPLE_COUNT + 1 - 1)`, truncated.
pub const SCALE: i64 = ((HIGH - LOW) / (SAMPLE_COUNT as i32 + 1 - 1)) as i64;

/// Where a redraw after a duplicate comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RetryRange {
    /// Redraw from `[0, i32::MAX)`, so retried samples usually leave the
    /// sampling range.
    Unbounded,
    /// Redraw from the sampling range again.
    Bounded,
}

#[derive(Debug, Clone)]
pub struct RemapSpec {
    pub count: usize,
    pub low: i32,
    pub high: i32,
    pub retry: RetryRange,
}

impl Default for RemapSpec {
    fn default() -> Self {
        Self {
            count: SAMPLE_COUNT,
            low: LOW,
            high: HIGH,
            retry: RetryRange::Unbounded,
        }
    }
}

impl RemapSpec {
    pub fn with_retry(mut self, retry: RetryRange) -> Self {
        self.retry = retry;
        self
    }

    fn validate(&self) -> Result<(), RemapError> {
        let width = i64::from(self.high) - i64::from(self.low);
        let too_small = width <= 0
            || (self.retry == RetryRange::Bounded && (width as u64) < self.count as u64);
        if too_small {
            return Err(RemapError::RangeTooSmall {
                count: self.count,
                low: self.low,
                high: self.high,
            });
        }
        Ok(())
    }

    fn retry_range(&self) -> Range<i32> {
        match self.retry {
            RetryRange::Unbounded => 0..i32::MAX,
            RetryRange::Bounded => self.low..self.high,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemappedPair {
    pub raw: i32,
    pub mapped: i64,
}

impl fmt::Display for RemappedPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ", self.raw, self.mapped)
    }
}

/// `y = (x - 1) * SCALE + LOW`. Widened to `i64` because unbounded retries can
/// produce raw values near `i32::MAX`.
pub fn remap_value(x: i32) -> i64 {
    (i64::from(x) - 1) * SCALE + i64::from(LOW)
}

pub fn draw_unique<R>(rng: &mut R, spec: &RemapSpec) -> Result<Vec<i32>, RemapError>
where
    R: Rng,
{
    draw_unique_with(|range| rng.gen_range(range), spec)
}

/// Sampling with an injectable source: `next` receives the range each draw
/// must come from.
pub fn draw_unique_with<F>(mut next: F, spec: &RemapSpec) -> Result<Vec<i32>, RemapError>
where
    F: FnMut(Range<i32>) -> i32,
{
    spec.validate()?;

    let mut raw: Vec<i32> = Vec::with_capacity(spec.count);
    let mut retries = 0u64;
    for _ in 0..spec.count {
        let mut r = next(spec.low..spec.high);
        while raw.contains(&r) {
            retries += 1;
            r = next(spec.retry_range());
        }
        raw.push(r);
    }

    if retries > 0 {
        tracing::debug!(retries, retry = ?spec.retry, "redrew duplicate samples");
    }
    Ok(raw)
}

pub fn remap_all(samples: &[i32]) -> Vec<RemappedPair> {
    samples
        .iter()
        .map(|&raw| RemappedPair {
            raw,
            mapped: remap_value(raw),
        })
        .collect()
}

pub fn write_pairs<W: Write>(out: &mut W, pairs: &[RemappedPair]) -> Result<(), RemapError> {
    for pair in pairs {
        writeln!(out, "{pair}")?;
    }
    out.flush()?;
    Ok(())
}

/// Draws, remaps and prints one full sample set.
pub fn run_remap<R, W>(rng: &mut R, spec: &RemapSpec, out: &mut W) -> Result<Vec<RemappedPair>, RemapError>
where
    R: Rng,
    W: Write,
{
    let samples = draw_unique(rng, spec)?;
    let pairs = remap_all(&samples);
    write_pairs(out, &pairs)?;
    tracing::info!(count = pairs.len(), "remapped samples");
    Ok(pairs)
}
