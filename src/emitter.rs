/*!
 * Generates sequence of independent, uniformly distributed random integers and writes
 * them one per line.
 */

use std::io::Write;

use anyhow::{Context, Result};
use rand::Rng;

/// Number of values emitted by default.
pub const DEFAULT_COUNT: usize = 1000;
/// Default lower bound (inclusive).
pub const DEFAULT_LOW: i64 = 1;
/// Default upper bound (inclusive).
pub const DEFAULT_HIGH: i64 = 500_000;

/// What to generate: `count` samples from inclusive range `low..=high`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceSpec {
    count: usize,
    low: i64,
    high: i64,
}

impl Default for SequenceSpec {
    fn default() -> Self {
        SequenceSpec { count: DEFAULT_COUNT, low: DEFAULT_LOW, high: DEFAULT_HIGH }
    }
}

impl SequenceSpec {
    /// Create validated spec.
    pub fn new(count: usize, low: i64, high: i64) -> Result<Self> {
        if low > high {
            bail!("Empty range: low bound {} is greater than high bound {}", low, high);
        }
        // rand 0.7 gen_range() takes exclusive upper bound
        if high == i64::MAX {
            bail!("High bound {} too large", high);
        }
        Ok(SequenceSpec { count, low, high })
    }

    pub fn count(&self) -> usize { self.count }
    pub fn low(&self) -> i64 { self.low }
    pub fn high(&self) -> i64 { self.high }

    /// Expected mean of uniform distribution over the range.
    pub fn expected_mean(&self) -> f64 {
        (self.low as f64 + self.high as f64) / 2.0
    }
}

/// Draws one value from `spec` range.
#[inline]
pub fn sample<R: Rng>(rng: &mut R, spec: &SequenceSpec) -> i64 {
    rng.gen_range(spec.low, spec.high + 1)
}

/// Lazily yields `spec.count()` samples.
pub fn samples<'a, R: Rng>(rng: &'a mut R, spec: &'a SequenceSpec) -> impl Iterator<Item=i64> + 'a {
    (0..spec.count).map(move |_| sample(&mut *rng, spec))
}

/// Writes `spec.count()` samples to `out`, one per line in generation order.
/// Returns number of lines written.
pub fn emit<R: Rng, W: Write>(rng: &mut R, spec: &SequenceSpec, mut out: W) -> Result<usize> {
    let mut written = 0;
    for v in samples(rng, spec) {
        writeln!(out, "{}", v).with_context(|| format!("Failed to write value number {}", written + 1))?;
        written += 1;
    }
    out.flush().context("Failed to flush output")?;
    Ok(written)
}

///////////////////////////////////////////////////////////////////////////////////////////////////
/// Tests
///
