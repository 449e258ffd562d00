/*!
    Two small independent utilities:

    * [`emitter`] - prints a sequence of uniformly distributed random integers
      (by default 1000 values from `1..=500000`), see `random_sequence` binary.
    * [`table`] - a tiny column oriented in-memory table with a handful of read-only queries
      (preview, summary statistics, filtering, grouped mean), see `table_demo` binary.

    Numeric aggregations go thru [`Aggregator`] trait. Default implementation works on `f64`,
    with `agg_bd` feature enabled values are summed on `BigDecimal` instead.

   License: MIT like.  
   Copyright (c) 2020 Grzegorz Wierzchowski.
 */

#[macro_use] extern crate anyhow;

use anyhow::Result;

pub mod emitter;
pub mod render;
pub mod table;

#[cfg_attr(feature = "agg_bd", allow(dead_code))]
mod agg_f64;
#[cfg(feature = "agg_bd")]
mod agg_bd;

/// Type of aggregated (not raw) numeric results.
pub type Measure = f64;

/// Creates concrete object used to aggregate numeric columns.
#[cfg(not(feature = "agg_bd"))]
pub fn aggregator_factory() -> impl Aggregator {
    agg_f64::MeanVar
}

/// Creates concrete object used to aggregate numeric columns.
#[cfg(feature = "agg_bd")]
pub fn aggregator_factory() -> impl Aggregator {
    agg_bd::MeanVar
}

/// Numeric kernel used by summary statistics and grouped aggregation.
pub trait Aggregator {
    /// Arithmetic mean of `values`; `None` for empty input.
    fn mean(&self, values: &[i64]) -> Option<Measure>;

    /// Sample variance (`n - 1` in denominator); `None` if less than 2 values.
    fn variance(&self, values: &[i64]) -> Option<Measure>;

    /// Sample standard deviation.
    fn std_dev(&self, values: &[i64]) -> Option<Measure> {
        self.variance(values).map(Measure::sqrt)
    }
}

/// Quantile `q` (`0.0..=1.0`) of already sorted `sorted` values.
/// Linear interpolation between closest ranks at position `(n-1)*q`.
pub fn quantile(sorted: &[i64], q: Measure) -> Result<Measure> {
    if sorted.is_empty() {
        bail!("Quantile of empty column is undefined");
    }
    if !(0.0..=1.0).contains(&q) {
        bail!("Quantile {} out of range 0..=1", q);
    }
    let pos = (sorted.len() - 1) as Measure * q;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as Measure;
    Ok(sorted[lo] as Measure + (sorted[hi] - sorted[lo]) as Measure * frac)
}
