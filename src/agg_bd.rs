/*!
 * Aggregations calculated on `BigDecimal`, converted to `f64` only at the very end.
 */

use bigdecimal::{BigDecimal, ToPrimitive, Zero};

use crate::{Aggregator, Measure};

/// Mean and variance on exact `BigDecimal` accumulators.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanVar;

impl MeanVar {
    /// Returns `(n, sum, sum of squares)`.
    fn sums(values: &[i64]) -> (BigDecimal, BigDecimal, BigDecimal) {
        let mut sum: BigDecimal = Zero::zero();
        let mut sum_sq: BigDecimal = Zero::zero();
        for v in values {
            let v = BigDecimal::from(*v);
            sum_sq += &v * &v;
            sum += v;
        }
        (BigDecimal::from(values.len() as i64), sum, sum_sq)
    }
}

impl Aggregator for MeanVar {
    fn mean(&self, values: &[i64]) -> Option<Measure> {
        if values.is_empty() {
            return None;
        }
        let (n, sum, _) = Self::sums(values);
        (sum / n).to_f64()
    }

    fn variance(&self, values: &[i64]) -> Option<Measure> {
        if values.len() < 2 {
            return None;
        }
        // (n*sum(x^2) - sum(x)^2) / (n*(n-1)) is exact until the single division
        let (n, sum, sum_sq) = Self::sums(values);
        let numer = &n * &sum_sq - &sum * &sum;
        let denom = &n * (&n - BigDecimal::from(1));
        (numer / denom).to_f64()
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////
/// Tests
///

#[cfg(test)]
mod tests {
    use super::*;

    include!("test_common_aggregate.inc.rs");
}
