/*!
 * Aggregations calculated directly on `f64`.
 */

use crate::{Aggregator, Measure};

/// Mean and variance on `f64` accumulators.
/// Exact for sums below 2^53, which covers any realistic column of salaries or ages.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanVar;

impl Aggregator for MeanVar {
    fn mean(&self, values: &[i64]) -> Option<Measure> {
        if values.is_empty() {
            return None;
        }
        let sum: Measure = values.iter().map(|v| *v as Measure).sum();
        Some(sum / values.len() as Measure)
    }

    fn variance(&self, values: &[i64]) -> Option<Measure> {
        if values.len() < 2 {
            return None;
        }
        let mean = self.mean(values)?;
        let mut sq = 0.0;
        for v in values {
            let d = *v as Measure - mean;
            sq += d * d;
        }
        Some(sq / (values.len() - 1) as Measure)
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////
/// Tests
///
