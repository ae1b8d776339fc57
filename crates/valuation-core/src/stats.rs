use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

/// Descriptive statistics over a sample of multiples.
///
/// Quantiles use the nearest-rank convention: sort ascending, then
/// `q1 = sorted[floor(n * 0.25)]`, `median = sorted[floor(n * 0.5)]`,
/// `q3 = sorted[floor(n * 0.75)]`. No interpolation — the indexing rule is
/// part of the contract so independent implementations agree exactly.
/// Standard deviation is the population form (divide by n).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultipleStatistics {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub mean: f64,
    pub std_deviation: f64,
    pub sample_size: usize,
}

impl MultipleStatistics {
    /// Compute statistics over a sample. Returns `None` for an empty sample —
    /// the explicit "no data" state, never a NaN.
    pub fn from_sample(sample: &[f64]) -> Option<Self> {
        if sample.is_empty() {
            return None;
        }

        let mut sorted = sample.to_vec();
        sorted.sort_by(f64::total_cmp);

        let n = sorted.len();
        let rank = |q: f64| sorted[((n as f64 * q).floor() as usize).min(n - 1)];

        let mean = sorted.as_slice().mean();
        let std_deviation = if n > 1 {
            sorted.as_slice().population_std_dev()
        } else {
            0.0
        };

        Some(Self {
            min: sorted[0],
            q1: rank(0.25),
            median: rank(0.5),
            q3: rank(0.75),
            max: sorted[n - 1],
            mean,
            std_deviation,
            sample_size: n,
        })
    }
}
