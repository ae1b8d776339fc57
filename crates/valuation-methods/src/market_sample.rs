//! Shared core for the two market-based methods. Both take a sample of
//! revenue/EBITDA multiples, adjust the median (liquidity discount or control
//! premium), and derive a range from the two point valuations.

use valuation_core::{
    FinancialInputs, MethodDetails, MethodResult, MultipleStatistics, ValuationMethod,
    ValuationRange,
};

pub(crate) struct SampleParams {
    pub method: ValuationMethod,
    /// Negative for a liquidity discount, positive for a control premium.
    pub median_adjustment_percent: f64,
    pub confidence: f64,
    pub weight: f64,
}

/// Empty-sample sentinel: a complete zero-weight result rather than an error,
/// so a data-source outage never sinks the whole valuation.
const EMPTY_SAMPLE_CONFIDENCE: f64 = 1.0;

pub(crate) fn from_multiples(
    inputs: &FinancialInputs,
    revenue_multiples: &[f64],
    ebitda_multiples: &[f64],
    params: SampleParams,
) -> MethodResult {
    let sample_size = revenue_multiples.len();
    let revenue_stats = MultipleStatistics::from_sample(revenue_multiples);
    // EBITDA multiples are only meaningful for profitable peers.
    let positive_ebitda: Vec<f64> = ebitda_multiples
        .iter()
        .copied()
        .filter(|m| *m > 0.0)
        .collect();
    let ebitda_stats = MultipleStatistics::from_sample(&positive_ebitda);

    let factor = 1.0 + params.median_adjustment_percent / 100.0;

    let revenue_based_valuation = revenue_stats
        .as_ref()
        .map(|s| inputs.revenue * s.median * factor)
        .unwrap_or(0.0);
    let ebitda_based_valuation = ebitda_stats
        .as_ref()
        .map(|s| inputs.ebitda.max(0.0) * s.median * factor)
        .unwrap_or(0.0);

    let r = revenue_based_valuation;
    let e = ebitda_based_valuation;
    let (range, confidence, weight) = if r == 0.0 && e == 0.0 {
        (ValuationRange::zero(), EMPTY_SAMPLE_CONFIDENCE, 0.0)
    } else if e == 0.0 {
        // Only one component available: bracket it alone so the missing side
        // does not drag the low bound to zero.
        (bracket(r, r), params.confidence, params.weight)
    } else if r == 0.0 {
        (bracket(e, e), params.confidence, params.weight)
    } else {
        (bracket(r, e), params.confidence, params.weight)
    };

    MethodResult {
        method: params.method,
        range,
        confidence,
        weight,
        details: MethodDetails::MarketSample {
            sample_size,
            revenue_multiple_stats: revenue_stats,
            ebitda_multiple_stats: ebitda_stats,
            median_adjustment_percent: params.median_adjustment_percent,
            revenue_based_valuation,
            ebitda_based_valuation,
        },
    }
}

fn bracket(a: f64, b: f64) -> ValuationRange {
    ValuationRange {
        low: (a * 0.8).min(b * 0.8),
        median: (a + b) / 2.0,
        high: (a * 1.2).max(b * 1.2),
    }
}
