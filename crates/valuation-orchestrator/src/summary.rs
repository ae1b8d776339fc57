//! Aggregation of the surviving method results into one weighted summary.

use valuation_core::{
    DataQuality, FinancialInputs, ImpliedMultiples, MethodDetails, MethodResult, ValuationMethod,
    ValuationRange, ValuationSummary,
};

/// Fold the surviving methods into the blended summary.
///
/// Weighted valuation and overall confidence are weight-normalized over the
/// methods with positive weight; the range low/high is the union of those
/// methods' lows/highs. The median of that range is the weighted valuation,
/// which mixes union-of-range and weighted-point semantics — an intentional
/// simplification carried by the model, not a probabilistic range.
pub fn aggregate(inputs: &FinancialInputs, methods: &[MethodResult]) -> ValuationSummary {
    let contributing: Vec<&MethodResult> = methods.iter().filter(|m| m.weight > 0.0).collect();

    let total_weight: f64 = contributing.iter().map(|m| m.weight).sum();
    let (weighted_valuation, overall_confidence) = if total_weight > 0.0 {
        let valuation = contributing
            .iter()
            .map(|m| m.range.median * m.weight)
            .sum::<f64>()
            / total_weight;
        let confidence = contributing
            .iter()
            .map(|m| m.confidence * m.weight)
            .sum::<f64>()
            / total_weight;
        (valuation, confidence)
    } else {
        (0.0, 1.0)
    };

    let valuation_range = ValuationRange {
        low: contributing
            .iter()
            .map(|m| m.range.low)
            .fold(f64::INFINITY, f64::min)
            .min(weighted_valuation),
        median: weighted_valuation,
        high: contributing
            .iter()
            .map(|m| m.range.high)
            .fold(f64::NEG_INFINITY, f64::max)
            .max(weighted_valuation),
    };

    ValuationSummary {
        weighted_valuation,
        valuation_range,
        implied_multiples: implied_multiples(inputs, methods, weighted_valuation),
        overall_confidence,
        methods_used: contributing.len(),
        data_quality: DataQuality::from_confidence(overall_confidence),
    }
}

/// Proportional back-solve: rescale each method's own adjusted multiple by how
/// far the weighted valuation sits from that method's median. Not a fresh
/// multiple calculation.
fn implied_multiples(
    inputs: &FinancialInputs,
    methods: &[MethodResult],
    weighted_valuation: f64,
) -> ImpliedMultiples {
    let back_solve = |method: ValuationMethod| -> Option<f64> {
        let result = methods.iter().find(|m| m.method == method)?;
        match &result.details {
            MethodDetails::MultipleBand { adjusted_band, .. } if result.range.median > 0.0 => {
                Some(adjusted_band.median * weighted_valuation / result.range.median)
            }
            _ => None,
        }
    };

    let revenue_multiple = back_solve(ValuationMethod::RevenueMultiple).or_else(|| {
        (inputs.revenue > 0.0).then(|| weighted_valuation / inputs.revenue)
    });
    let ebitda_multiple = back_solve(ValuationMethod::EbitdaMultiple).or_else(|| {
        (inputs.ebitda > 0.0).then(|| weighted_valuation / inputs.ebitda)
    });

    let book_value_multiple = methods
        .iter()
        .find(|m| m.method == ValuationMethod::AssetBased)
        .and_then(|m| match &m.details {
            MethodDetails::AssetBased {
                adjusted_book_value,
                ..
            } if *adjusted_book_value > 0.0 => Some(weighted_valuation / adjusted_book_value),
            _ => None,
        })
        .or_else(|| {
            (inputs.shareholders_equity > 0.0)
                .then(|| weighted_valuation / inputs.shareholders_equity)
        });

    ImpliedMultiples {
        revenue_multiple,
        ebitda_multiple,
        book_value_multiple,
    }
}
