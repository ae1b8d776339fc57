//! Comparable-company method: public-peer multiples with a liquidity
//! discount, reflecting the absence of a traded market for the subject.

use valuation_core::{
    FinancialInputs, MethodResult, PublicComparable, ValuationConfig, ValuationError,
    ValuationMethod,
};

use crate::market_sample::{from_multiples, SampleParams};

const CONFIDENCE: f64 = 7.0;
const WEIGHT: f64 = 0.15;

pub fn calculate(
    inputs: &FinancialInputs,
    sample: &[PublicComparable],
    config: &ValuationConfig,
) -> Result<MethodResult, ValuationError> {
    let revenue_multiples: Vec<f64> = sample.iter().map(|c| c.revenue_multiple).collect();
    let ebitda_multiples: Vec<f64> = sample.iter().map(|c| c.ebitda_multiple).collect();

    Ok(from_multiples(
        inputs,
        &revenue_multiples,
        &ebitda_multiples,
        SampleParams {
            method: ValuationMethod::ComparableCompany,
            median_adjustment_percent: -config.liquidity_discount,
            confidence: CONFIDENCE,
            weight: WEIGHT,
        },
    ))
}
