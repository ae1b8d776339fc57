//! EBITDA multiple method. A non-positive EBITDA makes the multiple
//! meaningless, so that branch returns a floored range at sharply reduced
//! weight and confidence instead of failing.

use valuation_core::{
    FinancialInputs, MethodDetails, MethodResult, ValuationConfig, ValuationError, ValuationMethod,
};

use crate::multiple_band::{adjustment, apply_adjustments};

const CONFIDENCE: f64 = 8.0;
const WEIGHT: f64 = 0.20;
const DEGENERATE_CONFIDENCE: f64 = 3.0;
const DEGENERATE_WEIGHT: f64 = 0.05;

const MARGIN_PREMIUM_ABOVE: f64 = 25.0;

pub fn calculate(
    inputs: &FinancialInputs,
    config: &ValuationConfig,
) -> Result<MethodResult, ValuationError> {
    let band = config.multiples_for(&inputs.industry).ebitda;

    let mut adjustments = Vec::new();
    if inputs.ebitda_margin > MARGIN_PREMIUM_ABOVE {
        adjustments.push(adjustment("Margin premium", 10.0));
    }

    let adjusted_band = apply_adjustments(band, &adjustments);
    // Floored at zero: the range never goes negative.
    let basis = inputs.ebitda.max(0.0);
    let range = adjusted_band.scale(basis);

    let (confidence, weight) = if inputs.ebitda <= 0.0 {
        (DEGENERATE_CONFIDENCE, DEGENERATE_WEIGHT)
    } else {
        (CONFIDENCE, WEIGHT)
    };

    Ok(MethodResult {
        method: ValuationMethod::EbitdaMultiple,
        range,
        confidence,
        weight,
        details: MethodDetails::MultipleBand {
            industry: inputs.industry.clone(),
            industry_band: band,
            adjustments,
            adjusted_band,
            basis,
        },
    })
}
