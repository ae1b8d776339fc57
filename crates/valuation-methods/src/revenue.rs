//! Revenue multiple method: industry band scaled by threshold adjustments,
//! multiplied by revenue.

use valuation_core::{
    FinancialInputs, MethodDetails, MethodResult, ValuationConfig, ValuationError, ValuationMethod,
};

use crate::multiple_band::{adjustment, apply_adjustments};

const CONFIDENCE: f64 = 7.0;
const WEIGHT: f64 = 0.25;

const SIZE_DISCOUNT_BELOW: f64 = 10_000_000.0;
const GROWTH_PREMIUM_ABOVE: f64 = 30.0;
const GROWTH_DISCOUNT_BELOW: f64 = 10.0;
const MARGIN_PREMIUM_ABOVE: f64 = 80.0;

pub fn calculate(
    inputs: &FinancialInputs,
    config: &ValuationConfig,
) -> Result<MethodResult, ValuationError> {
    let band = config.multiples_for(&inputs.industry).revenue;

    let mut adjustments = Vec::new();
    if inputs.revenue < SIZE_DISCOUNT_BELOW {
        adjustments.push(adjustment("Size discount", -15.0));
    }
    if inputs.revenue_growth_rate > GROWTH_PREMIUM_ABOVE {
        adjustments.push(adjustment("Growth premium", 20.0));
    } else if inputs.revenue_growth_rate < GROWTH_DISCOUNT_BELOW {
        adjustments.push(adjustment("Growth discount", -10.0));
    }
    if inputs.gross_margin > MARGIN_PREMIUM_ABOVE {
        adjustments.push(adjustment("Margin premium", 15.0));
    }

    let adjusted_band = apply_adjustments(band, &adjustments);
    let range = adjusted_band.scale(inputs.revenue);

    Ok(MethodResult {
        method: ValuationMethod::RevenueMultiple,
        range,
        confidence: CONFIDENCE,
        weight: WEIGHT,
        details: MethodDetails::MultipleBand {
            industry: inputs.industry.clone(),
            industry_band: band,
            adjustments,
            adjusted_band,
            basis: inputs.revenue,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use valuation_core::{normalize, RawFinancialData};

    fn saas_inputs(revenue: f64, growth: f64) -> FinancialInputs {
        normalize(&RawFinancialData {
            revenue: Some(revenue),
            revenue_growth_rate: Some(growth),
            industry: Some("SaaS".to_string()),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn small_saas_company_gets_size_discount_only() {
        // 5M revenue, 25% growth: -15% size discount, no growth or margin
        // adjustment. Adjusted median multiple 8 * 0.85 = 6.8.
        let inputs = saas_inputs(5_000_000.0, 25.0);
        let result = calculate(&inputs, &ValuationConfig::default()).unwrap();

        assert!((result.range.median - 34_000_000.0).abs() < 1e-6);
        match &result.details {
            MethodDetails::MultipleBand {
                adjustments,
                adjusted_band,
                ..
            } => {
                assert_eq!(adjustments.len(), 1);
                assert_eq!(adjustments[0].percent, -15.0);
                assert!((adjusted_band.median - 6.8).abs() < 1e-12);
            }
            other => panic!("unexpected details: {other:?}"),
        }
    }

    #[test]
    fn high_growth_outweighs_size_discount() {
        // -15% size, +20% growth: net +5%.
        let inputs = saas_inputs(5_000_000.0, 45.0);
        let result = calculate(&inputs, &ValuationConfig::default()).unwrap();
        assert!((result.range.median - 5_000_000.0 * 8.0 * 1.05).abs() < 1e-6);
    }

    #[test]
    fn range_is_ordered() {
        let inputs = saas_inputs(50_000_000.0, 5.0);
        let result = calculate(&inputs, &ValuationConfig::default()).unwrap();
        assert!(result.range.low <= result.range.median);
        assert!(result.range.median <= result.range.high);
    }
}
