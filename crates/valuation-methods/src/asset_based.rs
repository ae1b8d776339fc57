//! Asset-based method: adjusted book value from a fixed tangible/intangible
//! split with a technology markup on the intangible slice.

use valuation_core::{
    FinancialInputs, MethodDetails, MethodResult, ValuationConfig, ValuationError, ValuationMethod,
    ValuationRange,
};

const TANGIBLE_SHARE: f64 = 0.70;
const INTANGIBLE_SHARE: f64 = 0.30;
const TECHNOLOGY_MARKUP_PCT: f64 = 0.20;
const RANGE_SPREAD: f64 = 0.20;

pub fn calculate(
    inputs: &FinancialInputs,
    _config: &ValuationConfig,
) -> Result<MethodResult, ValuationError> {
    let tangible_assets = inputs.total_assets * TANGIBLE_SHARE;
    let intangible_assets = inputs.total_assets * INTANGIBLE_SHARE;
    let technology_markup = intangible_assets * TECHNOLOGY_MARKUP_PCT;
    let adjusted_book_value = inputs.shareholders_equity + technology_markup;

    if adjusted_book_value <= 0.0 {
        return Err(ValuationError::MethodUnavailable {
            method: ValuationMethod::AssetBased,
            reason: "non-positive adjusted book value".to_string(),
        });
    }

    let range = ValuationRange {
        low: adjusted_book_value * (1.0 - RANGE_SPREAD),
        median: adjusted_book_value,
        high: adjusted_book_value * (1.0 + RANGE_SPREAD),
    };

    // Asset-heavy industries lean harder on book value.
    let (confidence, weight) = if inputs.industry == "Manufacturing" {
        (7.0, 0.25)
    } else {
        (5.0, 0.10)
    };

    Ok(MethodResult {
        method: ValuationMethod::AssetBased,
        range,
        confidence,
        weight,
        details: MethodDetails::AssetBased {
            tangible_assets,
            intangible_assets,
            technology_markup,
            adjusted_book_value,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use valuation_core::{normalize, RawFinancialData};

    fn inputs(industry: &str, assets: f64, equity: f64) -> FinancialInputs {
        normalize(&RawFinancialData {
            revenue: Some(10_000_000.0),
            total_assets: Some(assets),
            shareholders_equity: Some(equity),
            industry: Some(industry.to_string()),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn adjusted_book_value_math() {
        let inputs = inputs("SaaS", 10_000_000.0, 6_000_000.0);
        let result = calculate(&inputs, &ValuationConfig::default()).unwrap();

        // Intangibles 3M, markup 600k, adjusted book 6.6M.
        match &result.details {
            MethodDetails::AssetBased {
                tangible_assets,
                intangible_assets,
                technology_markup,
                adjusted_book_value,
            } => {
                assert_eq!(*tangible_assets, 7_000_000.0);
                assert_eq!(*intangible_assets, 3_000_000.0);
                assert_eq!(*technology_markup, 600_000.0);
                assert_eq!(*adjusted_book_value, 6_600_000.0);
            }
            other => panic!("unexpected details: {other:?}"),
        }
        assert!((result.range.low - 6_600_000.0 * 0.8).abs() < 1e-6);
        assert!((result.range.high - 6_600_000.0 * 1.2).abs() < 1e-6);
    }

    #[test]
    fn manufacturing_gets_higher_weight() {
        let config = ValuationConfig::default();
        let m = calculate(&inputs("Manufacturing", 10_000_000.0, 6_000_000.0), &config).unwrap();
        let s = calculate(&inputs("SaaS", 10_000_000.0, 6_000_000.0), &config).unwrap();
        assert!(m.weight > s.weight);
        assert!(m.confidence > s.confidence);
    }

    #[test]
    fn negative_equity_makes_method_unavailable() {
        let result = calculate(
            &inputs("SaaS", 10_000_000.0, -8_000_000.0),
            &ValuationConfig::default(),
        );
        assert!(matches!(
            result,
            Err(ValuationError::MethodUnavailable { .. })
        ));
    }
}
