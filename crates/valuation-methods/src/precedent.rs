//! Precedent-transaction method: historical deal multiples with a control
//! premium, since acquirers pay up for the whole company.

use valuation_core::{
    FinancialInputs, MethodResult, TransactionComparable, ValuationConfig, ValuationError,
    ValuationMethod,
};

use crate::market_sample::{from_multiples, SampleParams};

const CONFIDENCE: f64 = 6.0;
const WEIGHT: f64 = 0.10;

pub fn calculate(
    inputs: &FinancialInputs,
    sample: &[TransactionComparable],
    config: &ValuationConfig,
) -> Result<MethodResult, ValuationError> {
    let revenue_multiples: Vec<f64> = sample.iter().map(|t| t.revenue_multiple).collect();
    let ebitda_multiples: Vec<f64> = sample.iter().map(|t| t.ebitda_multiple).collect();

    Ok(from_multiples(
        inputs,
        &revenue_multiples,
        &ebitda_multiples,
        SampleParams {
            method: ValuationMethod::PrecedentTransaction,
            median_adjustment_percent: config.control_premium,
            confidence: CONFIDENCE,
            weight: WEIGHT,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use valuation_core::{normalize, MethodDetails, RawFinancialData};

    fn transaction(rev_x: f64, ebitda_x: f64) -> TransactionComparable {
        TransactionComparable {
            target: "Target".to_string(),
            acquirer: "Acquirer".to_string(),
            industry: "SaaS".to_string(),
            closed: None,
            deal_value: 50_000_000.0,
            revenue_multiple: rev_x,
            ebitda_multiple: ebitda_x,
        }
    }

    fn inputs() -> FinancialInputs {
        normalize(&RawFinancialData {
            revenue: Some(10_000_000.0),
            ebitda: Some(2_500_000.0),
            industry: Some("SaaS".to_string()),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn control_premium_applies_to_median_multiple() {
        let sample = vec![
            transaction(5.0, 18.0),
            transaction(7.0, 22.0),
            transaction(9.0, 28.0),
        ];
        let result = calculate(&inputs(), &sample, &ValuationConfig::default()).unwrap();

        match &result.details {
            MethodDetails::MarketSample {
                revenue_based_valuation,
                median_adjustment_percent,
                ..
            } => {
                assert_eq!(*median_adjustment_percent, 25.0);
                assert!((revenue_based_valuation - 10_000_000.0 * 7.0 * 1.25).abs() < 1e-6);
            }
            other => panic!("unexpected details: {other:?}"),
        }
        assert_eq!(result.confidence, 6.0);
        assert_eq!(result.weight, 0.10);
    }

    #[test]
    fn empty_sample_does_not_error() {
        let result = calculate(&inputs(), &[], &ValuationConfig::default()).unwrap();
        assert_eq!(result.weight, 0.0);
    }
}
