//! Discounted cash flow method.
//!
//! Five projected years of free cash flow with geometrically decaying growth,
//! a Gordon-growth terminal value, and a CAPM-style WACC. Equity value is
//! taken equal to enterprise value (net debt is not bridged), a documented
//! simplification.

use valuation_core::{
    CashFlowYear, FinancialInputs, MethodDetails, MethodResult, ValuationConfig, ValuationError,
    ValuationMethod, ValuationRange,
};

const CONFIDENCE: f64 = 6.0;
const WEIGHT: f64 = 0.20;

/// Minimum WACC-minus-terminal-growth gap, as a decimal. Terminal growth is
/// clamped so the perpetuity denominator stays at least this wide.
const MIN_TERMINAL_GAP: f64 = 0.02;

/// WACC in percent: risk-free rate plus beta times the market risk premium,
/// with a higher beta for SaaS businesses.
pub fn wacc_percent(industry: &str, config: &ValuationConfig) -> f64 {
    let beta = if industry == "SaaS" {
        config.dcf.saas_beta
    } else {
        config.dcf.default_beta
    };
    config.dcf.risk_free_rate + beta * config.dcf.market_risk_premium
}

pub fn calculate(
    inputs: &FinancialInputs,
    config: &ValuationConfig,
) -> Result<MethodResult, ValuationError> {
    let assumptions = &config.dcf;
    let wacc = wacc_percent(&inputs.industry, config) / 100.0;

    if wacc <= MIN_TERMINAL_GAP {
        return Err(ValuationError::MethodUnavailable {
            method: ValuationMethod::DiscountedCashFlow,
            reason: format!("WACC {:.2}% leaves no room for terminal growth", wacc * 100.0),
        });
    }

    // Terminal growth: min(cap, 30% of base growth), then clamped below WACC.
    let terminal_growth = (assumptions.terminal_growth_cap / 100.0)
        .min(0.3 * inputs.revenue_growth_rate / 100.0)
        .min(wacc - MIN_TERMINAL_GAP);

    let mut projections = Vec::with_capacity(assumptions.projection_years as usize);
    let mut revenue = inputs.revenue;
    let mut discounted_sum = 0.0;
    let mut final_fcf = 0.0;

    for year in 1..=assumptions.projection_years {
        let growth_rate = inputs.revenue_growth_rate * assumptions.growth_decay.powi(year as i32);
        revenue *= 1.0 + growth_rate / 100.0;

        let ebitda = revenue * inputs.ebitda_margin / 100.0;
        let taxes = ebitda * assumptions.tax_rate;
        let capex = revenue * assumptions.capex_pct_of_revenue;
        let working_capital_change =
            (revenue - inputs.revenue) * assumptions.working_capital_pct_of_delta;
        let free_cash_flow = ebitda - taxes - capex - working_capital_change;

        let discounted_cash_flow = free_cash_flow / (1.0 + wacc).powi(year as i32);
        discounted_sum += discounted_cash_flow;
        final_fcf = free_cash_flow;

        projections.push(CashFlowYear {
            year,
            growth_rate,
            revenue,
            ebitda,
            free_cash_flow,
            discounted_cash_flow,
        });
    }

    let terminal_value = final_fcf * (1.0 + terminal_growth) / (wacc - terminal_growth);
    let discounted_terminal_value =
        terminal_value / (1.0 + wacc).powi(assumptions.projection_years as i32);

    let enterprise_value = discounted_sum + discounted_terminal_value;
    if enterprise_value <= 0.0 {
        return Err(ValuationError::MethodUnavailable {
            method: ValuationMethod::DiscountedCashFlow,
            reason: "projected cash flows give a non-positive enterprise value".to_string(),
        });
    }

    // Equity value == enterprise value here; the net debt bridge is out of scope.
    let spread = assumptions.range_spread;
    let range = ValuationRange {
        low: enterprise_value * (1.0 - spread),
        median: enterprise_value,
        high: enterprise_value * (1.0 + spread),
    };

    Ok(MethodResult {
        method: ValuationMethod::DiscountedCashFlow,
        range,
        confidence: CONFIDENCE,
        weight: WEIGHT,
        details: MethodDetails::DiscountedCashFlow {
            projections,
            wacc: wacc * 100.0,
            terminal_growth: terminal_growth * 100.0,
            terminal_value,
            discounted_terminal_value,
            enterprise_value,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use valuation_core::{normalize, RawFinancialData};

    fn inputs(industry: &str, growth: f64, ebitda_margin_pct: f64) -> FinancialInputs {
        let revenue = 20_000_000.0;
        normalize(&RawFinancialData {
            revenue: Some(revenue),
            revenue_growth_rate: Some(growth),
            ebitda: Some(revenue * ebitda_margin_pct / 100.0),
            industry: Some(industry.to_string()),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn wacc_for_saas_and_other_industries() {
        let config = ValuationConfig::default();
        assert!((wacc_percent("SaaS", &config) - 13.4).abs() < 1e-12);
        assert!((wacc_percent("Manufacturing", &config) - 11.0).abs() < 1e-12);
    }

    #[test]
    fn zero_growth_holds_ebitda_constant() {
        let result = calculate(&inputs("SaaS", 0.0, 25.0), &ValuationConfig::default()).unwrap();
        let projections = match &result.details {
            MethodDetails::DiscountedCashFlow { projections, .. } => projections,
            other => panic!("unexpected details: {other:?}"),
        };
        assert_eq!(projections.len(), 5);
        let base_ebitda = 20_000_000.0 * 0.25;
        for p in projections {
            assert!((p.ebitda - base_ebitda).abs() < 1e-6);
            assert_eq!(p.growth_rate, 0.0);
        }
    }

    #[test]
    fn growth_decays_geometrically() {
        let result = calculate(&inputs("SaaS", 40.0, 25.0), &ValuationConfig::default()).unwrap();
        let projections = match &result.details {
            MethodDetails::DiscountedCashFlow { projections, .. } => projections,
            other => panic!("unexpected details: {other:?}"),
        };
        assert!((projections[0].growth_rate - 40.0 * 0.85).abs() < 1e-12);
        for w in projections.windows(2) {
            assert!((w[1].growth_rate - w[0].growth_rate * 0.85).abs() < 1e-9);
        }
    }

    #[test]
    fn terminal_growth_takes_the_smaller_of_cap_and_growth_fraction() {
        // Growth 5%: 0.3 * 5 = 1.5% < 3% cap.
        let result = calculate(&inputs("SaaS", 5.0, 25.0), &ValuationConfig::default()).unwrap();
        match &result.details {
            MethodDetails::DiscountedCashFlow {
                terminal_growth, ..
            } => assert!((terminal_growth - 1.5).abs() < 1e-9),
            other => panic!("unexpected details: {other:?}"),
        }

        // Growth 40%: capped at 3%.
        let result = calculate(&inputs("SaaS", 40.0, 25.0), &ValuationConfig::default()).unwrap();
        match &result.details {
            MethodDetails::DiscountedCashFlow {
                terminal_growth, ..
            } => assert!((terminal_growth - 3.0).abs() < 1e-9),
            other => panic!("unexpected details: {other:?}"),
        }
    }

    #[test]
    fn narrow_wacc_clamps_terminal_growth_below_it() {
        let mut config = ValuationConfig::default();
        // WACC = 2% + 1.0 * 2% = 4%; unclamped terminal growth would be 3%.
        config.dcf.risk_free_rate = 2.0;
        config.dcf.market_risk_premium = 2.0;

        let result = calculate(&inputs("Manufacturing", 40.0, 25.0), &config).unwrap();
        match &result.details {
            MethodDetails::DiscountedCashFlow {
                wacc,
                terminal_growth,
                ..
            } => {
                assert!((wacc - 4.0).abs() < 1e-9);
                assert!((terminal_growth - 2.0).abs() < 1e-9);
            }
            other => panic!("unexpected details: {other:?}"),
        }
    }

    #[test]
    fn negative_margin_makes_method_unavailable() {
        let result = calculate(&inputs("SaaS", 10.0, -20.0), &ValuationConfig::default());
        assert!(matches!(
            result,
            Err(ValuationError::MethodUnavailable { .. })
        ));
    }

    #[test]
    fn range_brackets_enterprise_value() {
        let result = calculate(&inputs("SaaS", 25.0, 20.0), &ValuationConfig::default()).unwrap();
        assert!(result.range.low < result.range.median);
        assert!(result.range.median < result.range.high);
        assert!((result.range.low / result.range.median - 0.8).abs() < 1e-12);
        assert!((result.range.high / result.range.median - 1.2).abs() < 1e-12);
    }
}
