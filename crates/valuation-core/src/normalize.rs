use crate::{FinancialInputs, RawFinancialData, ValuationError};

// Heuristic defaults, each a fixed ratio of revenue.
const DEFAULT_GROWTH_RATE: f64 = 25.0;
const GROSS_PROFIT_PCT: f64 = 0.75;
const EBITDA_PCT: f64 = 0.20;
const NET_INCOME_PCT: f64 = 0.10;
const TOTAL_ASSETS_PCT: f64 = 1.5;
const TOTAL_LIABILITIES_PCT: f64 = 0.5;
const OPERATING_CASH_FLOW_PCT: f64 = 0.15;
const FREE_CASH_FLOW_PCT: f64 = 0.12;

const DEFAULT_INDUSTRY: &str = "SaaS";
const DEFAULT_BUSINESS_MODEL: &str = "B2B SaaS";
const DEFAULT_MARKET_POSITION: &str = "Growing";

/// Resolve a partial financial record into a fully populated snapshot.
///
/// Revenue is the anchor every heuristic default derives from, so a record
/// without a usable revenue figure is rejected outright rather than letting
/// NaN flow through the method calculators.
pub fn normalize(raw: &RawFinancialData) -> Result<FinancialInputs, ValuationError> {
    let revenue = match raw.revenue {
        Some(r) if r.is_finite() && r > 0.0 => r,
        Some(r) => {
            return Err(ValuationError::InvalidInput(format!(
                "revenue must be a positive finite number, got {r}"
            )))
        }
        None => {
            return Err(ValuationError::InvalidInput(
                "revenue is required".to_string(),
            ))
        }
    };

    let gross_profit = raw.gross_profit.unwrap_or(revenue * GROSS_PROFIT_PCT);
    let ebitda = raw.ebitda.unwrap_or(revenue * EBITDA_PCT);

    let total_assets = raw.total_assets.unwrap_or(revenue * TOTAL_ASSETS_PCT);
    let total_liabilities = raw
        .total_liabilities
        .unwrap_or(revenue * TOTAL_LIABILITIES_PCT);
    let shareholders_equity = raw
        .shareholders_equity
        .unwrap_or(total_assets - total_liabilities);

    Ok(FinancialInputs {
        revenue,
        revenue_growth_rate: raw.revenue_growth_rate.unwrap_or(DEFAULT_GROWTH_RATE),
        gross_profit,
        gross_margin: gross_profit / revenue * 100.0,
        ebitda,
        ebitda_margin: ebitda / revenue * 100.0,
        net_income: raw.net_income.unwrap_or(revenue * NET_INCOME_PCT),
        total_assets,
        total_liabilities,
        shareholders_equity,
        operating_cash_flow: raw
            .operating_cash_flow
            .unwrap_or(revenue * OPERATING_CASH_FLOW_PCT),
        free_cash_flow: raw.free_cash_flow.unwrap_or(revenue * FREE_CASH_FLOW_PCT),
        industry: raw
            .industry
            .clone()
            .unwrap_or_else(|| DEFAULT_INDUSTRY.to_string()),
        business_model: raw
            .business_model
            .clone()
            .unwrap_or_else(|| DEFAULT_BUSINESS_MODEL.to_string()),
        market_position: raw
            .market_position
            .clone()
            .unwrap_or_else(|| DEFAULT_MARKET_POSITION.to_string()),
        employee_count: raw.employee_count,
        customer_count: raw.customer_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_with_revenue(revenue: f64) -> RawFinancialData {
        RawFinancialData {
            revenue: Some(revenue),
            ..Default::default()
        }
    }

    #[test]
    fn missing_revenue_is_rejected() {
        let err = normalize(&RawFinancialData::default()).unwrap_err();
        assert!(matches!(err, ValuationError::InvalidInput(_)));
    }

    #[test]
    fn non_positive_revenue_is_rejected() {
        assert!(normalize(&raw_with_revenue(0.0)).is_err());
        assert!(normalize(&raw_with_revenue(-5.0)).is_err());
        assert!(normalize(&raw_with_revenue(f64::NAN)).is_err());
    }

    #[test]
    fn defaults_derive_from_revenue() {
        let inputs = normalize(&raw_with_revenue(10_000_000.0)).unwrap();
        assert_eq!(inputs.gross_profit, 7_500_000.0);
        assert_eq!(inputs.gross_margin, 75.0);
        assert_eq!(inputs.ebitda, 2_000_000.0);
        assert_eq!(inputs.ebitda_margin, 20.0);
        assert_eq!(inputs.total_assets, 15_000_000.0);
        assert_eq!(inputs.total_liabilities, 5_000_000.0);
        assert_eq!(inputs.shareholders_equity, 10_000_000.0);
        assert_eq!(inputs.revenue_growth_rate, 25.0);
        assert_eq!(inputs.industry, "SaaS");
    }

    #[test]
    fn provided_fields_are_kept() {
        let raw = RawFinancialData {
            revenue: Some(5_000_000.0),
            ebitda: Some(1_000_000.0),
            industry: Some("Manufacturing".to_string()),
            employee_count: Some(42),
            ..Default::default()
        };
        let inputs = normalize(&raw).unwrap();
        assert_eq!(inputs.ebitda, 1_000_000.0);
        assert_eq!(inputs.ebitda_margin, 20.0);
        assert_eq!(inputs.industry, "Manufacturing");
        assert_eq!(inputs.employee_count, Some(42));
    }

    #[test]
    fn equity_defaults_to_assets_minus_liabilities() {
        let raw = RawFinancialData {
            revenue: Some(1_000_000.0),
            total_assets: Some(2_000_000.0),
            total_liabilities: Some(800_000.0),
            ..Default::default()
        };
        let inputs = normalize(&raw).unwrap();
        assert_eq!(inputs.shareholders_equity, 1_200_000.0);
    }
}
