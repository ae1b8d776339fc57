use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::types::ValuationRange;

/// Revenue and EBITDA multiple bands for one industry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndustryMultiples {
    pub revenue: ValuationRange,
    pub ebitda: ValuationRange,
}

/// Fixed assumptions for the discounted cash flow model. Rates are percentages
/// unless named otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DcfAssumptions {
    pub projection_years: u32,
    pub risk_free_rate: f64,
    pub market_risk_premium: f64,
    pub saas_beta: f64,
    pub default_beta: f64,
    /// Fraction of EBITDA.
    pub tax_rate: f64,
    /// Fraction of revenue.
    pub capex_pct_of_revenue: f64,
    /// Fraction of the revenue delta versus the base year.
    pub working_capital_pct_of_delta: f64,
    /// Geometric decay applied to the growth rate each projected year.
    pub growth_decay: f64,
    /// Terminal growth cap in percent; also capped at 30% of base growth.
    pub terminal_growth_cap: f64,
    /// Half-width of the equity-value bracket (0.2 gives x0.8 / x1.2).
    pub range_spread: f64,
}

impl Default for DcfAssumptions {
    fn default() -> Self {
        Self {
            projection_years: 5,
            risk_free_rate: 3.0,
            market_risk_premium: 8.0,
            saas_beta: 1.3,
            default_beta: 1.0,
            tax_rate: 0.25,
            capex_pct_of_revenue: 0.03,
            working_capital_pct_of_delta: 0.05,
            growth_decay: 0.85,
            terminal_growth_cap: 3.0,
            range_spread: 0.2,
        }
    }
}

/// Where scenario valuations are read from. `RevenueMethodRange` preserves the
/// historical coupling to the revenue-multiple method's range;
/// `WeightedAggregate` reads the blended summary range instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioSource {
    RevenueMethodRange,
    WeightedAggregate,
}

/// Static configuration for one valuation run. The engine is a pure function
/// of (inputs, config, data source); nothing here is global state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationConfig {
    pub industry_multiples: HashMap<String, IndustryMultiples>,
    /// Band used when the input industry has no table entry.
    pub fallback_industry: String,
    pub dcf: DcfAssumptions,
    /// Percentage markdown on the comparable-company median multiple.
    pub liquidity_discount: f64,
    /// Percentage uplift on the precedent-transaction median multiple.
    pub control_premium: f64,
    pub scenario_source: ScenarioSource,
}

impl ValuationConfig {
    /// Band lookup with fallback to the configured default industry.
    pub fn multiples_for(&self, industry: &str) -> &IndustryMultiples {
        self.industry_multiples
            .get(industry)
            .or_else(|| self.industry_multiples.get(&self.fallback_industry))
            .unwrap_or(&FALLBACK_MULTIPLES)
    }
}

// Last-resort band if the config table was built without the fallback industry.
static FALLBACK_MULTIPLES: IndustryMultiples = IndustryMultiples {
    revenue: ValuationRange {
        low: 3.0,
        median: 6.0,
        high: 12.0,
    },
    ebitda: ValuationRange {
        low: 12.0,
        median: 20.0,
        high: 35.0,
    },
};

impl Default for ValuationConfig {
    fn default() -> Self {
        let band = |l: f64, m: f64, h: f64| ValuationRange {
            low: l,
            median: m,
            high: h,
        };

        let mut industry_multiples = HashMap::new();
        industry_multiples.insert(
            "SaaS".to_string(),
            IndustryMultiples {
                revenue: band(4.0, 8.0, 15.0),
                ebitda: band(15.0, 25.0, 40.0),
            },
        );
        industry_multiples.insert(
            "Technology".to_string(),
            IndustryMultiples {
                revenue: band(3.0, 6.0, 12.0),
                ebitda: band(12.0, 20.0, 35.0),
            },
        );
        industry_multiples.insert(
            "Fintech".to_string(),
            IndustryMultiples {
                revenue: band(3.0, 7.0, 14.0),
                ebitda: band(14.0, 22.0, 38.0),
            },
        );
        industry_multiples.insert(
            "E-commerce".to_string(),
            IndustryMultiples {
                revenue: band(1.0, 2.5, 5.0),
                ebitda: band(8.0, 14.0, 22.0),
            },
        );
        industry_multiples.insert(
            "Healthcare".to_string(),
            IndustryMultiples {
                revenue: band(2.0, 4.0, 8.0),
                ebitda: band(10.0, 16.0, 26.0),
            },
        );
        industry_multiples.insert(
            "Manufacturing".to_string(),
            IndustryMultiples {
                revenue: band(0.5, 1.2, 2.5),
                ebitda: band(6.0, 9.0, 14.0),
            },
        );
        industry_multiples.insert(
            "Services".to_string(),
            IndustryMultiples {
                revenue: band(1.0, 2.0, 4.0),
                ebitda: band(7.0, 11.0, 18.0),
            },
        );

        Self {
            industry_multiples,
            fallback_industry: "Technology".to_string(),
            dcf: DcfAssumptions::default(),
            liquidity_discount: 25.0,
            control_premium: 25.0,
            scenario_source: ScenarioSource::RevenueMethodRange,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_industry_falls_back_to_technology() {
        let config = ValuationConfig::default();
        let band = config.multiples_for("Underwater Basket Weaving");
        assert_eq!(band.revenue.median, 6.0);
    }

    #[test]
    fn saas_revenue_band() {
        let config = ValuationConfig::default();
        let band = config.multiples_for("SaaS");
        assert_eq!(band.revenue.low, 4.0);
        assert_eq!(band.revenue.median, 8.0);
        assert_eq!(band.revenue.high, 15.0);
    }
}
