//! Qualitative risk identification: a fixed, ordered rule set over input
//! thresholds. An empty list means no rule tripped, not an error.

use valuation_core::{FinancialInputs, RiskCategory, RiskFactor, RiskImpact};

const LOW_PROFITABILITY_MARGIN: f64 = 10.0;
const SLOW_GROWTH_RATE: f64 = 5.0;
const KEY_PERSON_HEADCOUNT: u32 = 50;

pub fn identify(inputs: &FinancialInputs) -> Vec<RiskFactor> {
    let mut factors = Vec::new();

    if inputs.ebitda_margin < LOW_PROFITABILITY_MARGIN {
        factors.push(RiskFactor {
            category: RiskCategory::Financial,
            factor: "Low Profitability".to_string(),
            description: format!(
                "EBITDA margin of {:.1}% is below the {LOW_PROFITABILITY_MARGIN:.0}% threshold",
                inputs.ebitda_margin
            ),
            impact: RiskImpact::High,
            mitigation: Some(
                "Review cost structure and pricing to restore operating leverage".to_string(),
            ),
            discount_adjustment: Some(-15.0),
        });
    }

    if inputs.revenue_growth_rate < SLOW_GROWTH_RATE {
        factors.push(RiskFactor {
            category: RiskCategory::Market,
            factor: "Slow Growth".to_string(),
            description: format!(
                "Revenue growth of {:.1}% trails the {SLOW_GROWTH_RATE:.0}% threshold",
                inputs.revenue_growth_rate
            ),
            impact: RiskImpact::Medium,
            mitigation: None,
            discount_adjustment: None,
        });
    }

    if let Some(employees) = inputs.employee_count {
        if employees < KEY_PERSON_HEADCOUNT {
            factors.push(RiskFactor {
                category: RiskCategory::Operational,
                factor: "Key Person Risk".to_string(),
                description: format!(
                    "{employees} employees concentrates knowledge in few individuals"
                ),
                impact: RiskImpact::Medium,
                mitigation: Some(
                    "Document critical processes and broaden ownership of key accounts"
                        .to_string(),
                ),
                discount_adjustment: None,
            });
        }
    }

    factors
}
