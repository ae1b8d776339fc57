//! Sensitivity analysis: fixed named variables plus three scenarios.
//!
//! Scenario valuations are read from the revenue-multiple method's range by
//! default (the historical behavior, kept behind `ScenarioSource`), not from a
//! re-run of the full aggregation — perturbing a variable here does not
//! recompute the blend.

use valuation_core::{
    FinancialInputs, MethodDetails, MethodResult, Scenario, ScenarioSource, SensitivityAnalysis,
    SensitivityVariable, ValuationConfig, ValuationMethod, ValuationRange, ValuationSummary,
};

pub fn analyze(
    inputs: &FinancialInputs,
    methods: &[MethodResult],
    summary: &ValuationSummary,
    config: &ValuationConfig,
) -> SensitivityAnalysis {
    let revenue_method = methods
        .iter()
        .find(|m| m.method == ValuationMethod::RevenueMultiple);

    let mut variables = vec![
        SensitivityVariable {
            name: "Revenue Growth Rate".to_string(),
            base_case: inputs.revenue_growth_rate,
            low: inputs.revenue_growth_rate - 10.0,
            high: inputs.revenue_growth_rate + 10.0,
            impact_low_percent: -15.0,
            impact_high_percent: 20.0,
        },
        SensitivityVariable {
            name: "EBITDA Margin".to_string(),
            base_case: inputs.ebitda_margin,
            low: inputs.ebitda_margin - 5.0,
            high: inputs.ebitda_margin + 5.0,
            impact_low_percent: -10.0,
            impact_high_percent: 12.0,
        },
    ];

    // The multiple variable spans the adjusted band; its impact is the band
    // spread relative to the median.
    if let Some(MethodDetails::MultipleBand { adjusted_band, .. }) =
        revenue_method.map(|m| &m.details)
    {
        if adjusted_band.median > 0.0 {
            variables.push(SensitivityVariable {
                name: "Revenue Multiple".to_string(),
                base_case: adjusted_band.median,
                low: adjusted_band.low,
                high: adjusted_band.high,
                impact_low_percent: (adjusted_band.low / adjusted_band.median - 1.0) * 100.0,
                impact_high_percent: (adjusted_band.high / adjusted_band.median - 1.0) * 100.0,
            });
        }
    }

    let scenario_range = match config.scenario_source {
        ScenarioSource::RevenueMethodRange => revenue_method
            .map(|m| m.range)
            .unwrap_or(summary.valuation_range),
        ScenarioSource::WeightedAggregate => summary.valuation_range,
    };

    SensitivityAnalysis {
        variables,
        scenarios: scenarios(inputs, scenario_range),
    }
}

fn scenarios(inputs: &FinancialInputs, range: ValuationRange) -> Vec<Scenario> {
    let pair = |k: &str, v: String| (k.to_string(), v);
    vec![
        Scenario {
            name: "Optimistic".to_string(),
            assumptions: vec![
                pair(
                    "revenueGrowthRate",
                    format!("{:.0}% (above plan)", inputs.revenue_growth_rate + 10.0),
                ),
                pair("exitMultiple", "top of industry band".to_string()),
            ],
            valuation: range.high,
            probability: 0.25,
        },
        Scenario {
            name: "Base".to_string(),
            assumptions: vec![
                pair(
                    "revenueGrowthRate",
                    format!("{:.0}% (as planned)", inputs.revenue_growth_rate),
                ),
                pair("exitMultiple", "median of industry band".to_string()),
            ],
            valuation: range.median,
            probability: 0.50,
        },
        Scenario {
            name: "Pessimistic".to_string(),
            assumptions: vec![
                pair(
                    "revenueGrowthRate",
                    format!("{:.0}% (below plan)", inputs.revenue_growth_rate - 10.0),
                ),
                pair("exitMultiple", "bottom of industry band".to_string()),
            ],
            valuation: range.low,
            probability: 0.25,
        },
    ]
}
