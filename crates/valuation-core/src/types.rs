use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::stats::MultipleStatistics;

/// Loosely-typed financial record as supplied by the caller. Every field is
/// optional; [`crate::normalize`] resolves it into a full [`FinancialInputs`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawFinancialData {
    pub revenue: Option<f64>,
    pub revenue_growth_rate: Option<f64>,
    pub gross_profit: Option<f64>,
    pub ebitda: Option<f64>,
    pub net_income: Option<f64>,
    pub total_assets: Option<f64>,
    pub total_liabilities: Option<f64>,
    pub shareholders_equity: Option<f64>,
    pub operating_cash_flow: Option<f64>,
    pub free_cash_flow: Option<f64>,
    pub industry: Option<String>,
    pub business_model: Option<String>,
    pub market_position: Option<String>,
    pub employee_count: Option<u32>,
    pub customer_count: Option<u32>,
}

/// Fully populated snapshot of one company-period. All monetary fields share
/// one currency; margins and growth rates are percentages by convention.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialInputs {
    pub revenue: f64,
    pub revenue_growth_rate: f64,
    pub gross_profit: f64,
    pub gross_margin: f64,
    pub ebitda: f64,
    pub ebitda_margin: f64,
    pub net_income: f64,
    pub total_assets: f64,
    pub total_liabilities: f64,
    pub shareholders_equity: f64,
    pub operating_cash_flow: f64,
    pub free_cash_flow: f64,
    pub industry: String,
    pub business_model: String,
    pub market_position: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_count: Option<u32>,
}

/// Low / median / high bracket. Used both for valuations (currency units) and
/// for multiple bands (ratios).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValuationRange {
    pub low: f64,
    pub median: f64,
    pub high: f64,
}

impl ValuationRange {
    pub fn zero() -> Self {
        Self {
            low: 0.0,
            median: 0.0,
            high: 0.0,
        }
    }

    /// Scale all three bounds by a factor.
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            low: self.low * factor,
            median: self.median * factor,
            high: self.high * factor,
        }
    }
}

/// The six valuation methodologies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValuationMethod {
    RevenueMultiple,
    EbitdaMultiple,
    DiscountedCashFlow,
    AssetBased,
    ComparableCompany,
    PrecedentTransaction,
}

impl ValuationMethod {
    pub fn name(&self) -> &'static str {
        match self {
            ValuationMethod::RevenueMultiple => "Revenue Multiple",
            ValuationMethod::EbitdaMultiple => "EBITDA Multiple",
            ValuationMethod::DiscountedCashFlow => "Discounted Cash Flow",
            ValuationMethod::AssetBased => "Asset-Based",
            ValuationMethod::ComparableCompany => "Comparable Company",
            ValuationMethod::PrecedentTransaction => "Precedent Transaction",
        }
    }
}

impl std::fmt::Display for ValuationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One additive percentage adjustment applied to an industry multiple band.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultipleAdjustment {
    pub label: String,
    pub percent: f64,
}

/// One projected year in the DCF model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowYear {
    pub year: u32,
    pub growth_rate: f64,
    pub revenue: f64,
    pub ebitda: f64,
    pub free_cash_flow: f64,
    pub discounted_cash_flow: f64,
}

/// Method-specific payload attached to a [`MethodResult`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum MethodDetails {
    /// Revenue- and EBITDA-multiple methods.
    #[serde(rename_all = "camelCase")]
    MultipleBand {
        industry: String,
        industry_band: ValuationRange,
        adjustments: Vec<MultipleAdjustment>,
        adjusted_band: ValuationRange,
        /// Metric the band multiplies (revenue, or EBITDA floored at zero).
        basis: f64,
    },
    /// Discounted cash flow method.
    #[serde(rename_all = "camelCase")]
    DiscountedCashFlow {
        projections: Vec<CashFlowYear>,
        /// WACC as a percentage.
        wacc: f64,
        /// Terminal growth rate as a percentage (after clamping).
        terminal_growth: f64,
        terminal_value: f64,
        discounted_terminal_value: f64,
        enterprise_value: f64,
    },
    /// Asset-based method.
    #[serde(rename_all = "camelCase")]
    AssetBased {
        tangible_assets: f64,
        intangible_assets: f64,
        technology_markup: f64,
        adjusted_book_value: f64,
    },
    /// Comparable-company and precedent-transaction methods.
    #[serde(rename_all = "camelCase")]
    MarketSample {
        sample_size: usize,
        revenue_multiple_stats: Option<MultipleStatistics>,
        ebitda_multiple_stats: Option<MultipleStatistics>,
        /// Liquidity discount (negative) or control premium (positive), percent.
        median_adjustment_percent: f64,
        revenue_based_valuation: f64,
        ebitda_based_valuation: f64,
    },
}

/// Outcome of one valuation methodology.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodResult {
    pub method: ValuationMethod,
    pub range: ValuationRange,
    /// Fixed 1-10 scale.
    pub confidence: f64,
    /// Blending weight in [0,1]; the aggregator renormalizes over survivors.
    pub weight: f64,
    pub details: MethodDetails,
}

/// Multiples implied by the weighted valuation, back-solved proportionally
/// from each method's own median and adjusted multiple.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpliedMultiples {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revenue_multiple: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ebitda_multiple: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_value_multiple: Option<f64>,
}

/// Qualitative tier derived from the overall confidence score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataQuality {
    High,
    Medium,
    Low,
}

impl DataQuality {
    /// Tier breakpoints on the 1-10 confidence scale.
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence >= 7.0 {
            DataQuality::High
        } else if confidence >= 5.0 {
            DataQuality::Medium
        } else {
            DataQuality::Low
        }
    }
}

/// Blended result across the surviving methods.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationSummary {
    pub weighted_valuation: f64,
    /// low/high are the union of method lows/highs; median is the weighted
    /// valuation. The two halves follow different constructions by design.
    pub valuation_range: ValuationRange,
    pub implied_multiples: ImpliedMultiples,
    /// Weighted average on the 1-10 scale.
    pub overall_confidence: f64,
    /// Number of methods that contributed weight to the blend.
    pub methods_used: usize,
    pub data_quality: DataQuality,
}

/// One perturbed input variable with its documented valuation impact.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensitivityVariable {
    pub name: String,
    pub base_case: f64,
    pub low: f64,
    pub high: f64,
    /// Percentage valuation impact at the low end.
    pub impact_low_percent: f64,
    /// Percentage valuation impact at the high end.
    pub impact_high_percent: f64,
}

/// One named scenario. Probabilities are informational and need not sum to 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub name: String,
    pub assumptions: Vec<(String, String)>,
    pub valuation: f64,
    pub probability: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensitivityAnalysis {
    pub variables: Vec<SensitivityVariable>,
    pub scenarios: Vec<Scenario>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskCategory {
    Market,
    Financial,
    Operational,
    Regulatory,
    Technology,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskImpact {
    High,
    Medium,
    Low,
}

/// Qualitative risk flagged from threshold rules on the inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskFactor {
    pub category: RiskCategory,
    pub factor: String,
    pub description: String,
    pub impact: RiskImpact,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mitigation: Option<String>,
    /// Suggested valuation discount in percent (negative), where applicable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_adjustment: Option<f64>,
}

/// A publicly traded peer used by the comparable-company method.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicComparable {
    pub name: String,
    pub industry: String,
    pub revenue: f64,
    pub revenue_multiple: f64,
    pub ebitda_multiple: f64,
}

/// A historical deal used by the precedent-transaction method.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionComparable {
    pub target: String,
    pub acquirer: String,
    pub industry: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed: Option<String>,
    pub deal_value: f64,
    pub revenue_multiple: f64,
    pub ebitda_multiple: f64,
}

/// Identity record returned by the company directory collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyRecord {
    pub name: String,
    pub currency: String,
}

/// Top-level valuation report. Constructed once per run, immutable thereafter;
/// persistence, if any, belongs to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyValuation {
    pub company_id: String,
    pub company_name: String,
    pub currency: String,
    pub valuation_date: DateTime<Utc>,
    pub inputs: FinancialInputs,
    pub methods: Vec<MethodResult>,
    pub summary: ValuationSummary,
    pub comparables: Vec<PublicComparable>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensitivity: Option<SensitivityAnalysis>,
    pub risk_factors: Vec<RiskFactor>,
    pub warnings: Vec<String>,
    pub generated_at: DateTime<Utc>,
}
