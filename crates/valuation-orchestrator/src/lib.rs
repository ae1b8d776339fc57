//! Valuation orchestrator.
//!
//! Sequences one valuation run: normalize the raw record, resolve company
//! identity, fetch market samples concurrently, run the six method
//! calculators, aggregate the survivors, then derive sensitivity and risk.
//! A single method's recoverable failure never fails the run; it is excluded
//! from the blend and surfaced in the report's warnings.

use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{error::Elapsed, timeout};

use valuation_core::{
    normalize, CompanyDirectory, CompanyValuation, MarketDataProvider, PublicComparable,
    RawFinancialData, TransactionComparable, ValuationConfig, ValuationError,
};
use valuation_methods::{asset_based, comparable, dcf, ebitda, precedent, revenue};

pub mod risk;
pub mod sensitivity;
pub mod summary;


const MARKET_DATA_TIMEOUT: Duration = Duration::from_secs(5);

/// Per-run flags. Both default to on.
#[derive(Debug, Clone, Copy)]
pub struct ValuationOptions {
    pub include_comparables: bool,
    pub include_sensitivity: bool,
}

impl Default for ValuationOptions {
    fn default() -> Self {
        Self {
            include_comparables: true,
            include_sensitivity: true,
        }
    }
}

pub struct ValuationOrchestrator {
    directory: Arc<dyn CompanyDirectory>,
    market_data: Arc<dyn MarketDataProvider>,
    config: ValuationConfig,
}

impl ValuationOrchestrator {
    pub fn new(directory: Arc<dyn CompanyDirectory>, market_data: Arc<dyn MarketDataProvider>) -> Self {
        Self {
            directory,
            market_data,
            config: ValuationConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ValuationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ValuationConfig {
        &self.config
    }

    /// Run a full valuation for one company.
    ///
    /// Fatal errors are limited to an unusable input record and an unknown
    /// company id; everything else degrades into warnings on the report.
    pub async fn run(
        &self,
        company_id: &str,
        raw: &RawFinancialData,
        options: ValuationOptions,
    ) -> Result<CompanyValuation, ValuationError> {
        tracing::info!("Starting valuation for {}", company_id);

        let inputs = normalize(raw)?;
        let company = self.directory.company(company_id).await?;

        let mut warnings = Vec::new();
        let (comparables, transactions) = if options.include_comparables {
            self.fetch_market_samples(&inputs.industry, &mut warnings)
                .await
        } else {
            (Vec::new(), Vec::new())
        };

        // The six branches are independent; aggregation waits for all of them.
        let attempts = [
            revenue::calculate(&inputs, &self.config),
            ebitda::calculate(&inputs, &self.config),
            dcf::calculate(&inputs, &self.config),
            asset_based::calculate(&inputs, &self.config),
            comparable::calculate(&inputs, &comparables, &self.config),
            precedent::calculate(&inputs, &transactions, &self.config),
        ];

        let mut methods = Vec::with_capacity(attempts.len());
        for attempt in attempts {
            match attempt {
                Ok(result) => methods.push(result),
                Err(e) => {
                    tracing::warn!("Excluding method from blend: {}", e);
                    warnings.push(e.to_string());
                }
            }
        }

        let summary = summary::aggregate(&inputs, &methods);
        let sensitivity = options
            .include_sensitivity
            .then(|| sensitivity::analyze(&inputs, &methods, &summary, &self.config));
        let risk_factors = risk::identify(&inputs);

        tracing::info!(
            "Valuation for {} complete: {} methods, weighted valuation {:.0}",
            company_id,
            summary.methods_used,
            summary.weighted_valuation
        );

        let now = Utc::now();
        Ok(CompanyValuation {
            company_id: company_id.to_string(),
            company_name: company.name,
            currency: company.currency,
            valuation_date: now,
            inputs,
            methods,
            summary,
            comparables,
            sensitivity,
            risk_factors,
            warnings,
            generated_at: now,
        })
    }

    /// Fetch both market samples concurrently under a timeout. Failure or
    /// timeout falls back to an empty sample with a warning; the market-based
    /// methods then return their zero-weight sentinel.
    async fn fetch_market_samples(
        &self,
        industry: &str,
        warnings: &mut Vec<String>,
    ) -> (Vec<PublicComparable>, Vec<TransactionComparable>) {
        let (comps, deals) = tokio::join!(
            timeout(MARKET_DATA_TIMEOUT, self.market_data.comparables(industry)),
            timeout(MARKET_DATA_TIMEOUT, self.market_data.transactions(industry)),
        );

        (
            recover_sample("comparable company data", comps, warnings),
            recover_sample("precedent transaction data", deals, warnings),
        )
    }
}

fn recover_sample<T>(
    label: &str,
    outcome: Result<Result<Vec<T>, ValuationError>, Elapsed>,
    warnings: &mut Vec<String>,
) -> Vec<T> {
    match outcome {
        Ok(Ok(sample)) => sample,
        Ok(Err(e)) => {
            tracing::warn!("Failed to fetch {}: {}", label, e);
            warnings.push(format!("{label} unavailable, continuing without: {e}"));
            Vec::new()
        }
        Err(_) => {
            tracing::warn!("Timed out fetching {}", label);
            warnings.push(format!("{label} fetch timed out, continuing without"));
            Vec::new()
        }
    }
}
