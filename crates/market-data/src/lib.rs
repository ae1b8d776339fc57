//! Static market-data provider.
//!
//! Curated sample comparables and precedent transactions per industry, behind
//! the [`MarketDataProvider`] seam so production callers can swap in a live
//! source without touching the engine.

use async_trait::async_trait;
use valuation_core::{
    MarketDataProvider, PublicComparable, TransactionComparable, ValuationError,
};

#[derive(Debug, Clone, Default)]
pub struct StaticMarketData;

impl StaticMarketData {
    pub fn new() -> Self {
        Self
    }
}

fn comp(name: &str, industry: &str, revenue: f64, rev_x: f64, ebitda_x: f64) -> PublicComparable {
    PublicComparable {
        name: name.to_string(),
        industry: industry.to_string(),
        revenue,
        revenue_multiple: rev_x,
        ebitda_multiple: ebitda_x,
    }
}

fn deal(
    target: &str,
    acquirer: &str,
    industry: &str,
    closed: &str,
    deal_value: f64,
    rev_x: f64,
    ebitda_x: f64,
) -> TransactionComparable {
    TransactionComparable {
        target: target.to_string(),
        acquirer: acquirer.to_string(),
        industry: industry.to_string(),
        closed: Some(closed.to_string()),
        deal_value,
        revenue_multiple: rev_x,
        ebitda_multiple: ebitda_x,
    }
}

#[async_trait]
impl MarketDataProvider for StaticMarketData {
    async fn comparables(&self, industry: &str) -> Result<Vec<PublicComparable>, ValuationError> {
        let sample = match industry {
            "SaaS" => vec![
                comp("NordCloud Systems", "SaaS", 180_000_000.0, 9.2, 32.0),
                comp("Fakturio", "SaaS", 42_000_000.0, 7.5, 28.5),
                comp("LedgerWorks", "SaaS", 95_000_000.0, 8.8, 30.2),
                comp("Planhold", "SaaS", 23_000_000.0, 6.1, 24.0),
                comp("Teamflow Labs", "SaaS", 310_000_000.0, 10.4, 36.8),
            ],
            "Manufacturing" => vec![
                comp("Steelhart Industries", "Manufacturing", 820_000_000.0, 1.3, 9.5),
                comp("Nordpress Group", "Manufacturing", 460_000_000.0, 1.1, 8.2),
                comp("Valmek Components", "Manufacturing", 150_000_000.0, 0.9, 7.4),
                comp("Ferrodyn AB", "Manufacturing", 275_000_000.0, 1.4, 10.1),
            ],
            "E-commerce" => vec![
                comp("Cartline", "E-commerce", 390_000_000.0, 2.8, 15.5),
                comp("Boxpost Retail", "E-commerce", 120_000_000.0, 2.1, 12.8),
                comp("Shopnordic", "E-commerce", 66_000_000.0, 1.8, 11.0),
            ],
            _ => vec![
                comp("Graviton Software", "Technology", 240_000_000.0, 6.8, 22.5),
                comp("Bitfalk Technologies", "Technology", 88_000_000.0, 5.5, 19.0),
                comp("Cloudmara", "Technology", 510_000_000.0, 7.9, 26.4),
                comp("Vektor Data", "Technology", 34_000_000.0, 4.6, 16.2),
            ],
        };
        Ok(sample)
    }

    async fn transactions(
        &self,
        industry: &str,
    ) -> Result<Vec<TransactionComparable>, ValuationError> {
        let sample = match industry {
            "SaaS" => vec![
                deal("Invoicely Nordics", "Summit Partners", "SaaS", "2024-03", 145_000_000.0, 8.4, 29.0),
                deal("Kontor Cloud", "Visma", "SaaS", "2023-11", 520_000_000.0, 9.6, 33.5),
                deal("Paylane", "Nets Group", "SaaS", "2023-06", 88_000_000.0, 7.2, 25.8),
                deal("Bokio Sync", "Fortnox", "SaaS", "2024-08", 62_000_000.0, 6.9, 23.4),
            ],
            "Manufacturing" => vec![
                deal("Maskinverk Oy", "Atlas Industrial", "Manufacturing", "2023-09", 310_000_000.0, 1.5, 10.8),
                deal("Plåtpartner", "Indutrade", "Manufacturing", "2024-02", 95_000_000.0, 1.2, 9.0),
            ],
            _ => vec![
                deal("Datagrund", "Thoma Bravo", "Technology", "2024-01", 680_000_000.0, 7.4, 24.6),
                deal("Nilsson Software", "Vitec", "Technology", "2023-05", 120_000_000.0, 5.9, 20.3),
                deal("Omnikod", "Monterro", "Technology", "2024-06", 45_000_000.0, 5.1, 18.0),
            ],
        };
        Ok(sample)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn saas_sample_is_nonempty_and_tagged() {
        let provider = StaticMarketData::new();
        let comps = provider.comparables("SaaS").await.unwrap();
        assert!(comps.len() >= 3);
        assert!(comps.iter().all(|c| c.industry == "SaaS"));
        assert!(comps.iter().all(|c| c.revenue_multiple > 0.0));
    }

    #[tokio::test]
    async fn unknown_industry_gets_technology_sample() {
        let provider = StaticMarketData::new();
        let comps = provider.comparables("Floristry").await.unwrap();
        assert!(!comps.is_empty());
        assert!(comps.iter().all(|c| c.industry == "Technology"));

        let deals = provider.transactions("Floristry").await.unwrap();
        assert!(!deals.is_empty());
    }
}
