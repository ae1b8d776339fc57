use async_trait::async_trait;

use crate::{CompanyRecord, PublicComparable, TransactionComparable, ValuationError};

/// Pluggable source of market comparables. Production implementations may call
/// out over the network; the engine treats every call as fallible and falls
/// back to an empty sample.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    async fn comparables(&self, industry: &str) -> Result<Vec<PublicComparable>, ValuationError>;

    async fn transactions(
        &self,
        industry: &str,
    ) -> Result<Vec<TransactionComparable>, ValuationError>;
}

/// Company identity lookup collaborator.
#[async_trait]
pub trait CompanyDirectory: Send + Sync {
    async fn company(&self, company_id: &str) -> Result<CompanyRecord, ValuationError>;
}
