use thiserror::Error;

use crate::types::ValuationMethod;

#[derive(Error, Debug)]
pub enum ValuationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{method} method unavailable: {reason}")]
    MethodUnavailable {
        method: ValuationMethod,
        reason: String,
    },

    #[error("Data source error: {0}")]
    DataSource(String),

    #[error("Company not found: {0}")]
    CompanyNotFound(String),
}
