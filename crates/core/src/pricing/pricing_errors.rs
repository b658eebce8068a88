//! Pricing error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PricingError {
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    #[error("Invalid percentage: {0}")]
    InvalidPercentage(String),
}
