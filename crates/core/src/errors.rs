//! Core error types for the BloomFundr platform.
//!
//! This module defines storage-agnostic error types. Storage- and
//! provider-specific errors (database drivers, payment APIs, etc.) are
//! converted to these types at the trait seams by their implementors.

use thiserror::Error;

use crate::payouts::PayoutError;
use crate::pricing::PricingError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the fundraising platform core.
///
/// Collaborator failures are wrapped in string form to keep this type
/// free of storage and payment-provider dependencies.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    #[error("Payout error: {0}")]
    Payout(#[from] PayoutError),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Funds transfer failed: {0}")]
    Transfer(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Missing configuration key: {0}")]
    MissingConfigKey(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Errors raised by the typed-input validation boundary.
///
/// Orders and fee percentages arrive from the surrounding application in
/// loosely typed form; everything is validated here before reaching the
/// pure calculators, which assume well-formed numeric inputs.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Field '{0}' must not be negative")]
    NegativeAmount(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse input payload: {0}")]
    PayloadParse(#[from] serde_json::Error),
}
