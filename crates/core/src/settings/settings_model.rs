//! Fee configuration domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PLATFORM_FEE_PERCENT, DEFAULT_PROCESSING_FEE_PERCENT};
use crate::errors::{Result, ValidationError};

/// Process-wide fee configuration.
///
/// Every pricing and payout computation receives this explicitly; the
/// percentages are never hardcoded at call sites. Values are resolved by
/// the settings service from stored overrides, falling back to the
/// compiled-in defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeSettings {
    /// Percentage of the retail price retained by the platform
    pub platform_fee_percent: Decimal,
    /// Percentage of the retail price approximating payment-processor costs
    pub processing_fee_percent: Decimal,
}

impl Default for FeeSettings {
    fn default() -> Self {
        FeeSettings {
            platform_fee_percent: DEFAULT_PLATFORM_FEE_PERCENT,
            processing_fee_percent: DEFAULT_PROCESSING_FEE_PERCENT,
        }
    }
}

impl FeeSettings {
    pub fn new(platform_fee_percent: Decimal, processing_fee_percent: Decimal) -> Result<Self> {
        let settings = FeeSettings {
            platform_fee_percent,
            processing_fee_percent,
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Rejects negative percentages and fee percentages at or above 100.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("platformFeePercent", self.platform_fee_percent),
            ("processingFeePercent", self.processing_fee_percent),
        ] {
            if value < Decimal::ZERO {
                return Err(ValidationError::NegativeAmount(name.to_string()).into());
            }
            if value >= Decimal::ONE_HUNDRED {
                return Err(ValidationError::InvalidInput(format!(
                    "{} must be below 100, got {}",
                    name, value
                ))
                .into());
            }
        }
        Ok(())
    }

    /// Combined fee percentage deducted from the retail price before any
    /// organization profit.
    pub fn combined_fee_percent(&self) -> Decimal {
        self.platform_fee_percent + self.processing_fee_percent
    }
}

/// Input model for updating fee settings. Unset fields keep their
/// current value.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct FeeSettingsUpdate {
    pub platform_fee_percent: Option<Decimal>,
    pub processing_fee_percent: Option<Decimal>,
}
