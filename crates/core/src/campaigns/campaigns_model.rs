//! Campaign domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{Result, ValidationError};

/// Lifecycle status of a fundraising campaign.
///
/// Transitions are driven by the surrounding application (scheduling,
/// fulfillment); the core only reads the status to gate payout
/// finalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Draft,
    Active,
    Closed,
    Fulfilled,
}

impl CampaignStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignStatus::Draft => "draft",
            CampaignStatus::Active => "active",
            CampaignStatus::Closed => "closed",
            CampaignStatus::Fulfilled => "fulfilled",
        }
    }

    /// Payouts may only be finalized once selling has ended.
    pub fn is_payable(&self) -> bool {
        matches!(self, CampaignStatus::Closed | CampaignStatus::Fulfilled)
    }
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CampaignStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "draft" => Ok(CampaignStatus::Draft),
            "active" => Ok(CampaignStatus::Active),
            "closed" => Ok(CampaignStatus::Closed),
            "fulfilled" => Ok(CampaignStatus::Fulfilled),
            _ => Err(format!("Unknown campaign status: {}", s)),
        }
    }
}

/// Agreed revenue split for a campaign.
///
/// Set at the pricing step and immutable once orders are placed:
/// changing it retroactively would desynchronize the fee snapshots
/// stored on historical orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignMarginConfig {
    pub florist_margin_percent: Decimal,
    pub organization_margin_percent: Decimal,
    pub platform_fee_percent: Decimal,
}

impl CampaignMarginConfig {
    pub fn total_margin_percent(&self) -> Decimal {
        self.florist_margin_percent + self.organization_margin_percent
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("floristMarginPercent", self.florist_margin_percent),
            ("organizationMarginPercent", self.organization_margin_percent),
            ("platformFeePercent", self.platform_fee_percent),
        ] {
            if value < Decimal::ZERO {
                return Err(ValidationError::NegativeAmount(name.to_string()).into());
            }
        }
        Ok(())
    }
}

/// Campaign snapshot as read by the payout service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: String,
    pub name: String,
    pub status: CampaignStatus,
    pub margin_config: CampaignMarginConfig,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
