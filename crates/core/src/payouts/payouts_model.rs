//! Payout domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::utils::decimal_serde::money_serde;

/// Party on the receiving end of a campaign payout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayoutParty {
    Florist,
    Organization,
}

impl PayoutParty {
    pub fn as_str(&self) -> &'static str {
        match self {
            PayoutParty::Florist => "florist",
            PayoutParty::Organization => "organization",
        }
    }
}

impl fmt::Display for PayoutParty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PayoutParty {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "florist" => Ok(PayoutParty::Florist),
            "organization" => Ok(PayoutParty::Organization),
            _ => Err(format!("Unknown payout party: {}", s)),
        }
    }
}

/// Lifecycle status of a payout ledger entry.
///
/// Entries start `Pending`; transitions are driven by funds-transfer
/// outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayoutStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}

impl PayoutStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PayoutStatus::Pending => "pending",
            PayoutStatus::Processing => "processing",
            PayoutStatus::Completed => "completed",
            PayoutStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for PayoutStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PayoutStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "pending" => Ok(PayoutStatus::Pending),
            "processing" => Ok(PayoutStatus::Processing),
            "completed" => Ok(PayoutStatus::Completed),
            "failed" => Ok(PayoutStatus::Failed),
            _ => Err(format!("Unknown payout status: {}", s)),
        }
    }
}

/// Per-order distribution between florist and organization.
///
/// All amounts are rounded to currency precision. The fee amounts are
/// the snapshot stored on the order, not a recomputation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayout {
    pub order_id: String,
    pub order_number: String,
    #[serde(with = "money_serde")]
    pub subtotal: Decimal,
    #[serde(with = "money_serde")]
    pub processing_fee: Decimal,
    #[serde(with = "money_serde")]
    pub platform_fee: Decimal,
    #[serde(with = "money_serde")]
    pub florist_payout: Decimal,
    #[serde(with = "money_serde")]
    pub organization_payout: Decimal,
}

/// Aggregate payout distribution for a campaign.
///
/// Recomputed fresh from the order snapshot on every invocation; never
/// cached, and carries no timestamps so that identical inputs yield
/// identical output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoutBreakdown {
    #[serde(with = "money_serde")]
    pub total_revenue: Decimal,
    #[serde(with = "money_serde")]
    pub total_processing_fees: Decimal,
    #[serde(with = "money_serde")]
    pub total_platform_fees: Decimal,
    #[serde(with = "money_serde")]
    pub florist_total: Decimal,
    #[serde(with = "money_serde")]
    pub organization_total: Decimal,
    pub order_payouts: Vec<OrderPayout>,
}

impl PayoutBreakdown {
    pub fn party_total(&self, party: PayoutParty) -> Decimal {
        match party {
            PayoutParty::Florist => self.florist_total,
            PayoutParty::Organization => self.organization_total,
        }
    }
}

/// Persisted payout ledger row.
///
/// Created from a [`PayoutBreakdown`] when a campaign's payouts are
/// finalized; the surrounding application drives the entry through the
/// transfer lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoutLedgerEntry {
    pub id: String,
    pub campaign_id: String,
    pub party: PayoutParty,
    #[serde(with = "money_serde")]
    pub amount: Decimal,
    pub status: PayoutStatus,
    pub transfer_reference: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PayoutLedgerEntry {
    pub fn new(campaign_id: &str, party: PayoutParty, amount: Decimal) -> Self {
        let now = Utc::now();
        PayoutLedgerEntry {
            id: Uuid::new_v4().to_string(),
            campaign_id: campaign_id.to_string(),
            party,
            amount,
            status: PayoutStatus::Pending,
            transfer_reference: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_status(mut self, status: PayoutStatus) -> Self {
        self.status = status;
        self.updated_at = Utc::now();
        self
    }

    pub fn with_transfer_reference(mut self, reference: String) -> Self {
        self.transfer_reference = Some(reference);
        self
    }
}
