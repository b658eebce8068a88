//! Repository and provider traits for payouts.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::errors::Result;
use crate::payouts::payouts_model::{
    PayoutBreakdown, PayoutLedgerEntry, PayoutParty, PayoutStatus,
};

/// Repository trait for the payout ledger.
#[async_trait]
pub trait PayoutLedgerRepositoryTrait: Send + Sync {
    /// Ledger entries recorded for a campaign.
    fn get_entries_for_campaign(&self, campaign_id: &str) -> Result<Vec<PayoutLedgerEntry>>;

    /// Persist a batch of new ledger entries.
    async fn create_entries(&self, entries: &[PayoutLedgerEntry]) -> Result<()>;

    /// Record a status transition for an entry.
    async fn update_entry_status(&self, entry_id: &str, status: PayoutStatus) -> Result<()>;
}

/// Funds transfer seam.
///
/// The payment-provider integration (account linking, transfer
/// execution, retries) lives entirely outside the core; this trait is
/// the only surface the payout service touches.
#[async_trait]
pub trait FundsTransferTrait: Send + Sync {
    /// Executes a transfer to the recipient's linked payment account and
    /// returns the provider's transfer reference.
    async fn transfer(&self, recipient_account_id: &str, amount: Decimal) -> Result<String>;
}

/// Service contract for payout operations.
#[async_trait]
pub trait PayoutServiceTrait: Send + Sync {
    /// Computes the current distribution for a campaign without
    /// persisting anything. Valid in any campaign status.
    fn preview_campaign_payouts(&self, campaign_id: &str) -> Result<PayoutBreakdown>;

    /// Total currently owed to one party for a campaign.
    fn get_party_payout(&self, campaign_id: &str, party: PayoutParty) -> Result<Decimal>;

    /// Computes the final distribution for a closed or fulfilled
    /// campaign and records one pending ledger entry per party owed a
    /// positive amount.
    async fn finalize_campaign_payouts(
        &self,
        campaign_id: &str,
    ) -> Result<Vec<PayoutLedgerEntry>>;

    /// Executes the funds transfer for a pending ledger entry and
    /// records the outcome. Retry policy is the caller's concern.
    async fn execute_entry(
        &self,
        entry: &PayoutLedgerEntry,
        recipient_account_id: &str,
    ) -> Result<PayoutLedgerEntry>;
}
