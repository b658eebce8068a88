use async_trait::async_trait;
use log::{debug, error};
use rust_decimal::Decimal;
use std::sync::Arc;

use super::payouts_calculator::calculate_campaign_payouts;
use super::payouts_errors::PayoutError;
use super::payouts_model::{PayoutBreakdown, PayoutLedgerEntry, PayoutParty, PayoutStatus};
use super::payouts_traits::{
    FundsTransferTrait, PayoutLedgerRepositoryTrait, PayoutServiceTrait,
};
use crate::campaigns::{Campaign, CampaignRepositoryTrait};
use crate::errors::Result;
use crate::orders::{OrderRecord, OrderRepositoryTrait};

pub struct PayoutService {
    order_repository: Arc<dyn OrderRepositoryTrait>,
    campaign_repository: Arc<dyn CampaignRepositoryTrait>,
    ledger_repository: Arc<dyn PayoutLedgerRepositoryTrait>,
    funds_transfer: Arc<dyn FundsTransferTrait>,
}

impl PayoutService {
    pub fn new(
        order_repository: Arc<dyn OrderRepositoryTrait>,
        campaign_repository: Arc<dyn CampaignRepositoryTrait>,
        ledger_repository: Arc<dyn PayoutLedgerRepositoryTrait>,
        funds_transfer: Arc<dyn FundsTransferTrait>,
    ) -> Self {
        PayoutService {
            order_repository,
            campaign_repository,
            ledger_repository,
            funds_transfer,
        }
    }

    fn load_campaign_orders(&self, campaign_id: &str) -> Result<(Campaign, Vec<OrderRecord>)> {
        let campaign = self.campaign_repository.get_campaign(campaign_id)?;
        campaign.margin_config.validate()?;
        let orders = self.order_repository.get_orders_for_campaign(campaign_id)?;
        Ok((campaign, orders))
    }
}

#[async_trait]
impl PayoutServiceTrait for PayoutService {
    fn preview_campaign_payouts(&self, campaign_id: &str) -> Result<PayoutBreakdown> {
        let (campaign, orders) = self.load_campaign_orders(campaign_id)?;
        Ok(calculate_campaign_payouts(&orders, &campaign.margin_config))
    }

    fn get_party_payout(&self, campaign_id: &str, party: PayoutParty) -> Result<Decimal> {
        Ok(self.preview_campaign_payouts(campaign_id)?.party_total(party))
    }

    async fn finalize_campaign_payouts(
        &self,
        campaign_id: &str,
    ) -> Result<Vec<PayoutLedgerEntry>> {
        let (campaign, orders) = self.load_campaign_orders(campaign_id)?;

        if !campaign.status.is_payable() {
            return Err(PayoutError::CampaignNotPayable(
                campaign_id.to_string(),
                campaign.status.to_string(),
            )
            .into());
        }

        let existing = self.ledger_repository.get_entries_for_campaign(campaign_id)?;
        if !existing.is_empty() {
            return Err(PayoutError::AlreadyFinalized(campaign_id.to_string()).into());
        }

        let breakdown = calculate_campaign_payouts(&orders, &campaign.margin_config);

        let entries: Vec<PayoutLedgerEntry> = [
            (PayoutParty::Florist, breakdown.florist_total),
            (PayoutParty::Organization, breakdown.organization_total),
        ]
        .into_iter()
        .filter(|(_, amount)| *amount > Decimal::ZERO)
        .map(|(party, amount)| PayoutLedgerEntry::new(campaign_id, party, amount))
        .collect();

        if entries.is_empty() {
            debug!("Campaign {} has no distributable revenue", campaign_id);
            return Ok(entries);
        }

        self.ledger_repository.create_entries(&entries).await?;
        debug!(
            "Finalized payouts for campaign {}: {} ledger entries",
            campaign_id,
            entries.len()
        );
        Ok(entries)
    }

    async fn execute_entry(
        &self,
        entry: &PayoutLedgerEntry,
        recipient_account_id: &str,
    ) -> Result<PayoutLedgerEntry> {
        match self
            .funds_transfer
            .transfer(recipient_account_id, entry.amount)
            .await
        {
            Ok(reference) => {
                self.ledger_repository
                    .update_entry_status(&entry.id, PayoutStatus::Completed)
                    .await?;
                debug!(
                    "Transfer {} completed for {} payout of {} on campaign {}",
                    reference, entry.party, entry.amount, entry.campaign_id
                );
                Ok(entry
                    .clone()
                    .with_status(PayoutStatus::Completed)
                    .with_transfer_reference(reference))
            }
            Err(err) => {
                error!(
                    "Funds transfer for ledger entry {} failed: {}",
                    entry.id, err
                );
                self.ledger_repository
                    .update_entry_status(&entry.id, PayoutStatus::Failed)
                    .await?;
                Ok(entry.clone().with_status(PayoutStatus::Failed))
            }
        }
    }
}
