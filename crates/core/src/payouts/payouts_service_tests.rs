#[cfg(test)]
mod tests {
    use crate::campaigns::{
        Campaign, CampaignMarginConfig, CampaignRepositoryTrait, CampaignStatus,
    };
    use crate::errors::{Error, Result};
    use crate::orders::{OrderRecord, OrderRepositoryTrait, PaymentStatus};
    use crate::payouts::{
        FundsTransferTrait, PayoutError, PayoutLedgerEntry, PayoutLedgerRepositoryTrait,
        PayoutParty, PayoutService, PayoutServiceTrait, PayoutStatus,
    };
    use async_trait::async_trait;
    use chrono::Utc;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::sync::{Arc, Mutex};

    // --- Mock OrderRepository ---
    struct MockOrderRepository {
        orders: Vec<OrderRecord>,
    }

    impl OrderRepositoryTrait for MockOrderRepository {
        fn get_orders_for_campaign(&self, _campaign_id: &str) -> Result<Vec<OrderRecord>> {
            Ok(self.orders.clone())
        }
    }

    // --- Mock CampaignRepository ---
    struct MockCampaignRepository {
        campaign: Campaign,
    }

    #[async_trait]
    impl CampaignRepositoryTrait for MockCampaignRepository {
        fn get_campaign(&self, campaign_id: &str) -> Result<Campaign> {
            if campaign_id == self.campaign.id {
                Ok(self.campaign.clone())
            } else {
                Err(Error::Repository(format!(
                    "Campaign not found: {}",
                    campaign_id
                )))
            }
        }

        async fn save_product_retail_price(
            &self,
            _campaign_id: &str,
            _product_id: &str,
            _retail_price: Decimal,
        ) -> Result<()> {
            unimplemented!()
        }
    }

    // --- Mock PayoutLedgerRepository ---
    #[derive(Clone)]
    struct MockLedgerRepository {
        entries: Arc<Mutex<Vec<PayoutLedgerEntry>>>,
    }

    impl MockLedgerRepository {
        fn new() -> Self {
            Self {
                entries: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait]
    impl PayoutLedgerRepositoryTrait for MockLedgerRepository {
        fn get_entries_for_campaign(&self, campaign_id: &str) -> Result<Vec<PayoutLedgerEntry>> {
            Ok(self
                .entries
                .lock()
                .unwrap()
                .iter()
                .filter(|e| e.campaign_id == campaign_id)
                .cloned()
                .collect())
        }

        async fn create_entries(&self, entries: &[PayoutLedgerEntry]) -> Result<()> {
            self.entries.lock().unwrap().extend_from_slice(entries);
            Ok(())
        }

        async fn update_entry_status(&self, entry_id: &str, status: PayoutStatus) -> Result<()> {
            let mut entries = self.entries.lock().unwrap();
            match entries.iter_mut().find(|e| e.id == entry_id) {
                Some(entry) => {
                    entry.status = status;
                    Ok(())
                }
                None => Err(Error::Repository(format!(
                    "Ledger entry not found: {}",
                    entry_id
                ))),
            }
        }
    }

    // --- Mock FundsTransfer ---
    struct MockFundsTransfer {
        fail: bool,
    }

    #[async_trait]
    impl FundsTransferTrait for MockFundsTransfer {
        async fn transfer(&self, _recipient_account_id: &str, _amount: Decimal) -> Result<String> {
            if self.fail {
                Err(Error::Transfer("provider rejected the transfer".to_string()))
            } else {
                Ok("tr_test_0001".to_string())
            }
        }
    }

    fn campaign(status: CampaignStatus) -> Campaign {
        let now = Utc::now();
        Campaign {
            id: "c1".to_string(),
            name: "Spring Fundraiser".to_string(),
            status,
            margin_config: CampaignMarginConfig {
                florist_margin_percent: dec!(40),
                organization_margin_percent: dec!(20),
                platform_fee_percent: dec!(10),
            },
            created_at: now,
            updated_at: now,
        }
    }

    fn paid_order(id: &str, subtotal: Decimal) -> OrderRecord {
        OrderRecord {
            id: id.to_string(),
            order_number: format!("BF-{}", id),
            subtotal,
            processing_fee: dec!(3),
            platform_fee: dec!(10),
            payment_status: PaymentStatus::Paid,
        }
    }

    fn build_service(
        status: CampaignStatus,
        orders: Vec<OrderRecord>,
        fail_transfer: bool,
    ) -> (PayoutService, MockLedgerRepository) {
        let ledger = MockLedgerRepository::new();
        let service = PayoutService::new(
            Arc::new(MockOrderRepository { orders }),
            Arc::new(MockCampaignRepository {
                campaign: campaign(status),
            }),
            Arc::new(ledger.clone()),
            Arc::new(MockFundsTransfer {
                fail: fail_transfer,
            }),
        );
        (service, ledger)
    }

    #[test]
    fn test_preview_works_in_any_campaign_status() {
        let (service, _) = build_service(
            CampaignStatus::Active,
            vec![paid_order("o1", dec!(100))],
            false,
        );

        let breakdown = service.preview_campaign_payouts("c1").unwrap();
        assert_eq!(breakdown.florist_total, dec!(58.00));
        assert_eq!(breakdown.organization_total, dec!(29.00));
    }

    #[test]
    fn test_get_party_payout() {
        let (service, _) = build_service(
            CampaignStatus::Closed,
            vec![paid_order("o1", dec!(100))],
            false,
        );

        assert_eq!(
            service.get_party_payout("c1", PayoutParty::Florist).unwrap(),
            dec!(58.00)
        );
        assert_eq!(
            service
                .get_party_payout("c1", PayoutParty::Organization)
                .unwrap(),
            dec!(29.00)
        );
    }

    #[tokio::test]
    async fn test_finalize_creates_pending_entries() {
        let (service, ledger) = build_service(
            CampaignStatus::Closed,
            vec![paid_order("o1", dec!(100))],
            false,
        );

        let entries = service.finalize_campaign_payouts("c1").await.unwrap();

        assert_eq!(entries.len(), 2);
        let florist = entries
            .iter()
            .find(|e| e.party == PayoutParty::Florist)
            .unwrap();
        let organization = entries
            .iter()
            .find(|e| e.party == PayoutParty::Organization)
            .unwrap();
        assert_eq!(florist.amount, dec!(58.00));
        assert_eq!(organization.amount, dec!(29.00));
        assert!(entries.iter().all(|e| e.status == PayoutStatus::Pending));
        assert_eq!(ledger.get_entries_for_campaign("c1").unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_finalize_rejects_open_campaign() {
        let (service, _) = build_service(
            CampaignStatus::Active,
            vec![paid_order("o1", dec!(100))],
            false,
        );

        let err = service.finalize_campaign_payouts("c1").await.unwrap_err();
        assert!(matches!(
            err,
            Error::Payout(PayoutError::CampaignNotPayable(_, _))
        ));
    }

    #[tokio::test]
    async fn test_finalize_rejects_second_run() {
        let (service, _) = build_service(
            CampaignStatus::Closed,
            vec![paid_order("o1", dec!(100))],
            false,
        );

        service.finalize_campaign_payouts("c1").await.unwrap();
        let err = service.finalize_campaign_payouts("c1").await.unwrap_err();
        assert!(matches!(
            err,
            Error::Payout(PayoutError::AlreadyFinalized(_))
        ));
    }

    #[tokio::test]
    async fn test_finalize_without_revenue_creates_no_entries() {
        let (service, ledger) = build_service(CampaignStatus::Closed, vec![], false);

        let entries = service.finalize_campaign_payouts("c1").await.unwrap();
        assert!(entries.is_empty());
        assert!(ledger.get_entries_for_campaign("c1").unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_execute_entry_success_marks_completed() {
        let (service, ledger) = build_service(
            CampaignStatus::Closed,
            vec![paid_order("o1", dec!(100))],
            false,
        );
        let entries = service.finalize_campaign_payouts("c1").await.unwrap();

        let executed = service
            .execute_entry(&entries[0], "acct_florist_1")
            .await
            .unwrap();

        assert_eq!(executed.status, PayoutStatus::Completed);
        assert_eq!(executed.transfer_reference.as_deref(), Some("tr_test_0001"));
        let stored = ledger.get_entries_for_campaign("c1").unwrap();
        let stored_entry = stored.iter().find(|e| e.id == entries[0].id).unwrap();
        assert_eq!(stored_entry.status, PayoutStatus::Completed);
    }

    #[tokio::test]
    async fn test_execute_entry_failure_marks_failed() {
        let (service, ledger) = build_service(
            CampaignStatus::Closed,
            vec![paid_order("o1", dec!(100))],
            true,
        );
        let entries = service.finalize_campaign_payouts("c1").await.unwrap();

        let executed = service
            .execute_entry(&entries[0], "acct_florist_1")
            .await
            .unwrap();

        assert_eq!(executed.status, PayoutStatus::Failed);
        assert!(executed.transfer_reference.is_none());
        let stored = ledger.get_entries_for_campaign("c1").unwrap();
        let stored_entry = stored.iter().find(|e| e.id == entries[0].id).unwrap();
        assert_eq!(stored_entry.status, PayoutStatus::Failed);
    }
}
