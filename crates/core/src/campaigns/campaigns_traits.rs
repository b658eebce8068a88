//! Repository traits for campaigns.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::campaigns::Campaign;
use crate::errors::Result;

/// Repository trait for campaign snapshots and pricing persistence.
#[async_trait]
pub trait CampaignRepositoryTrait: Send + Sync {
    /// The campaign snapshot, including its margin configuration.
    fn get_campaign(&self, campaign_id: &str) -> Result<Campaign>;

    /// Store a computed suggested retail price as a campaign product's
    /// configured price.
    async fn save_product_retail_price(
        &self,
        campaign_id: &str,
        product_id: &str,
        retail_price: Decimal,
    ) -> Result<()>;
}
