use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;

use super::pricing_calculator::{actual_revenue_split, project_revenue, suggested_pricing};
use super::pricing_errors::PricingError;
use super::pricing_model::{PricingBreakdown, ProductPricing, ProjectionRow, RevenueSplit};
use crate::campaigns::CampaignRepositoryTrait;
use crate::errors::Result;
use crate::settings::SettingsServiceTrait;

/// Service contract for campaign pricing operations.
#[async_trait]
pub trait PricingServiceTrait: Send + Sync {
    /// Suggested retail price and per-party amounts for a florist price
    /// point and desired organization profit.
    fn get_suggested_pricing(
        &self,
        florist_price: Decimal,
        org_profit_percent: Decimal,
    ) -> Result<PricingBreakdown>;

    /// Per-party amounts at an organization-chosen retail price.
    fn get_revenue_split(
        &self,
        florist_price: Decimal,
        retail_price: Decimal,
    ) -> Result<RevenueSplit>;

    /// Estimated revenue at each of the given sales volumes.
    fn get_revenue_projection(
        &self,
        products: &[ProductPricing],
        volumes: &[u32],
    ) -> Result<Vec<ProjectionRow>>;

    /// Computes the suggested price for a product and persists it as the
    /// product's configured retail price.
    async fn apply_suggested_price(
        &self,
        campaign_id: &str,
        product: &ProductPricing,
    ) -> Result<PricingBreakdown>;
}

pub struct PricingService {
    settings_service: Arc<dyn SettingsServiceTrait>,
    campaign_repository: Arc<dyn CampaignRepositoryTrait>,
}

impl PricingService {
    pub fn new(
        settings_service: Arc<dyn SettingsServiceTrait>,
        campaign_repository: Arc<dyn CampaignRepositoryTrait>,
    ) -> Self {
        PricingService {
            settings_service,
            campaign_repository,
        }
    }

    // The calculators assume validated inputs; reject bad ones here at
    // the service boundary.
    fn check_inputs(&self, florist_price: Decimal, percents: &[Decimal]) -> Result<()> {
        if florist_price < Decimal::ZERO {
            return Err(PricingError::InvalidPrice(format!(
                "florist price must not be negative, got {}",
                florist_price
            ))
            .into());
        }
        for percent in percents {
            if *percent < Decimal::ZERO {
                return Err(PricingError::InvalidPercentage(format!(
                    "percentage must not be negative, got {}",
                    percent
                ))
                .into());
            }
        }
        Ok(())
    }
}

#[async_trait]
impl PricingServiceTrait for PricingService {
    fn get_suggested_pricing(
        &self,
        florist_price: Decimal,
        org_profit_percent: Decimal,
    ) -> Result<PricingBreakdown> {
        self.check_inputs(florist_price, &[org_profit_percent])?;
        let fees = self.settings_service.get_fee_settings()?;
        Ok(suggested_pricing(florist_price, org_profit_percent, &fees))
    }

    fn get_revenue_split(
        &self,
        florist_price: Decimal,
        retail_price: Decimal,
    ) -> Result<RevenueSplit> {
        self.check_inputs(florist_price, &[])?;
        if retail_price < Decimal::ZERO {
            return Err(PricingError::InvalidPrice(format!(
                "retail price must not be negative, got {}",
                retail_price
            ))
            .into());
        }
        let fees = self.settings_service.get_fee_settings()?;
        Ok(actual_revenue_split(florist_price, retail_price, &fees))
    }

    fn get_revenue_projection(
        &self,
        products: &[ProductPricing],
        volumes: &[u32],
    ) -> Result<Vec<ProjectionRow>> {
        for product in products {
            self.check_inputs(product.florist_price, &[product.org_profit_percent])?;
        }
        let fees = self.settings_service.get_fee_settings()?;
        Ok(project_revenue(products, volumes, &fees))
    }

    async fn apply_suggested_price(
        &self,
        campaign_id: &str,
        product: &ProductPricing,
    ) -> Result<PricingBreakdown> {
        let breakdown =
            self.get_suggested_pricing(product.florist_price, product.org_profit_percent)?;

        self.campaign_repository
            .save_product_retail_price(campaign_id, &product.id, breakdown.suggested_retail_price)
            .await?;

        debug!(
            "Stored suggested retail price {} for product {} in campaign {}",
            breakdown.suggested_retail_price, product.id, campaign_id
        );
        Ok(breakdown)
    }
}
