//! Campaigns module - campaign snapshot models and traits.

mod campaigns_model;
mod campaigns_traits;


pub use campaigns_model::{Campaign, CampaignMarginConfig, CampaignStatus};
pub use campaigns_traits::CampaignRepositoryTrait;
