use super::settings_model::{FeeSettings, FeeSettingsUpdate};
use super::settings_traits::SettingsRepositoryTrait;
use crate::constants::{SETTING_PLATFORM_FEE_PERCENT, SETTING_PROCESSING_FEE_PERCENT};
use crate::errors::{Error, Result};
use async_trait::async_trait;
use log::{debug, error};
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::Arc;

// Define the trait for SettingsService
#[async_trait]
pub trait SettingsServiceTrait: Send + Sync {
    /// Resolve the effective fee configuration. Keys without a stored
    /// override fall back to the compiled-in defaults.
    fn get_fee_settings(&self) -> Result<FeeSettings>;

    /// Persist fee overrides and return the resulting configuration.
    async fn update_fee_settings(&self, update: &FeeSettingsUpdate) -> Result<FeeSettings>;
}

pub struct SettingsService {
    settings_repository: Arc<dyn SettingsRepositoryTrait>,
}

impl SettingsService {
    pub fn new(settings_repository: Arc<dyn SettingsRepositoryTrait>) -> Self {
        SettingsService {
            settings_repository,
        }
    }

    fn read_percent(&self, key: &str) -> Result<Option<Decimal>> {
        match self.settings_repository.get_setting(key)? {
            Some(value) => {
                let parsed = Decimal::from_str(&value).map_err(|_| {
                    error!("Stored value for '{}' is not a valid percentage: {}", key, value);
                    Error::InvalidConfigValue(format!("{}: {}", key, value))
                })?;
                Ok(Some(parsed))
            }
            None => Ok(None),
        }
    }
}

#[async_trait]
impl SettingsServiceTrait for SettingsService {
    fn get_fee_settings(&self) -> Result<FeeSettings> {
        let defaults = FeeSettings::default();
        let settings = FeeSettings {
            platform_fee_percent: self
                .read_percent(SETTING_PLATFORM_FEE_PERCENT)?
                .unwrap_or(defaults.platform_fee_percent),
            processing_fee_percent: self
                .read_percent(SETTING_PROCESSING_FEE_PERCENT)?
                .unwrap_or(defaults.processing_fee_percent),
        };
        settings.validate()?;
        Ok(settings)
    }

    async fn update_fee_settings(&self, update: &FeeSettingsUpdate) -> Result<FeeSettings> {
        let current = self.get_fee_settings()?;

        // Validate the merged configuration before persisting anything
        let merged = FeeSettings::new(
            update
                .platform_fee_percent
                .unwrap_or(current.platform_fee_percent),
            update
                .processing_fee_percent
                .unwrap_or(current.processing_fee_percent),
        )?;

        if let Some(platform) = update.platform_fee_percent {
            self.settings_repository
                .update_setting(SETTING_PLATFORM_FEE_PERCENT, &platform.to_string())
                .await?;
        }
        if let Some(processing) = update.processing_fee_percent {
            self.settings_repository
                .update_setting(SETTING_PROCESSING_FEE_PERCENT, &processing.to_string())
                .await?;
        }

        debug!(
            "Fee settings updated: platform {}%, processing {}%",
            merged.platform_fee_percent, merged.processing_fee_percent
        );
        Ok(merged)
    }
}
