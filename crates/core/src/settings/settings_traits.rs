//! Repository traits for settings.

use async_trait::async_trait;

use crate::errors::Result;

/// Repository trait for persisted configuration values.
#[async_trait]
pub trait SettingsRepositoryTrait: Send + Sync {
    /// Get a single setting value by key. Returns None if not set.
    fn get_setting(&self, setting_key: &str) -> Result<Option<String>>;

    /// Update a single setting.
    async fn update_setting(&self, setting_key: &str, setting_value: &str) -> Result<()>;
}
