//! Settings module - fee configuration model, service, and traits.

mod settings_model;
mod settings_service;
mod settings_traits;


pub use settings_model::{FeeSettings, FeeSettingsUpdate};
pub use settings_service::{SettingsService, SettingsServiceTrait};
pub use settings_traits::SettingsRepositoryTrait;
