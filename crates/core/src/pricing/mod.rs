//! Pricing module - calculator, domain models, service, and errors.

mod pricing_calculator;
mod pricing_errors;
mod pricing_model;
mod pricing_service;



pub use pricing_calculator::{actual_revenue_split, project_revenue, suggested_pricing};
pub use pricing_errors::PricingError;
pub use pricing_model::{PricingBreakdown, ProductPricing, ProjectionRow, RevenueSplit};
pub use pricing_service::{PricingService, PricingServiceTrait};
