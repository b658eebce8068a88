//! Pricing domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::decimal_serde::{money_serde, money_serde_option};

/// Pricing configuration of a single campaign product.
///
/// `florist_price` is the fixed amount the florist must receive per unit
/// sold, independent of the retail price. When `is_custom_price` is set,
/// the organization has overridden the suggested price with
/// `retail_price`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPricing {
    pub id: String,
    pub name: String,
    pub florist_price: Decimal,
    pub org_profit_percent: Decimal,
    #[serde(default, with = "money_serde_option")]
    pub retail_price: Option<Decimal>,
    #[serde(default)]
    pub is_custom_price: bool,
}

/// Result of a suggested-pricing computation.
///
/// Computed on demand and never mutated; the caller persists
/// `suggested_retail_price` if the organization accepts it. An
/// infeasible configuration (deductions at or above 100% of retail) is
/// signaled by `suggested_retail_price == minimum_retail_price ==
/// florist price` with zero fee and profit amounts, never by an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingBreakdown {
    #[serde(with = "money_serde")]
    pub suggested_retail_price: Decimal,
    /// Break-even retail price at 0% organization profit
    #[serde(with = "money_serde")]
    pub minimum_retail_price: Decimal,
    #[serde(with = "money_serde")]
    pub florist_receives: Decimal,
    #[serde(with = "money_serde")]
    pub org_profit_amount: Decimal,
    #[serde(with = "money_serde")]
    pub platform_fee_amount: Decimal,
    #[serde(with = "money_serde")]
    pub processing_fee_amount: Decimal,
}

/// Per-party amounts at an arbitrary (possibly custom) retail price.
///
/// The florist's price point is a guaranteed floor: `florist_receives`
/// equals the configured florist price regardless of the retail price.
/// A retail price below the cost floor reports zero organization profit
/// and `is_profitable: false` rather than a negative payout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueSplit {
    #[serde(with = "money_serde")]
    pub florist_receives: Decimal,
    #[serde(with = "money_serde")]
    pub org_profit: Decimal,
    #[serde(with = "money_serde")]
    pub platform_fee: Decimal,
    #[serde(with = "money_serde")]
    pub processing_fee: Decimal,
    pub is_profitable: bool,
}

/// Estimated revenue at a given sales volume.
///
/// Multi-product campaigns report the per-product average, not a
/// weighted total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionRow {
    pub volume: u32,
    #[serde(with = "money_serde")]
    pub total_revenue: Decimal,
    #[serde(with = "money_serde")]
    pub florist_revenue: Decimal,
    #[serde(with = "money_serde")]
    pub org_revenue: Decimal,
}
