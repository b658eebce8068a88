//! Repository traits for orders.

use crate::errors::Result;
use crate::orders::OrderRecord;

/// Repository trait supplying order snapshots for payout computation.
///
/// Implemented by the surrounding storage layer; the core only reads.
pub trait OrderRepositoryTrait: Send + Sync {
    /// All orders recorded for a campaign, regardless of payment status.
    fn get_orders_for_campaign(&self, campaign_id: &str) -> Result<Vec<OrderRecord>>;
}
