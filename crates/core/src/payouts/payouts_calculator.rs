//! Payout calculator.
//!
//! Converts a campaign's paid orders and margin configuration into the
//! per-order and aggregate monetary distribution between florist and
//! organization. Pure functions; no I/O and no state.

use log::{debug, warn};
use rust_decimal::Decimal;

use crate::campaigns::CampaignMarginConfig;
use crate::constants::EVEN_SPLIT_SHARE;
use crate::orders::{OrderRecord, PaymentStatus};
use crate::payouts::payouts_model::{OrderPayout, PayoutBreakdown, PayoutParty};
use crate::utils::round_currency;

/// Computes the distribution of a campaign's paid-order revenue.
///
/// Orders that are not `paid` contribute nothing and are excluded from
/// the result. Fee amounts are read from each order's stored snapshot,
/// never recomputed, so historical orders stay accurate if fee
/// percentages change later. Per-order payouts are rounded to currency
/// precision before summing, which keeps aggregate totals independent of
/// iteration order; the aggregates are therefore sums of already-rounded
/// values and may differ from an unrounded theoretical total by at most
/// a cent per order.
pub fn calculate_campaign_payouts(
    orders: &[OrderRecord],
    margins: &CampaignMarginConfig,
) -> PayoutBreakdown {
    let total_margin = margins.total_margin_percent();
    let (florist_share, organization_share) = if total_margin > Decimal::ZERO {
        (
            margins.florist_margin_percent / total_margin,
            margins.organization_margin_percent / total_margin,
        )
    } else {
        // Legacy campaigns without configured margins split evenly
        warn!("Campaign margins are both zero; falling back to an even split");
        (EVEN_SPLIT_SHARE, EVEN_SPLIT_SHARE)
    };

    let order_payouts: Vec<OrderPayout> = orders
        .iter()
        .filter(|order| order.payment_status == PaymentStatus::Paid)
        .map(|order| {
            let available = order.available_for_distribution();
            OrderPayout {
                order_id: order.id.clone(),
                order_number: order.order_number.clone(),
                subtotal: round_currency(order.subtotal),
                processing_fee: round_currency(order.processing_fee),
                platform_fee: round_currency(order.platform_fee),
                florist_payout: round_currency(available * florist_share),
                organization_payout: round_currency(available * organization_share),
            }
        })
        .collect();

    debug!(
        "Computed payouts for {} paid orders out of {}",
        order_payouts.len(),
        orders.len()
    );

    let mut total_revenue = Decimal::ZERO;
    let mut total_processing_fees = Decimal::ZERO;
    let mut total_platform_fees = Decimal::ZERO;
    let mut florist_total = Decimal::ZERO;
    let mut organization_total = Decimal::ZERO;

    for payout in &order_payouts {
        total_revenue += payout.subtotal;
        total_processing_fees += payout.processing_fee;
        total_platform_fees += payout.platform_fee;
        florist_total += payout.florist_payout;
        organization_total += payout.organization_payout;
    }

    PayoutBreakdown {
        total_revenue: round_currency(total_revenue),
        total_processing_fees: round_currency(total_processing_fees),
        total_platform_fees: round_currency(total_platform_fees),
        florist_total: round_currency(florist_total),
        organization_total: round_currency(organization_total),
        order_payouts,
    }
}

/// Total owed to a single party. Convenience wrapper over
/// [`calculate_campaign_payouts`].
pub fn calculate_party_payout(
    orders: &[OrderRecord],
    margins: &CampaignMarginConfig,
    party: PayoutParty,
) -> Decimal {
    calculate_campaign_payouts(orders, margins).party_total(party)
}
