//! Pricing calculator.
//!
//! Pure functions translating between the price point a florist must
//! receive and the retail price a customer pays. Fee percentages are
//! always passed in explicitly via [`FeeSettings`]; nothing here
//! performs I/O or holds state.

use log::{debug, warn};
use rust_decimal::Decimal;

use crate::pricing::pricing_model::{
    PricingBreakdown, ProductPricing, ProjectionRow, RevenueSplit,
};
use crate::settings::FeeSettings;
use crate::utils::{percent_of, round_currency};

/// Computes the retail price at which, after subtracting the
/// organization profit and both fees (each a percentage of the retail
/// price), the florist exactly receives `florist_price`.
///
/// When the combined deductions reach 100% of retail, no finite price
/// exists; the degenerate breakdown returned (retail = minimum =
/// florist price, zero fee and profit amounts) is the infeasibility
/// signal callers render inline.
pub fn suggested_pricing(
    florist_price: Decimal,
    org_profit_percent: Decimal,
    fees: &FeeSettings,
) -> PricingBreakdown {
    let deduction_percent = org_profit_percent + fees.combined_fee_percent();

    if deduction_percent >= Decimal::ONE_HUNDRED {
        warn!(
            "Infeasible pricing configuration: deductions total {}% of retail",
            deduction_percent
        );
        return PricingBreakdown {
            suggested_retail_price: round_currency(florist_price),
            minimum_retail_price: round_currency(florist_price),
            florist_receives: round_currency(florist_price),
            org_profit_amount: Decimal::ZERO,
            platform_fee_amount: Decimal::ZERO,
            processing_fee_amount: Decimal::ZERO,
        };
    }

    let retained_share = (Decimal::ONE_HUNDRED - deduction_percent) / Decimal::ONE_HUNDRED;
    let retail = florist_price / retained_share;

    let fee_free_share =
        (Decimal::ONE_HUNDRED - fees.combined_fee_percent()) / Decimal::ONE_HUNDRED;
    let minimum_retail = florist_price / fee_free_share;

    // Derived amounts come from the unrounded retail price; each is
    // rounded independently.
    PricingBreakdown {
        suggested_retail_price: round_currency(retail),
        minimum_retail_price: round_currency(minimum_retail),
        florist_receives: round_currency(florist_price),
        org_profit_amount: round_currency(percent_of(retail, org_profit_percent)),
        platform_fee_amount: round_currency(percent_of(retail, fees.platform_fee_percent)),
        processing_fee_amount: round_currency(percent_of(retail, fees.processing_fee_percent)),
    }
}

/// Splits the revenue of an arbitrary retail price between the parties.
///
/// Used when an organization overrides the suggested price. The florist
/// price point is a guaranteed floor; a shortfall comes out of the
/// organization's profit, clamped at zero.
pub fn actual_revenue_split(
    florist_price: Decimal,
    retail_price: Decimal,
    fees: &FeeSettings,
) -> RevenueSplit {
    let platform_fee = percent_of(retail_price, fees.platform_fee_percent);
    let processing_fee = percent_of(retail_price, fees.processing_fee_percent);

    let raw_org_profit = retail_price - florist_price - platform_fee - processing_fee;
    let is_profitable = raw_org_profit >= Decimal::ZERO;
    if !is_profitable {
        warn!(
            "Retail price {} is below the cost floor for florist price {}",
            retail_price, florist_price
        );
    }

    RevenueSplit {
        florist_receives: round_currency(florist_price),
        org_profit: round_currency(raw_org_profit.max(Decimal::ZERO)),
        platform_fee: round_currency(platform_fee),
        processing_fee: round_currency(processing_fee),
        is_profitable,
    }
}

/// Estimates campaign revenue at each of the given sales volumes.
///
/// Each product sells at its custom retail price when one is configured,
/// otherwise at its suggested price. Per-volume figures are averaged
/// over the product count rather than summed, which keeps multi-product
/// estimates comparable to single-product ones.
pub fn project_revenue(
    products: &[ProductPricing],
    volumes: &[u32],
    fees: &FeeSettings,
) -> Vec<ProjectionRow> {
    debug!(
        "Projecting revenue for {} products across {} volume points",
        products.len(),
        volumes.len()
    );

    if products.is_empty() {
        return volumes
            .iter()
            .map(|&volume| ProjectionRow {
                volume,
                total_revenue: Decimal::ZERO,
                florist_revenue: Decimal::ZERO,
                org_revenue: Decimal::ZERO,
            })
            .collect();
    }

    let product_count = Decimal::from(products.len() as u64);

    volumes
        .iter()
        .map(|&volume| {
            let units = Decimal::from(volume);
            let mut total_revenue = Decimal::ZERO;
            let mut florist_revenue = Decimal::ZERO;
            let mut org_revenue = Decimal::ZERO;

            for product in products {
                let custom_price = product.retail_price.filter(|_| product.is_custom_price);
                let (retail, org_profit) = match custom_price {
                    Some(price) => {
                        let split = actual_revenue_split(product.florist_price, price, fees);
                        (price, split.org_profit)
                    }
                    None => {
                        let breakdown = suggested_pricing(
                            product.florist_price,
                            product.org_profit_percent,
                            fees,
                        );
                        (breakdown.suggested_retail_price, breakdown.org_profit_amount)
                    }
                };

                total_revenue += retail * units;
                florist_revenue += product.florist_price * units;
                org_revenue += org_profit * units;
            }

            ProjectionRow {
                volume,
                total_revenue: round_currency(total_revenue / product_count),
                florist_revenue: round_currency(florist_revenue / product_count),
                org_revenue: round_currency(org_revenue / product_count),
            }
        })
        .collect()
}
