//! Currency rounding helpers shared by the pricing and payout calculators.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::CURRENCY_DECIMAL_PRECISION;

/// Rounds a monetary amount to currency precision.
///
/// Midpoints round away from zero (standard half-up currency rounding),
/// so `2.345` becomes `2.35`.
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(
        CURRENCY_DECIMAL_PRECISION,
        RoundingStrategy::MidpointAwayFromZero,
    )
}

/// Computes `percent` percent of `amount`.
///
/// The result is left unrounded; callers round once per derived amount.
pub fn percent_of(amount: Decimal, percent: Decimal) -> Decimal {
    amount * percent / Decimal::ONE_HUNDRED
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_currency_half_up() {
        assert_eq!(round_currency(dec!(2.345)), dec!(2.35));
        assert_eq!(round_currency(dec!(2.344)), dec!(2.34));
        assert_eq!(round_currency(dec!(8.0645)), dec!(8.06));
    }

    #[test]
    fn test_percent_of() {
        assert_eq!(percent_of(dec!(200), dec!(10)), dec!(20));
        assert_eq!(round_currency(percent_of(dec!(32.2580645), dec!(3))), dec!(0.97));
    }
}
