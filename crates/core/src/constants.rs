use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Default platform fee, as a percentage of the retail price
pub const DEFAULT_PLATFORM_FEE_PERCENT: Decimal = dec!(10);

/// Default payment processing fee, as a percentage of the retail price
pub const DEFAULT_PROCESSING_FEE_PERCENT: Decimal = dec!(3);

/// Decimal precision for currency amounts
pub const CURRENCY_DECIMAL_PRECISION: u32 = 2;

/// Share applied to both parties when a campaign has no margins configured
pub const EVEN_SPLIT_SHARE: Decimal = dec!(0.5);

/// Settings key for the platform fee override
pub const SETTING_PLATFORM_FEE_PERCENT: &str = "platform_fee_percent";

/// Settings key for the processing fee override
pub const SETTING_PROCESSING_FEE_PERCENT: &str = "processing_fee_percent";
