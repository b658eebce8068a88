//! Order domain models.
//!
//! Orders are owned and persisted by the surrounding application; the
//! core treats them as immutable input snapshots. The fee amounts on an
//! order are the values captured at checkout time and are never
//! recomputed from current campaign configuration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::errors::{Result, ValidationError};

/// Payment lifecycle status of an order.
///
/// Only `Paid` orders participate in payout computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Failed,
    Refunded,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Failed => "failed",
            PaymentStatus::Refunded => "refunded",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "pending" => Ok(PaymentStatus::Pending),
            "paid" => Ok(PaymentStatus::Paid),
            "failed" => Ok(PaymentStatus::Failed),
            "refunded" => Ok(PaymentStatus::Refunded),
            _ => Err(format!("Unknown payment status: {}", s)),
        }
    }
}

/// Validated order snapshot consumed by the payout calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub id: String,
    pub order_number: String,
    pub subtotal: Decimal,
    pub processing_fee: Decimal,
    pub platform_fee: Decimal,
    pub payment_status: PaymentStatus,
}

impl OrderRecord {
    /// Order subtotal minus the fee snapshot; the pool split between the
    /// florist and the organization.
    pub fn available_for_distribution(&self) -> Decimal {
        self.subtotal - self.processing_fee - self.platform_fee
    }
}

/// Loosely typed order shape as it arrives from the surrounding
/// application (JSON rows with optional, stringly, or numeric fields).
///
/// Validated into an [`OrderRecord`] before reaching the calculators, so
/// the pure functions can assume well-typed numeric inputs.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RawOrder {
    pub id: Option<String>,
    pub order_number: Option<String>,
    pub subtotal: Option<Value>,
    pub processing_fee: Option<Value>,
    pub platform_fee: Option<Value>,
    pub payment_status: Option<String>,
}

impl RawOrder {
    pub fn validate(self) -> Result<OrderRecord> {
        let id = self
            .id
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ValidationError::MissingField("id".to_string()))?;
        let order_number = self
            .order_number
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ValidationError::MissingField("orderNumber".to_string()))?;

        let subtotal = match self.subtotal {
            Some(value) => decimal_field(&value, "subtotal")?,
            None => return Err(ValidationError::MissingField("subtotal".to_string()).into()),
        };
        // Fee snapshots may be absent on legacy orders; treat as zero
        let processing_fee = match self.processing_fee {
            Some(value) => decimal_field(&value, "processingFee")?,
            None => Decimal::ZERO,
        };
        let platform_fee = match self.platform_fee {
            Some(value) => decimal_field(&value, "platformFee")?,
            None => Decimal::ZERO,
        };

        for (name, amount) in [
            ("subtotal", subtotal),
            ("processingFee", processing_fee),
            ("platformFee", platform_fee),
        ] {
            if amount < Decimal::ZERO {
                return Err(ValidationError::NegativeAmount(name.to_string()).into());
            }
        }

        let status_str = self
            .payment_status
            .ok_or_else(|| ValidationError::MissingField("paymentStatus".to_string()))?;
        let payment_status = PaymentStatus::from_str(&status_str)
            .map_err(ValidationError::InvalidInput)?;

        Ok(OrderRecord {
            id,
            order_number,
            subtotal,
            processing_fee,
            platform_fee,
            payment_status,
        })
    }
}

/// Parses and validates a JSON payload of raw order rows.
pub fn parse_order_records(payload: &str) -> Result<Vec<OrderRecord>> {
    let raw_orders: Vec<RawOrder> =
        serde_json::from_str(payload).map_err(ValidationError::PayloadParse)?;
    raw_orders
        .into_iter()
        .map(RawOrder::validate)
        .collect()
}

/// Coerces a JSON field into a Decimal, accepting both numeric and
/// string representations.
fn decimal_field(value: &Value, field_name: &str) -> Result<Decimal> {
    match value {
        Value::Number(n) => Decimal::from_str(&n.to_string()).map_err(|e| {
            log::error!("Failed to parse {} '{}': {}", field_name, n, e);
            ValidationError::DecimalParse(e).into()
        }),
        Value::String(s) => Decimal::from_str(s.trim()).map_err(|e| {
            log::error!("Failed to parse {} '{}': {}", field_name, s, e);
            ValidationError::DecimalParse(e).into()
        }),
        other => Err(ValidationError::InvalidInput(format!(
            "Field '{}' must be a number or numeric string, got {}",
            field_name, other
        ))
        .into()),
    }
}
