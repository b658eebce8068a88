//! Orders module - order snapshot models, validation boundary, and traits.

mod orders_model;
mod orders_traits;


pub use orders_model::{parse_order_records, OrderRecord, PaymentStatus, RawOrder};
pub use orders_traits::OrderRepositoryTrait;
