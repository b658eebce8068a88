pub mod decimal_serde;
pub mod rounding;

pub use rounding::{percent_of, round_currency};
