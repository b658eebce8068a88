//! Payouts module - calculator, domain models, service, and traits.

mod payouts_calculator;
mod payouts_errors;
mod payouts_model;
mod payouts_service;
mod payouts_traits;


#[cfg(test)]
mod payouts_service_tests;

pub use payouts_calculator::{calculate_campaign_payouts, calculate_party_payout};
pub use payouts_errors::PayoutError;
pub use payouts_model::{
    OrderPayout, PayoutBreakdown, PayoutLedgerEntry, PayoutParty, PayoutStatus,
};
pub use payouts_service::PayoutService;
pub use payouts_traits::{FundsTransferTrait, PayoutLedgerRepositoryTrait, PayoutServiceTrait};
