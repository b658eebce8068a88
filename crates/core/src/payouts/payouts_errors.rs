//! Payout error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PayoutError {
    #[error("Campaign {0} is not payable in status '{1}'")]
    CampaignNotPayable(String, String),

    #[error("Campaign {0} already has payout ledger entries")]
    AlreadyFinalized(String),
}
