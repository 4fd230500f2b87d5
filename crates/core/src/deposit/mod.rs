//! Lead-time based deposit policy.

pub mod error;
pub mod policy;

pub use error::DepositPolicyError;
pub use policy::{
    DepositDecision, DepositPolicy, DepositTier, FULL_DEPOSIT_HOURS, PARTIAL_DEPOSIT_HOURS,
    PickupDate, required_deposit_percent,
};
