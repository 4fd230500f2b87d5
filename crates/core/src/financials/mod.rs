//! Booking financial reconciliation.

pub mod reconcile;
pub mod types;

#[cfg(test)]
mod props;

pub use reconcile::{DEFAULT_DEPOSIT_PERCENT, FINAL_PRICE_TOLERANCE, deposit_amount, reconcile};
pub use types::{BookingFinancialInput, BookingFinancials, StoredFinancials};
