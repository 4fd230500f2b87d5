//! Deposit policy error types.

use chrono::NaiveDateTime;
use thiserror::Error;

/// Reasons a pickup instant could not be determined.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DepositPolicyError {
    /// Date is not `YYYY-MM-DD` or names a day that does not exist.
    #[error("Invalid pickup date: {0:?}")]
    InvalidDate(String),

    /// Time is not `H:MM`/`HH:MM` or is out of range.
    #[error("Invalid pickup time: {0:?}")]
    InvalidTime(String),

    /// Local wall-clock time is skipped or repeated by a DST transition.
    #[error("Pickup time {0} does not map to a single instant")]
    UnrepresentableLocalTime(NaiveDateTime),

    /// Timezone name is not in the IANA database.
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),
}
