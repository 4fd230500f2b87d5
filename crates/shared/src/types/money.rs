//! Money rounding on decimal amounts.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts are `rust_decimal::Decimal`; floats are only accepted at the
//! boundary through [`decimal_from_f64`].

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;
use rust_decimal::prelude::FromPrimitive;

/// Number of decimal places every currency amount is rounded to.
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Rounds an amount to cents.
///
/// Midpoints round away from zero, so `44.625` becomes `44.63`. The sign is
/// preserved; callers that need a non-negative result clamp first with
/// [`non_negative`].
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use ridefare_shared::types::round_money;
///
/// assert_eq!(round_money(dec!(0.1) + dec!(0.2)), dec!(0.30));
/// assert_eq!(round_money(dec!(1.005)), dec!(1.01));
/// ```
#[must_use]
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Clamps an amount at zero.
#[must_use]
pub fn non_negative(amount: Decimal) -> Decimal {
    amount.max(Decimal::ZERO)
}

/// Converts a float read from an external record into a decimal.
///
/// Returns `None` for NaN and infinities, which callers treat the same as a
/// missing field. The conversion drops binary representation artifacts
/// (`0.1_f64` becomes exactly `0.1`).
#[must_use]
pub fn decimal_from_f64(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    Decimal::from_f64(value)
}

/// Returns `percent` percent of `amount`, rounded to cents.
///
/// Negative amounts are treated as zero. Results beyond the `Decimal` range
/// saturate instead of panicking.
#[must_use]
pub fn percent_of(amount: Decimal, percent: Decimal) -> Decimal {
    let amount = non_negative(amount);
    let share = amount.checked_mul(percent).map_or_else(
        || (amount / Decimal::ONE_HUNDRED).saturating_mul(percent),
        |product| product / Decimal::ONE_HUNDRED,
    );
    round_money(share)
}
