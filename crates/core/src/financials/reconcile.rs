//! Booking financial reconciliation.
//!
//! Recomputes a booking's breakdown from its raw stored fields. Persisted
//! derived values are trusted only when they agree with the recomputation.

use ridefare_shared::types::{non_negative, percent_of, round_money};
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::warn;

use super::types::{BookingFinancialInput, BookingFinancials};

/// Largest disagreement between a stored final price and the recomputed
/// total that still lets the stored value stand.
pub const FINAL_PRICE_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Deposit percentage collected when none is specified.
pub const DEFAULT_DEPOSIT_PERCENT: Decimal = Decimal::from_parts(20, 0, 0, false, 0);

/// Reconciles the raw financial fields of a booking.
///
/// Never fails; missing fields count as zero. A stored final price is
/// discarded in favor of `estimated_price - discount_amount` when a discount
/// is present and the two differ by more than [`FINAL_PRICE_TOLERANCE`].
/// Every output field is non-negative and, except the deposit percent,
/// rounded to cents. Amounts beyond the `Decimal` range saturate.
#[must_use]
pub fn reconcile(input: &BookingFinancialInput) -> BookingFinancials {
    let subtotal = input.estimated_price.unwrap_or_default();
    let discount = input.discount_amount.unwrap_or_default();
    let computed_total = round_money(non_negative(subtotal.saturating_sub(discount)));

    let total = match input.final_price {
        None => computed_total,
        Some(final_price) => {
            let stored = round_money(non_negative(final_price));
            if discount > Decimal::ZERO
                && stored.saturating_sub(computed_total).abs() > FINAL_PRICE_TOLERANCE
            {
                warn!(
                    stored_final_price = %stored,
                    computed_total = %computed_total,
                    "Stored final price disagrees with discounted total, using computed total"
                );
                computed_total
            } else {
                stored
            }
        }
    };

    let deposit_paid = input
        .deposit_amount
        .map_or(Decimal::ZERO, |amount| round_money(non_negative(amount)));

    let deposit_percent = match input.deposit_percent {
        Some(percent) => non_negative(percent),
        None if deposit_paid > Decimal::ZERO && total > Decimal::ZERO => {
            deposit_paid
                .checked_div(total)
                .and_then(|share| share.checked_mul(Decimal::ONE_HUNDRED))
                .unwrap_or(Decimal::MAX)
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        }
        None => Decimal::ZERO,
    };

    BookingFinancials {
        subtotal: round_money(non_negative(subtotal)),
        discount: round_money(non_negative(discount)),
        total,
        deposit_percent,
        deposit_paid,
        remaining_to_pay: round_money(non_negative(total.saturating_sub(deposit_paid))),
    }
}

/// Deposit to collect on a discounted total.
///
/// `percent` defaults to [`DEFAULT_DEPOSIT_PERCENT`]; negative totals count as
/// zero.
#[must_use]
pub fn deposit_amount(total_after_discount: Decimal, percent: Option<Decimal>) -> Decimal {
    percent_of(
        total_after_discount,
        percent.unwrap_or(DEFAULT_DEPOSIT_PERCENT),
    )
}
