//! Booking financial types.

use ridefare_shared::types::decimal_from_f64;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Raw financial fields of a booking, any of which may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingFinancialInput {
    /// Quoted price before discount.
    pub estimated_price: Option<Decimal>,
    /// Persisted final price, possibly stale.
    pub final_price: Option<Decimal>,
    /// Promo code applied, informational only.
    pub promo_code: Option<String>,
    /// Absolute discount.
    pub discount_amount: Option<Decimal>,
    /// Discount percentage, informational only.
    pub discount_percent: Option<Decimal>,
    /// Deposit actually recorded.
    pub deposit_amount: Option<Decimal>,
    /// Deposit percentage shown to the customer.
    pub deposit_percent: Option<Decimal>,
}

/// Financial fields as a record store returns them, as floats.
///
/// Field meanings match [`BookingFinancialInput`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[allow(missing_docs)]
pub struct StoredFinancials {
    pub estimated_price: Option<f64>,
    pub final_price: Option<f64>,
    pub promo_code: Option<String>,
    pub discount_amount: Option<f64>,
    pub discount_percent: Option<f64>,
    pub deposit_amount: Option<f64>,
    pub deposit_percent: Option<f64>,
}

impl From<StoredFinancials> for BookingFinancialInput {
    /// NaN and infinite values become absent fields.
    fn from(stored: StoredFinancials) -> Self {
        let convert = |value: Option<f64>| value.and_then(decimal_from_f64);
        Self {
            estimated_price: convert(stored.estimated_price),
            final_price: convert(stored.final_price),
            promo_code: stored.promo_code,
            discount_amount: convert(stored.discount_amount),
            discount_percent: convert(stored.discount_percent),
            deposit_amount: convert(stored.deposit_amount),
            deposit_percent: convert(stored.deposit_percent),
        }
    }
}

/// Authoritative financial breakdown of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingFinancials {
    /// Price before discount.
    pub subtotal: Decimal,
    /// Discount applied.
    pub discount: Decimal,
    /// Amount the customer owes in total.
    pub total: Decimal,
    /// Deposit percentage for display.
    pub deposit_percent: Decimal,
    /// Deposit already paid.
    pub deposit_paid: Decimal,
    /// `total - deposit_paid`, never negative.
    pub remaining_to_pay: Decimal,
}
