//! Property-based tests for booking reconciliation.
//!
//! - Every output field is non-negative
//! - Money fields carry at most 2 decimal places
//! - `remaining_to_pay == max(0, total - deposit_paid)`
//! - Reconciliation never panics anywhere in the `Decimal` or `f64` range

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::reconcile::{deposit_amount, reconcile};
use super::types::{BookingFinancialInput, StoredFinancials};

/// Optional amounts from -500.000 to 5,000.000, sub-cent digits included.
fn maybe_amount() -> impl Strategy<Value = Option<Decimal>> {
    prop::option::of((-500_000i64..5_000_000i64).prop_map(|mills| Decimal::new(mills, 3)))
}

/// Optional amounts anywhere in the `Decimal` range, at every scale.
fn maybe_full_range() -> impl Strategy<Value = Option<Decimal>> {
    prop::option::of(
        (any::<u32>(), any::<u32>(), any::<u32>(), any::<bool>(), 0u32..=28)
            .prop_map(|(lo, mid, hi, negative, scale)| Decimal::from_parts(lo, mid, hi, negative, scale)),
    )
}

/// Floats as a record store might hold them, non-finite values included.
fn stored_float() -> impl Strategy<Value = Option<f64>> {
    prop::option::of(prop_oneof![
        -5_000.0f64..50_000.0,
        any::<f64>(),
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
    ])
}

fn financial_input() -> impl Strategy<Value = BookingFinancialInput> {
    (
        maybe_amount(),
        maybe_amount(),
        maybe_amount(),
        maybe_amount(),
        maybe_amount(),
    )
        .prop_map(|(estimated_price, final_price, discount_amount, deposit_amount, deposit_percent)| {
            BookingFinancialInput {
                estimated_price,
                final_price,
                discount_amount,
                deposit_amount,
                deposit_percent,
                ..BookingFinancialInput::default()
            }
        })
}

fn full_range_input() -> impl Strategy<Value = BookingFinancialInput> {
    (
        maybe_full_range(),
        maybe_full_range(),
        maybe_full_range(),
        maybe_full_range(),
        maybe_full_range(),
    )
        .prop_map(|(estimated_price, final_price, discount_amount, deposit_amount, deposit_percent)| {
            BookingFinancialInput {
                estimated_price,
                final_price,
                discount_amount,
                deposit_amount,
                deposit_percent,
                ..BookingFinancialInput::default()
            }
        })
}

fn in_cents(value: Decimal) -> bool {
    value.round_dp(2) == value
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// *For any* input, every reconciled field SHALL be non-negative.
    #[test]
    fn prop_reconcile_non_negative(input in financial_input()) {
        let out = reconcile(&input);
        for (name, value) in [
            ("subtotal", out.subtotal),
            ("discount", out.discount),
            ("total", out.total),
            ("deposit_percent", out.deposit_percent),
            ("deposit_paid", out.deposit_paid),
            ("remaining_to_pay", out.remaining_to_pay),
        ] {
            prop_assert!(value >= Decimal::ZERO, "{} = {} is negative", name, value);
        }
    }

    /// *For any* input, money fields SHALL be rounded to cents and the
    /// remaining balance SHALL be the unpaid part of the total.
    #[test]
    fn prop_reconcile_remaining_balance(input in financial_input()) {
        let out = reconcile(&input);
        prop_assert!(in_cents(out.total));
        prop_assert!(in_cents(out.deposit_paid));
        prop_assert!(in_cents(out.remaining_to_pay));
        prop_assert_eq!(out.remaining_to_pay, (out.total - out.deposit_paid).max(Decimal::ZERO));
    }

    /// *For any* stored record, including NaN and infinite fields, reconciling
    /// SHALL succeed with non-negative output.
    #[test]
    fn prop_stored_records_always_reconcile(
        estimated_price in stored_float(),
        final_price in stored_float(),
        discount_amount in stored_float(),
        deposit_amount in stored_float(),
        deposit_percent in stored_float(),
    ) {
        let stored = StoredFinancials {
            estimated_price,
            final_price,
            discount_amount,
            deposit_amount,
            deposit_percent,
            ..StoredFinancials::default()
        };
        let out = reconcile(&stored.into());
        prop_assert!(out.total >= Decimal::ZERO);
        prop_assert!(out.deposit_percent >= Decimal::ZERO);
        prop_assert!(out.remaining_to_pay >= Decimal::ZERO);
        prop_assert!(out.remaining_to_pay <= out.total);
    }

    /// *For any* input in the whole `Decimal` range, reconciling SHALL
    /// succeed with non-negative fields and an unpaid balance within the total.
    #[test]
    fn prop_full_range_reconcile(input in full_range_input()) {
        let out = reconcile(&input);
        prop_assert!(out.total >= Decimal::ZERO);
        prop_assert!(out.deposit_paid >= Decimal::ZERO);
        prop_assert!(out.deposit_percent >= Decimal::ZERO);
        prop_assert!(out.remaining_to_pay >= Decimal::ZERO);
        prop_assert!(out.remaining_to_pay <= out.total);
        prop_assert!(in_cents(out.total));
    }

    /// *For any* total in the whole `Decimal` range, the default deposit SHALL
    /// be a non-negative amount in cents.
    #[test]
    fn prop_full_range_default_deposit(total in maybe_full_range()) {
        let deposit = deposit_amount(total.unwrap_or_default(), None);
        prop_assert!(deposit >= Decimal::ZERO);
        prop_assert!(in_cents(deposit));
    }

    /// *For any* total, the default deposit SHALL be a fifth of it, in cents.
    #[test]
    fn prop_default_deposit_is_bounded(total in maybe_amount()) {
        let total = total.unwrap_or_default();
        let deposit = deposit_amount(total, None);
        prop_assert!(deposit >= Decimal::ZERO);
        prop_assert!(in_cents(deposit));
        prop_assert!(deposit <= total.max(Decimal::ZERO));
    }
}
