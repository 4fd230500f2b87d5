//! Trip composition from leg prices.

use ridefare_shared::types::{non_negative, round_money};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::leg::{LegBreakdown, leg_breakdown, with_service_fee};
use super::types::{PricingConfig, ServiceType, TripType};

/// Everything needed to price a trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripInput {
    /// Service booked.
    pub service_type: ServiceType,
    /// How legs are combined.
    #[serde(default)]
    pub trip_type: TripType,
    /// Outbound distance in km.
    pub distance: Decimal,
    /// Return distance in km, only used by `ReturnNewRide`.
    #[serde(default)]
    pub return_distance: Option<Decimal>,
    /// Pricing for the vehicle class (zone tariff already substituted).
    pub pricing: PricingConfig,
}

/// Itemized trip price.
///
/// `subtotal + service_fee == total` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripBreakdown {
    /// Combined fixed parts of the legs.
    pub base_price: Decimal,
    /// Combined distance charges of the legs.
    pub distance_charge: Decimal,
    /// Combined pre-fee subtotal, rounded.
    pub subtotal: Decimal,
    /// Service fee on the combined subtotal.
    pub service_fee: Decimal,
    /// Tax-inclusive total, rounded once.
    pub total: Decimal,
}

/// Combines per-leg breakdowns according to the trip type.
///
/// - `OneWay` / `Hourly`: the outbound leg.
/// - `RoundTrip`: the outbound leg doubled; any return leg is ignored.
/// - `ReturnNewRide`: outbound plus return; without a return leg, the outbound leg alone.
///
/// The fee is applied once to the combined subtotal and the total is rounded
/// once, after summation.
#[must_use]
pub fn compose_breakdown(
    trip_type: TripType,
    outbound: &LegBreakdown,
    return_leg: Option<&LegBreakdown>,
    service_fee_rate: Decimal,
) -> TripBreakdown {
    let (base_price, distance_charge, subtotal) = match (trip_type, return_leg) {
        (TripType::RoundTrip, _) => {
            let two = Decimal::TWO;
            (
                outbound.base_price.saturating_mul(two),
                outbound.distance_charge.saturating_mul(two),
                outbound.subtotal.saturating_mul(two),
            )
        }
        (TripType::ReturnNewRide, Some(back)) => (
            outbound.base_price.saturating_add(back.base_price),
            outbound.distance_charge.saturating_add(back.distance_charge),
            outbound.subtotal.saturating_add(back.subtotal),
        ),
        (TripType::OneWay | TripType::Hourly | TripType::ReturnNewRide, _) => (
            outbound.base_price,
            outbound.distance_charge,
            outbound.subtotal,
        ),
    };

    let total = round_money(with_service_fee(subtotal, service_fee_rate));
    let subtotal = round_money(non_negative(subtotal));

    TripBreakdown {
        base_price: round_money(base_price),
        distance_charge: round_money(distance_charge),
        subtotal,
        service_fee: total - subtotal,
        total,
    }
}

/// Prices every leg of a trip and itemizes the result.
#[must_use]
pub fn trip_breakdown(input: &TripInput) -> TripBreakdown {
    let config = &input.pricing;
    let outbound = leg_breakdown(input.distance, config, input.service_type);

    let return_leg = match (input.trip_type, input.return_distance) {
        (TripType::ReturnNewRide, Some(distance)) => {
            Some(leg_breakdown(distance, config, input.service_type))
        }
        (TripType::ReturnNewRide, None) => {
            debug!("Return ride requested without a return distance, pricing outbound leg only");
            None
        }
        _ => None,
    };

    compose_breakdown(
        input.trip_type,
        &outbound,
        return_leg.as_ref(),
        config.service_fee_rate(),
    )
}

/// Computes the tax-inclusive trip total, rounded once and never negative.
///
/// A round trip doubles the unrounded leg before rounding, so the result can
/// differ by a cent from `2 * calculate_leg_fare` when the leg fare ends in a
/// half cent (a 44.625 leg gives 89.25, not 2 * 44.63).
#[must_use]
pub fn calculate_trip_total(input: &TripInput) -> Decimal {
    trip_breakdown(input).total
}
