//! Property-based tests for fare pricing.
//!
//! - Fares are never negative and always carry at most 2 decimal places
//! - A trip breakdown always sums to its total
//! - A quote always agrees with the trip total of its resolved inputs
//! - The lowest sort order wins among overlapping tiers
//! - Pricing never panics anywhere in the `Decimal` range

use proptest::prelude::*;
use ridefare_shared::types::{PricingTierId, VehicleClassId};
use rust_decimal::Decimal;

use super::leg::calculate_leg_fare;
use super::quote::{QuoteRequest, quote_trip, trip_input_for};
use super::tariff::standard_tariff;
use super::tier::match_tier;
use super::trip::{TripInput, calculate_trip_total, trip_breakdown};
use super::types::{PricingConfig, PricingTier, ServiceType, TripType};

/// Distances from -50.00 to 500.00 km, negative values included.
fn distance() -> impl Strategy<Value = Decimal> {
    (-5_000i64..50_000i64).prop_map(|centi_km| Decimal::new(centi_km, 2))
}

/// Money amounts from -100.00 to 1,000.00.
fn amount() -> impl Strategy<Value = Decimal> {
    (-10_000i64..100_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Rates from -0.500 to 2.000, negative values included.
fn rate() -> impl Strategy<Value = Decimal> {
    (-500i64..2_000i64).prop_map(|thousandths| Decimal::new(thousandths, 3))
}

/// Any `Decimal`, from `Decimal::MIN` to `Decimal::MAX` at every scale.
fn full_range() -> impl Strategy<Value = Decimal> {
    (any::<u32>(), any::<u32>(), any::<u32>(), any::<bool>(), 0u32..=28)
        .prop_map(|(lo, mid, hi, negative, scale)| Decimal::from_parts(lo, mid, hi, negative, scale))
}

fn service_type() -> impl Strategy<Value = ServiceType> {
    prop_oneof![
        Just(ServiceType::CityRide),
        Just(ServiceType::AirportTransfer),
        Just(ServiceType::HourlyHire),
    ]
}

fn trip_type() -> impl Strategy<Value = TripType> {
    prop_oneof![
        Just(TripType::OneWay),
        Just(TripType::RoundTrip),
        Just(TripType::Hourly),
        Just(TripType::ReturnNewRide),
    ]
}

fn vehicle_class_id() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("mercedes-e-class"),
        Just("mercedes-v-class"),
        Just("unknown"),
    ]
}

fn pickup() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("Nice Airport".to_string())),
        Just(Some("Monaco".to_string())),
        Just(Some("MC 98000".to_string())),
        Just(Some("Cannes".to_string())),
    ]
}

/// Arbitrary configurations, including ones with negative rates.
fn config() -> impl Strategy<Value = PricingConfig> {
    (
        vehicle_class_id(),
        amount(),
        amount(),
        amount(),
        prop::option::of(amount()),
        prop::option::of(rate()),
        prop::option::of(rate()),
        any::<bool>(),
    )
        .prop_map(
            |(vehicle, base, per_km, minimum, hourly, multiplier, fee, with_tiers)| {
                let linear = PricingConfig {
                    per_hour_rate: hourly,
                    duration_hours: Some(Decimal::from(3)),
                    service_type_multiplier: multiplier,
                    service_fee_rate: fee,
                    ..PricingConfig::linear(base, per_km, minimum)
                };
                if with_tiers {
                    standard_tariff(vehicle).apply_to(linear)
                } else {
                    linear
                }
            },
        )
}

/// Configurations with every amount and rate drawn from the full range.
fn full_range_config() -> impl Strategy<Value = PricingConfig> {
    (
        (full_range(), full_range(), full_range()),
        (
            prop::option::of(full_range()),
            prop::option::of(full_range()),
            prop::option::of(full_range()),
            prop::option::of(full_range()),
        ),
        (
            prop::option::of(full_range()),
            prop::option::of(full_range()),
            prop::option::of(full_range()),
        ),
        any::<bool>(),
    )
        .prop_map(
            |((base, per_km, minimum), (hourly, hours, multiplier, fee), (threshold, overage_base, overage_per_km), with_tiers)| {
                let config = PricingConfig {
                    per_hour_rate: hourly,
                    duration_hours: hours,
                    service_type_multiplier: multiplier,
                    service_fee_rate: fee,
                    above_max_km_threshold: threshold,
                    above_max_km_base_price: overage_base,
                    above_max_km_per_km: overage_per_km,
                    ..PricingConfig::linear(base, per_km, minimum)
                };
                if with_tiers {
                    standard_tariff("mercedes-e-class").apply_to(config)
                } else {
                    config
                }
            },
        )
}

fn has_at_most_two_places(value: Decimal) -> bool {
    value.round_dp(2) == value
}

fn tier(id: &str, min_km: i64, max_km: i64, sort_order: i32) -> PricingTier {
    PricingTier {
        id: PricingTierId::new(id),
        vehicle_class_id: VehicleClassId::new("v"),
        min_km: Decimal::from(min_km),
        max_km: Decimal::from(max_km),
        price: Decimal::from(10),
        sort_order,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// *For any* distance and configuration, the leg fare SHALL be a
    /// non-negative amount in whole cents.
    #[test]
    fn prop_leg_fare_non_negative_and_in_cents(
        distance in distance(),
        config in config(),
        service_type in service_type(),
    ) {
        let fare = calculate_leg_fare(distance, &config, service_type);
        prop_assert!(fare >= Decimal::ZERO, "fare {} is negative", fare);
        prop_assert!(has_at_most_two_places(fare), "fare {} has sub-cent digits", fare);
    }

    /// *For any* trip, `subtotal + service_fee == total` SHALL hold and the
    /// total SHALL be non-negative.
    #[test]
    fn prop_breakdown_sums_to_total(
        distance in distance(),
        return_distance in prop::option::of(distance()),
        config in config(),
        service_type in service_type(),
        trip_type in trip_type(),
    ) {
        let input = TripInput {
            service_type,
            trip_type,
            distance,
            return_distance,
            pricing: config,
        };
        let breakdown = trip_breakdown(&input);
        prop_assert_eq!(breakdown.subtotal + breakdown.service_fee, breakdown.total);
        prop_assert!(breakdown.total >= Decimal::ZERO);
        prop_assert!(breakdown.subtotal >= Decimal::ZERO);
        prop_assert!(has_at_most_two_places(breakdown.total));
        prop_assert_eq!(breakdown.total, calculate_trip_total(&input));
    }

    /// *For any* one-way trip, the trip total SHALL equal the leg fare.
    #[test]
    fn prop_one_way_equals_leg_fare(
        distance in distance(),
        config in config(),
        service_type in service_type(),
    ) {
        let input = TripInput {
            service_type,
            trip_type: TripType::OneWay,
            distance,
            return_distance: None,
            pricing: config,
        };
        prop_assert_eq!(
            calculate_trip_total(&input),
            calculate_leg_fare(distance, &input.pricing, service_type)
        );
    }

    /// *For any* request, the quoted total SHALL equal the trip total of the
    /// resolved trip input.
    #[test]
    fn prop_quote_matches_trip_total(
        vehicle in vehicle_class_id(),
        pickup_location in pickup(),
        pickup_address in pickup(),
        distance in distance(),
        return_distance in prop::option::of(distance()),
        service_type in service_type(),
        trip_type in trip_type(),
        config in config(),
    ) {
        let request = QuoteRequest {
            vehicle_class_id: VehicleClassId::new(vehicle),
            pickup_location,
            pickup_address,
            service_type,
            trip_type,
            distance,
            return_distance,
            duration_hours: None,
        };
        let (_, input) = trip_input_for(&request, &config);
        let quote = quote_trip(&request, &config);
        prop_assert_eq!(quote.total, calculate_trip_total(&input));
        prop_assert_eq!(quote.total, quote.breakdown.total);
    }

    /// *For any* distance and configuration in the whole `Decimal` range,
    /// pricing SHALL return a non-negative amount in cents.
    #[test]
    fn prop_full_range_leg_fare_in_cents(
        distance in full_range(),
        config in full_range_config(),
        service_type in service_type(),
    ) {
        let fare = calculate_leg_fare(distance, &config, service_type);
        prop_assert!(fare >= Decimal::ZERO, "fare {} is negative", fare);
        prop_assert!(has_at_most_two_places(fare), "fare {} has sub-cent digits", fare);
    }

    /// *For any* trip in the whole `Decimal` range, the breakdown SHALL be
    /// computed with a non-negative total and subtotal.
    #[test]
    fn prop_full_range_trip_breakdown(
        distance in full_range(),
        return_distance in prop::option::of(full_range()),
        config in full_range_config(),
        service_type in service_type(),
        trip_type in trip_type(),
    ) {
        let input = TripInput {
            service_type,
            trip_type,
            distance,
            return_distance,
            pricing: config,
        };
        let breakdown = trip_breakdown(&input);
        prop_assert!(breakdown.total >= Decimal::ZERO);
        prop_assert!(breakdown.subtotal >= Decimal::ZERO);
        prop_assert!(has_at_most_two_places(breakdown.total));
    }

    /// *For any* set of tiers all covering the distance, the one with the
    /// lowest sort order SHALL be selected, regardless of table order.
    #[test]
    fn prop_lowest_sort_order_wins(
        orders in prop::collection::vec(-100i32..100, 1..8),
        rotate in 0usize..8,
    ) {
        let mut tiers: Vec<PricingTier> = orders
            .iter()
            .enumerate()
            .map(|(i, order)| tier(&format!("t{i}"), 0, 100, *order))
            .collect();
        let len = tiers.len();
        tiers.rotate_left(rotate % len);

        let lowest = orders.iter().min().copied();
        let matched = match_tier(&tiers, Decimal::from(50)).map(|t| t.sort_order);
        prop_assert_eq!(matched, lowest);
    }
}
