//! Fare pricing: tier tables, pickup zones, leg fares and trip composition.

pub mod leg;
pub mod quote;
pub mod tariff;
pub mod tier;
pub mod trip;
pub mod types;
pub mod vehicle;
pub mod zone;

#[cfg(test)]
mod props;

pub use leg::{LegBreakdown, PricingRule, calculate_leg_fare, leg_breakdown};
pub use quote::{Quote, QuoteRequest, quote_trip, trip_input_for};
pub use tariff::{
    TierDefault, ZONE_FALLBACK_MINIMUM_FARE, ZoneTariff, resolve_zone_config, standard_tariff,
    tariff_for, to_pricing_tiers,
};
pub use tier::match_tier;
pub use trip::{TripBreakdown, TripInput, calculate_trip_total, compose_breakdown, trip_breakdown};
pub use types::{
    DEFAULT_ABOVE_MAX_KM_THRESHOLD, DEFAULT_SERVICE_FEE_RATE, PricingConfig, PricingTier,
    ServiceType, TripType,
};
pub use vehicle::VehicleClass;
pub use zone::{PickupZone, is_surcharge_zone};
