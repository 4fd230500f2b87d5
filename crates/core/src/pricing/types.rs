//! Pricing data types.

use ridefare_shared::types::{PricingTierId, VehicleClassId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Distance in km beyond which the overage formula applies when no threshold is configured.
pub const DEFAULT_ABOVE_MAX_KM_THRESHOLD: Decimal = Decimal::from_parts(80, 0, 0, false, 0);

/// Service fee rate used when none is configured (5%).
pub const DEFAULT_SERVICE_FEE_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

/// A fixed-price distance band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingTier {
    /// Tier ID.
    pub id: PricingTierId,
    /// Vehicle class the tier belongs to.
    pub vehicle_class_id: VehicleClassId,
    /// Lower bound of the band in km (inclusive).
    pub min_km: Decimal,
    /// Upper bound of the band in km (inclusive).
    pub max_km: Decimal,
    /// Flat fare for the band, before fee.
    pub price: Decimal,
    /// Declared priority; lower wins when bands overlap.
    pub sort_order: i32,
}

impl PricingTier {
    /// Returns true if `distance` falls within `[min_km, max_km]`.
    #[must_use]
    pub fn contains(&self, distance: Decimal) -> bool {
        self.min_km <= distance && distance <= self.max_km
    }
}

/// Kind of service booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceType {
    /// Point-to-point ride within the city.
    CityRide,
    /// Ride to or from an airport.
    AirportTransfer,
    /// Chauffeur hired by the hour.
    HourlyHire,
}

impl ServiceType {
    /// Returns true if the service is billed by duration instead of distance.
    #[must_use]
    pub const fn is_hourly(self) -> bool {
        matches!(self, Self::HourlyHire)
    }
}

/// How the legs of a trip are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TripType {
    /// A single outbound leg.
    #[default]
    OneWay,
    /// The outbound distance driven twice.
    RoundTrip,
    /// Duration-billed booking.
    Hourly,
    /// Outbound leg plus an independently priced return leg.
    ReturnNewRide,
}

/// Pricing parameters for one vehicle class, built per call by the caller.
///
/// When the surcharge zone applies, the zone tariff replaces the tier table,
/// overage parameters and minimum fare (see `ZoneTariff::apply_to`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PricingConfig {
    /// Flat base of the linear formula.
    pub base_price: Decimal,
    /// Per-km rate of the linear formula.
    pub price_per_km: Decimal,
    /// Floor applied to every pre-fee price.
    pub minimum_fare: Decimal,
    /// Hourly rate for hourly hire.
    pub per_hour_rate: Option<Decimal>,
    /// Booked duration for hourly hire.
    pub duration_hours: Option<Decimal>,
    /// Base charge of the overage formula.
    pub above_max_km_base_price: Option<Decimal>,
    /// Marginal per-km rate of the overage formula.
    pub above_max_km_per_km: Option<Decimal>,
    /// Distance where the overage formula starts (defaults to 80 km).
    pub above_max_km_threshold: Option<Decimal>,
    /// Tier table; empty means no tiers.
    pub pricing_tiers: Vec<PricingTier>,
    /// Multiplier applied per service type (defaults to 1).
    pub service_type_multiplier: Option<Decimal>,
    /// Service fee rate (defaults to 0.05).
    pub service_fee_rate: Option<Decimal>,
}

impl PricingConfig {
    /// Creates a linear-only configuration.
    #[must_use]
    pub fn linear(base_price: Decimal, price_per_km: Decimal, minimum_fare: Decimal) -> Self {
        Self {
            base_price,
            price_per_km,
            minimum_fare,
            ..Self::default()
        }
    }

    /// Overage threshold in km.
    #[must_use]
    pub fn above_max_km_threshold(&self) -> Decimal {
        self.above_max_km_threshold.unwrap_or(DEFAULT_ABOVE_MAX_KM_THRESHOLD)
    }

    /// Service type multiplier.
    #[must_use]
    pub fn service_type_multiplier(&self) -> Decimal {
        self.service_type_multiplier.unwrap_or(Decimal::ONE)
    }

    /// Service fee rate.
    #[must_use]
    pub fn service_fee_rate(&self) -> Decimal {
        self.service_fee_rate.unwrap_or(DEFAULT_SERVICE_FEE_RATE)
    }
}
