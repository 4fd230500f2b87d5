//! Quote orchestration: zone detection, tariff selection, and trip composition.

use ridefare_shared::types::VehicleClassId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::tariff::resolve_zone_config;
use super::trip::{TripBreakdown, TripInput, trip_breakdown};
use super::types::{PricingConfig, ServiceType, TripType};
use super::vehicle::VehicleClass;
use super::zone::PickupZone;

/// A request for a price on a prospective booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    /// Vehicle class booked.
    pub vehicle_class_id: VehicleClassId,
    /// Pickup location label.
    #[serde(default)]
    pub pickup_location: Option<String>,
    /// Pickup street address.
    #[serde(default)]
    pub pickup_address: Option<String>,
    /// Service booked.
    pub service_type: ServiceType,
    /// How legs are combined.
    #[serde(default)]
    pub trip_type: TripType,
    /// Outbound distance in km.
    pub distance: Decimal,
    /// Return distance in km.
    #[serde(default)]
    pub return_distance: Option<Decimal>,
    /// Booked duration for hourly hire.
    #[serde(default)]
    pub duration_hours: Option<Decimal>,
}

/// Price of a prospective booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Zone the pickup was classified into.
    pub zone: PickupZone,
    /// Vehicle family the class was classified into.
    pub vehicle_class: VehicleClass,
    /// Itemized price.
    pub breakdown: TripBreakdown,
    /// Tax-inclusive total; the estimated price of the booking.
    pub total: Decimal,
}

/// Builds the trip input for a request, substituting the zone tariff when
/// the pickup lies in the surcharge zone.
#[must_use]
pub fn trip_input_for(request: &QuoteRequest, vehicle: &PricingConfig) -> (PickupZone, TripInput) {
    let zone = PickupZone::classify(
        request.pickup_location.as_deref(),
        request.pickup_address.as_deref(),
    );

    let mut pricing = match zone {
        PickupZone::Surcharge => {
            info!(
                vehicle_class_id = %request.vehicle_class_id,
                "Pickup in surcharge zone, applying zone tariff"
            );
            resolve_zone_config(request.vehicle_class_id.as_str()).apply_to(vehicle.clone())
        }
        PickupZone::Standard => vehicle.clone(),
    };
    if request.duration_hours.is_some() {
        pricing.duration_hours = request.duration_hours;
    }

    let input = TripInput {
        service_type: request.service_type,
        trip_type: request.trip_type,
        distance: request.distance,
        return_distance: request.return_distance,
        pricing,
    };
    (zone, input)
}

/// Quotes a booking request against a vehicle-class configuration.
///
/// The total equals `calculate_trip_total` for the same resolved inputs.
#[must_use]
pub fn quote_trip(request: &QuoteRequest, vehicle: &PricingConfig) -> Quote {
    let (zone, input) = trip_input_for(request, vehicle);
    let breakdown = trip_breakdown(&input);

    Quote {
        zone,
        vehicle_class: VehicleClass::classify(request.vehicle_class_id.as_str()),
        breakdown,
        total: breakdown.total,
    }
}
