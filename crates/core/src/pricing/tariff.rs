//! Default tariff tables.
//!
//! Every table shares the same eight distance bands and differs only in the
//! band prices and the overage parameters beyond 80 km. The surcharge zone
//! tables are strictly more expensive at short range.

use ridefare_shared::types::{PricingTierId, VehicleClassId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::{PricingConfig, PricingTier};
use super::vehicle::VehicleClass;
use super::zone::PickupZone;

/// Minimum fare of a zone tariff whose tier table is empty.
pub const ZONE_FALLBACK_MINIMUM_FARE: Decimal = Decimal::from_parts(90, 0, 0, false, 0);

/// Band bounds in hundredths of a km.
const BANDS_CENTI_KM: [(i64, i64); 8] = [
    (0, 499),
    (500, 1499),
    (1500, 2499),
    (2500, 3599),
    (3600, 4499),
    (4500, 5499),
    (5500, 6499),
    (6500, 7999),
];

/// Static definition of one vehicle family's table.
struct TableDef {
    /// Whole-currency band prices, in band order.
    prices: [i64; 8],
    /// Whole-currency overage base charge.
    above_max_km_base_price: i64,
    /// Overage per-km rate in tenths.
    above_max_km_per_km_tenths: i64,
}

const STANDARD_SEDAN: TableDef = TableDef {
    prices: [55, 70, 85, 105, 120, 155, 180, 210],
    above_max_km_base_price: 240,
    above_max_km_per_km_tenths: 20,
};

const STANDARD_VAN: TableDef = TableDef {
    prices: [75, 95, 110, 130, 150, 175, 200, 230],
    above_max_km_base_price: 270,
    above_max_km_per_km_tenths: 25,
};

const SURCHARGE_SEDAN: TableDef = TableDef {
    prices: [90, 90, 90, 105, 120, 150, 180, 210],
    above_max_km_base_price: 230,
    above_max_km_per_km_tenths: 25,
};

const SURCHARGE_VAN: TableDef = TableDef {
    prices: [110, 110, 110, 130, 150, 175, 200, 230],
    above_max_km_base_price: 230,
    above_max_km_per_km_tenths: 30,
};

/// A tier definition before it is bound to a vehicle class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierDefault {
    /// Lower bound in km.
    pub min_km: Decimal,
    /// Upper bound in km.
    pub max_km: Decimal,
    /// Flat fare.
    pub price: Decimal,
    /// Declared priority.
    pub sort_order: i32,
}

impl TableDef {
    fn tier_defaults(&self) -> Vec<TierDefault> {
        BANDS_CENTI_KM
            .iter()
            .zip(self.prices)
            .zip(1..)
            .map(|(((min, max), price), sort_order)| TierDefault {
                min_km: Decimal::new(*min, 2),
                max_km: Decimal::new(*max, 2),
                price: Decimal::from(price),
                sort_order,
            })
            .collect()
    }
}

/// Binds tier defaults to a vehicle class, assigning `tier-{class}-{index}` IDs.
#[must_use]
pub fn to_pricing_tiers(defaults: &[TierDefault], vehicle_class_id: &VehicleClassId) -> Vec<PricingTier> {
    defaults
        .iter()
        .enumerate()
        .map(|(index, tier)| PricingTier {
            id: PricingTierId::for_default(vehicle_class_id, index),
            vehicle_class_id: vehicle_class_id.clone(),
            min_km: tier.min_km,
            max_km: tier.max_km,
            price: tier.price,
            sort_order: tier.sort_order,
        })
        .collect()
}

/// A complete tier table with its overage parameters and minimum fare.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneTariff {
    /// Tier table.
    pub tiers: Vec<PricingTier>,
    /// Overage base charge.
    pub above_max_km_base_price: Decimal,
    /// Overage per-km rate.
    pub above_max_km_per_km: Decimal,
    /// Floor for the pre-fee price.
    pub minimum_fare: Decimal,
}

impl ZoneTariff {
    fn from_table(table: &TableDef, class: VehicleClass) -> Self {
        let vehicle_class_id = VehicleClassId::new(class.default_id());
        let tiers = to_pricing_tiers(&table.tier_defaults(), &vehicle_class_id);
        let minimum_fare = tiers
            .first()
            .map_or(ZONE_FALLBACK_MINIMUM_FARE, |tier| tier.price);

        Self {
            tiers,
            above_max_km_base_price: Decimal::from(table.above_max_km_base_price),
            above_max_km_per_km: Decimal::new(table.above_max_km_per_km_tenths, 1),
            minimum_fare,
        }
    }

    /// Substitutes this tariff into a vehicle-class configuration.
    ///
    /// Tiers, overage parameters and minimum fare are replaced in full; rates,
    /// multiplier, fee and hourly fields are kept.
    #[must_use]
    pub fn apply_to(self, config: PricingConfig) -> PricingConfig {
        PricingConfig {
            pricing_tiers: self.tiers,
            above_max_km_base_price: Some(self.above_max_km_base_price),
            above_max_km_per_km: Some(self.above_max_km_per_km),
            minimum_fare: self.minimum_fare,
            ..config
        }
    }
}

/// Returns the default tariff of a vehicle class in a zone.
#[must_use]
pub fn tariff_for(zone: PickupZone, vehicle_class_id: &str) -> ZoneTariff {
    let class = VehicleClass::classify(vehicle_class_id);
    let table = match (zone, class) {
        (PickupZone::Standard, VehicleClass::Sedan) => &STANDARD_SEDAN,
        (PickupZone::Standard, VehicleClass::Van) => &STANDARD_VAN,
        (PickupZone::Surcharge, VehicleClass::Sedan) => &SURCHARGE_SEDAN,
        (PickupZone::Surcharge, VehicleClass::Van) => &SURCHARGE_VAN,
    };
    ZoneTariff::from_table(table, class)
}

/// Returns the surcharge zone tariff of a vehicle class.
///
/// Unrecognized identifiers get the sedan table.
#[must_use]
pub fn resolve_zone_config(vehicle_class_id: &str) -> ZoneTariff {
    tariff_for(PickupZone::Surcharge, vehicle_class_id)
}

/// Returns the standard tariff of a vehicle class.
#[must_use]
pub fn standard_tariff(vehicle_class_id: &str) -> ZoneTariff {
    tariff_for(PickupZone::Standard, vehicle_class_id)
}
