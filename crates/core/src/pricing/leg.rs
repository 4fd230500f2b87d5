//! Single-leg fare calculation.

use ridefare_shared::types::{PricingTierId, non_negative, round_money};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::tier::match_tier;
use super::types::{PricingConfig, ServiceType};

/// Branch that produced a leg's pre-fee price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PricingRule {
    /// Hourly rate times booked duration.
    Hourly,
    /// Flat fare of a matched tier.
    Tier {
        /// Matched tier.
        tier_id: PricingTierId,
        /// Its declared priority.
        sort_order: i32,
    },
    /// Overage base charge plus per-km rate beyond the threshold.
    Overage,
    /// Base price plus distance times per-km rate.
    Linear,
}

/// Pre-fee itemization of one leg.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegBreakdown {
    /// Fixed part of the price (tier fare, overage base, linear base, or hourly charge).
    pub base_price: Decimal,
    /// Distance-proportional part of the price.
    pub distance_charge: Decimal,
    /// `max(base_price + distance_charge, minimum_fare) * multiplier`, unrounded.
    pub subtotal: Decimal,
    /// Branch that priced the leg.
    pub rule: PricingRule,
}

impl LegBreakdown {
    /// Leg price including the service fee, unrounded.
    #[must_use]
    pub fn total_with_fee(&self, service_fee_rate: Decimal) -> Decimal {
        with_service_fee(self.subtotal, service_fee_rate)
    }
}

/// Applies the service fee to a pre-fee amount without rounding.
pub(crate) fn with_service_fee(subtotal: Decimal, service_fee_rate: Decimal) -> Decimal {
    non_negative(subtotal.saturating_mul(Decimal::ONE.saturating_add(service_fee_rate)))
}

/// Itemizes one leg before the service fee.
///
/// Branches, first applicable wins:
/// 1. hourly hire: `per_hour_rate * duration_hours`, distance ignored;
/// 2. the tier matching the distance (see [`match_tier`]);
/// 3. overage, when configured and the distance exceeds the threshold;
/// 4. the linear formula.
///
/// The minimum fare and the service type multiplier apply to every branch.
/// Negative distances are treated as zero. Arithmetic saturates at the
/// `Decimal` bounds.
#[must_use]
pub fn leg_breakdown(distance: Decimal, config: &PricingConfig, service_type: ServiceType) -> LegBreakdown {
    let distance = non_negative(distance);

    let (base_price, distance_charge, rule) = if service_type.is_hourly() {
        let rate = config.per_hour_rate.unwrap_or_default();
        let hours = config.duration_hours.unwrap_or_default();
        (rate.saturating_mul(hours), Decimal::ZERO, PricingRule::Hourly)
    } else if let Some(tier) = match_tier(&config.pricing_tiers, distance) {
        (
            tier.price,
            Decimal::ZERO,
            PricingRule::Tier {
                tier_id: tier.id.clone(),
                sort_order: tier.sort_order,
            },
        )
    } else if let (Some(overage_base), Some(overage_per_km)) =
        (config.above_max_km_base_price, config.above_max_km_per_km)
        && distance > config.above_max_km_threshold()
    {
        let extra_km = distance.saturating_sub(config.above_max_km_threshold());
        (overage_base, extra_km.saturating_mul(overage_per_km), PricingRule::Overage)
    } else {
        (
            config.base_price,
            distance.saturating_mul(config.price_per_km),
            PricingRule::Linear,
        )
    };

    let before_fee = base_price.saturating_add(distance_charge).max(config.minimum_fare);
    let subtotal = non_negative(before_fee.saturating_mul(config.service_type_multiplier()));

    LegBreakdown {
        base_price,
        distance_charge,
        subtotal,
        rule,
    }
}

/// Computes the tax-inclusive fare of one leg, rounded to cents and never negative.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use ridefare_core::pricing::{PricingConfig, ServiceType, calculate_leg_fare};
///
/// // 10 + 20 km * 2 = 50, plus 5% fee
/// let config = PricingConfig::linear(dec!(10), dec!(2), dec!(0));
/// assert_eq!(calculate_leg_fare(dec!(20), &config, ServiceType::CityRide), dec!(52.50));
/// ```
#[must_use]
pub fn calculate_leg_fare(distance: Decimal, config: &PricingConfig, service_type: ServiceType) -> Decimal {
    let leg = leg_breakdown(distance, config, service_type);
    round_money(leg.total_with_fee(config.service_fee_rate()))
}
