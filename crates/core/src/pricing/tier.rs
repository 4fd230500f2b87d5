//! Tier table lookup.

use rust_decimal::Decimal;

use super::types::PricingTier;

/// Selects the tier that prices `distance`, if any.
///
/// Every tier whose inclusive `[min_km, max_km]` band contains the distance is
/// a candidate. Overlapping candidates are resolved by declared priority:
/// lowest `sort_order` first, then lowest `min_km`, then declaration order.
/// Range tightness plays no part.
#[must_use]
pub fn match_tier(tiers: &[PricingTier], distance: Decimal) -> Option<&PricingTier> {
    tiers
        .iter()
        .filter(|tier| tier.contains(distance))
        .min_by(|a, b| {
            a.sort_order
                .cmp(&b.sort_order)
                .then_with(|| a.min_km.cmp(&b.min_km))
        })
}
