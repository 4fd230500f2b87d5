//! Pickup zone detection.
//!
//! Detection is a text heuristic over the free-form pickup fields; no
//! geocoding is involved. Downstream code only sees [`PickupZone`].

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Zone name, `MC nnn` postal prefix, or the 98000 postal code.
static SURCHARGE_ZONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"monaco|mc\s*\d{3}|98000").expect("valid surcharge zone pattern"));

/// Pricing zone of a pickup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PickupZone {
    /// Standard tariff tables apply.
    #[default]
    Standard,
    /// The surcharge zone's own tier table and overage rates apply.
    Surcharge,
}

impl PickupZone {
    /// Classifies a pickup from its location label and street address.
    ///
    /// Absent and empty fields are skipped; the rest are joined with a space
    /// and lowercased before matching.
    #[must_use]
    pub fn classify(pickup_location: Option<&str>, pickup_address: Option<&str>) -> Self {
        let text = [pickup_location, pickup_address]
            .into_iter()
            .flatten()
            .filter(|field| !field.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();

        if SURCHARGE_ZONE_PATTERN.is_match(&text) {
            Self::Surcharge
        } else {
            Self::Standard
        }
    }
}

/// Returns true if the pickup lies in the surcharge zone.
#[must_use]
pub fn is_surcharge_zone(pickup_location: Option<&str>, pickup_address: Option<&str>) -> bool {
    PickupZone::classify(pickup_location, pickup_address) == PickupZone::Surcharge
}
