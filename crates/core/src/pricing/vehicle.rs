//! Vehicle class classification.
//!
//! Vehicle class identifiers are free-form configuration keys. The
//! classification below is the only place that interprets them, so a
//! structured class enum can later replace the substring heuristic without
//! touching fare calculation.

use serde::{Deserialize, Serialize};

/// Vehicle class families with distinct default tariffs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleClass {
    /// Executive sedan (e.g. Mercedes E-Class). Also the fallback family.
    Sedan,
    /// Larger passenger van (e.g. Mercedes V-Class).
    Van,
}

/// Case-insensitive markers identifying the van family.
const VAN_MARKERS: [&str; 2] = ["v-class", "vclass"];

impl VehicleClass {
    /// Classifies a vehicle class identifier.
    ///
    /// Identifiers containing a van marker are vans; everything else,
    /// including empty identifiers, is treated as a sedan.
    #[must_use]
    pub fn classify(vehicle_class_id: &str) -> Self {
        let id = vehicle_class_id.to_lowercase();
        if VAN_MARKERS.iter().any(|marker| id.contains(marker)) {
            Self::Van
        } else {
            Self::Sedan
        }
    }

    /// Identifier the default tariff tables of this family are keyed by.
    #[must_use]
    pub const fn default_id(self) -> &'static str {
        match self {
            Self::Sedan => "mercedes-e-class",
            Self::Van => "mercedes-v-class",
        }
    }
}
