//! Typed identifiers for type-safe configuration references.
//!
//! Using typed IDs prevents accidentally passing a tier ID where a vehicle
//! class ID is expected. Identifiers are free-form strings assigned by the
//! configuration source (e.g. `mercedes-e-class`).

use serde::{Deserialize, Serialize};

/// Macro to generate typed string ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates an ID from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the ID as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

typed_id!(VehicleClassId, "Identifier of a vehicle class (e.g. `mercedes-v-class`).");
typed_id!(PricingTierId, "Identifier of a single distance band in a tier table.");

impl PricingTierId {
    /// Builds the conventional ID of the `index`-th default tier of a vehicle class.
    #[must_use]
    pub fn for_default(vehicle_class_id: &VehicleClassId, index: usize) -> Self {
        Self(format!("tier-{vehicle_class_id}-{index}"))
    }
}
