//! Common types used across the engine.

pub mod id;
pub mod money;

pub use id::*;
pub use money::{decimal_from_f64, non_negative, percent_of, round_money};
