//! Shared types, errors, and configuration for Ridefare.
//!
//! This crate provides common building blocks used by the pricing engine
//! and its drivers:
//! - Money rounding and clamping on `Decimal` amounts
//! - Typed identifiers for vehicle classes and pricing tiers
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
