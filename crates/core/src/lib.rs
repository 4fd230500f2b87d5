//! Core pricing logic for Ridefare.
//!
//! This crate contains pure business logic with ZERO I/O dependencies.
//! Every function reads only its arguments and returns a new value, so all
//! of them are safe to call concurrently without coordination.
//!
//! # Modules
//!
//! - `pricing` - Tier tables, pickup zones, leg fares and trip composition
//! - `financials` - Booking financial reconciliation
//! - `deposit` - Lead-time based deposit policy

pub mod deposit;
pub mod financials;
pub mod pricing;
