//! Ridefare quoter
//!
//! Reads a booking request as JSON on stdin and prints its quote, required
//! deposit and reconciled financials as JSON on stdout. Logs go to stderr.

use std::io::{self, Read, Write};

use anyhow::Context;
use chrono::{DateTime, Utc};
use ridefare_core::deposit::{DepositPolicy, PickupDate};
use ridefare_core::financials::{
    BookingFinancialInput, BookingFinancials, deposit_amount, reconcile,
};
use ridefare_core::pricing::{PricingConfig, Quote, QuoteRequest, quote_trip, standard_tariff};
use ridefare_shared::AppConfig;
use ridefare_shared::config::PricingSettings;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Booking request read from stdin.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuoterInput {
    trip: QuoteRequest,
    #[serde(default)]
    pickup_date: Option<String>,
    #[serde(default)]
    pickup_time: String,
    #[serde(default)]
    discount_amount: Option<Decimal>,
    #[serde(default)]
    promo_code: Option<String>,
}

/// Result written to stdout.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QuoterOutput {
    quote: Quote,
    required_deposit_percent: u8,
    deposit_defaulted: bool,
    deposit_due: Decimal,
    financials: BookingFinancials,
}

/// Standard pricing of a vehicle class under the configured rates.
fn vehicle_config(settings: &PricingSettings, vehicle_class_id: &str) -> PricingConfig {
    standard_tariff(vehicle_class_id).apply_to(PricingConfig {
        above_max_km_threshold: Some(settings.above_max_km_threshold),
        service_fee_rate: Some(settings.service_fee_rate),
        ..PricingConfig::linear(settings.base_price, settings.price_per_km, Decimal::ZERO)
    })
}

fn run(
    input: QuoterInput,
    config: &AppConfig,
    policy: &DepositPolicy,
    now: DateTime<Utc>,
) -> QuoterOutput {
    let vehicle = vehicle_config(&config.pricing, input.trip.vehicle_class_id.as_str());
    let quote = quote_trip(&input.trip, &vehicle);

    let decision = input
        .pickup_date
        .as_deref()
        .map(|date| policy.evaluate(PickupDate::Text(date), &input.pickup_time, now));
    let required_deposit_percent = decision.as_ref().map_or(0, |d| d.percent());
    let deposit_defaulted = decision.as_ref().is_some_and(|d| d.is_defaulted());

    // No lead-time requirement falls back to the standard deposit
    let collected_percent = if required_deposit_percent > 0 {
        Decimal::from(required_deposit_percent)
    } else {
        config.deposit.default_percent
    };

    let discount = input.discount_amount.unwrap_or_default();
    let deposit_due = deposit_amount(
        quote.total.saturating_sub(discount),
        Some(collected_percent),
    );

    let financials = reconcile(&BookingFinancialInput {
        estimated_price: Some(quote.total),
        discount_amount: input.discount_amount,
        promo_code: input.promo_code,
        deposit_percent: Some(collected_percent),
        ..BookingFinancialInput::default()
    });

    info!(
        zone = ?quote.zone,
        total = %quote.total,
        deposit_due = %deposit_due,
        "Quote computed"
    );

    QuoterOutput {
        quote,
        required_deposit_percent,
        deposit_defaulted,
        deposit_due,
        financials,
    }
}

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // stdout carries the JSON result
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ridefare=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = AppConfig::load().context("failed to load configuration")?;
    let policy = DepositPolicy::from_settings(&config.deposit)?;

    let mut raw = String::new();
    io::stdin()
        .read_to_string(&mut raw)
        .context("failed to read request from stdin")?;
    let input: QuoterInput = serde_json::from_str(&raw).context("invalid request JSON")?;

    let output = run(input, &config, &policy, Utc::now());

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &output)?;
    writeln!(stdout)?;

    Ok(())
}
