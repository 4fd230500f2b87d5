//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Pricing configuration.
    #[serde(default)]
    pub pricing: PricingSettings,
    /// Deposit policy configuration.
    #[serde(default)]
    pub deposit: DepositSettings,
}

/// Pricing configuration shared by every vehicle class.
#[derive(Debug, Clone, Deserialize)]
pub struct PricingSettings {
    /// Service fee rate applied on top of the pre-fee price (0.05 = 5%).
    #[serde(default = "default_service_fee_rate")]
    pub service_fee_rate: Decimal,
    /// Distance in km beyond which the overage formula applies.
    #[serde(default = "default_above_max_km_threshold")]
    pub above_max_km_threshold: Decimal,
    /// Flat base price of the linear fallback formula.
    #[serde(default)]
    pub base_price: Decimal,
    /// Per-km rate of the linear fallback formula.
    #[serde(default = "default_price_per_km")]
    pub price_per_km: Decimal,
}

fn default_service_fee_rate() -> Decimal {
    Decimal::new(5, 2)
}

fn default_above_max_km_threshold() -> Decimal {
    Decimal::from(80)
}

fn default_price_per_km() -> Decimal {
    Decimal::new(25, 1)
}

impl Default for PricingSettings {
    fn default() -> Self {
        Self {
            service_fee_rate: default_service_fee_rate(),
            above_max_km_threshold: default_above_max_km_threshold(),
            base_price: Decimal::ZERO,
            price_per_km: default_price_per_km(),
        }
    }
}

/// Deposit policy configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DepositSettings {
    /// IANA timezone pickup dates and times are expressed in.
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// Deposit percentage used when a booking does not specify one.
    #[serde(default = "default_deposit_percent")]
    pub default_percent: Decimal,
}

fn default_timezone() -> String {
    "Europe/Monaco".to_string()
}

fn default_deposit_percent() -> Decimal {
    Decimal::from(20)
}

impl Default for DepositSettings {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            default_percent: default_deposit_percent(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, lowest precedence first: `config/default`, `config/{RUN_MODE}`,
    /// then `RIDEFARE__*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or a value is out of range.
    pub fn load() -> AppResult<Self> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("RIDEFARE").separator("__"))
            .build()?;

        let app: Self = config.try_deserialize()?;
        app.validate()?;
        Ok(app)
    }

    /// Checks that every configured value is usable by the engine.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` naming the first offending setting.
    pub fn validate(&self) -> AppResult<()> {
        let pricing = &self.pricing;
        if pricing.service_fee_rate.is_sign_negative() {
            return Err(AppError::Validation(
                "pricing.service_fee_rate must not be negative".into(),
            ));
        }
        if pricing.above_max_km_threshold.is_sign_negative() {
            return Err(AppError::Validation(
                "pricing.above_max_km_threshold must not be negative".into(),
            ));
        }
        if pricing.base_price.is_sign_negative() || pricing.price_per_km.is_sign_negative() {
            return Err(AppError::Validation(
                "pricing.base_price and pricing.price_per_km must not be negative".into(),
            ));
        }
        if self.deposit.default_percent < Decimal::ZERO
            || self.deposit.default_percent > Decimal::ONE_HUNDRED
        {
            return Err(AppError::Validation(
                "deposit.default_percent must be between 0 and 100".into(),
            ));
        }
        if self.deposit.timezone.trim().is_empty() {
            return Err(AppError::Validation(
                "deposit.timezone must not be empty".into(),
            ));
        }
        Ok(())
    }
}
