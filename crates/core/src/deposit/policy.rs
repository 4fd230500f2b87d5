//! Deposit required at confirmation, by lead time until pickup.
//!
//! | Lead time        | Deposit |
//! |------------------|---------|
//! | `(0, 6h]`        | 100%    |
//! | `(6h, 24h]`      | 65%     |
//! | otherwise        | 0%      |
//!
//! Unparsable pickup dates or times never block a booking: they yield a
//! [`DepositDecision::Defaulted`] that requires no deposit.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;
use ridefare_shared::config::DepositSettings;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::error::DepositPolicyError;

/// Lead time in hours up to which the full fare is collected up front.
pub const FULL_DEPOSIT_HOURS: i64 = 6;

/// Lead time in hours up to which a partial deposit is collected.
pub const PARTIAL_DEPOSIT_HOURS: i64 = 24;

/// Deposit level required at confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepositTier {
    /// No deposit.
    None,
    /// 65% deposit.
    Partial,
    /// Full payment.
    Full,
}

impl DepositTier {
    /// Deposit percentage of this tier.
    #[must_use]
    pub const fn percent(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Partial => 65,
            Self::Full => 100,
        }
    }

    /// Tier for a lead time between the reference instant and pickup.
    #[must_use]
    pub fn for_lead_time(lead: TimeDelta) -> Self {
        if lead <= TimeDelta::zero() {
            Self::None
        } else if lead <= TimeDelta::hours(FULL_DEPOSIT_HOURS) {
            Self::Full
        } else if lead <= TimeDelta::hours(PARTIAL_DEPOSIT_HOURS) {
            Self::Partial
        } else {
            Self::None
        }
    }
}

/// Outcome of a policy evaluation.
///
/// Both variants are usable as-is; `Defaulted` records why the pickup
/// instant could not be determined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DepositDecision {
    /// Tier derived from the lead time.
    Computed(DepositTier),
    /// Pickup instant unknown; no deposit required.
    Defaulted(DepositPolicyError),
}

impl DepositDecision {
    /// Tier to apply; `None` when defaulted.
    #[must_use]
    pub const fn tier(&self) -> DepositTier {
        match self {
            Self::Computed(tier) => *tier,
            Self::Defaulted(_) => DepositTier::None,
        }
    }

    /// Deposit percentage to apply.
    #[must_use]
    pub const fn percent(&self) -> u8 {
        self.tier().percent()
    }

    /// Returns true if the decision fell back because of unparsable input.
    #[must_use]
    pub const fn is_defaulted(&self) -> bool {
        matches!(self, Self::Defaulted(_))
    }
}

/// Pickup date as stored on a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickupDate<'a> {
    /// `YYYY-MM-DD`, optionally followed by `T...` which is ignored. Combined
    /// with the separate time string in the policy's timezone.
    Text(&'a str),
    /// An exact instant; the separate time string is ignored.
    Scheduled(DateTime<Utc>),
}

impl<'a> From<&'a str> for PickupDate<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl From<DateTime<Utc>> for PickupDate<'_> {
    fn from(instant: DateTime<Utc>) -> Self {
        Self::Scheduled(instant)
    }
}

/// Deposit policy bound to the timezone that pickup times are written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositPolicy {
    timezone: Tz,
}

impl Default for DepositPolicy {
    fn default() -> Self {
        Self::new(chrono_tz::Europe::Monaco)
    }
}

impl DepositPolicy {
    /// Creates a policy reading pickup wall-clock times in `timezone`.
    #[must_use]
    pub const fn new(timezone: Tz) -> Self {
        Self { timezone }
    }

    /// Creates a policy from configured settings.
    ///
    /// # Errors
    ///
    /// Returns `UnknownTimezone` if the configured name is not an IANA zone.
    pub fn from_settings(settings: &DepositSettings) -> Result<Self, DepositPolicyError> {
        let timezone = settings
            .timezone
            .parse::<Tz>()
            .map_err(|_| DepositPolicyError::UnknownTimezone(settings.timezone.clone()))?;
        Ok(Self::new(timezone))
    }

    /// Timezone pickup wall-clock times are read in.
    #[must_use]
    pub const fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Resolves a stored pickup date and time into an instant.
    ///
    /// An empty time means midnight and a missing minute means `:00`.
    ///
    /// # Errors
    ///
    /// Returns an error if the date or time does not parse, or if the local
    /// time is skipped or repeated by a DST transition.
    pub fn pickup_instant(
        &self,
        date: PickupDate<'_>,
        time: &str,
    ) -> Result<DateTime<Utc>, DepositPolicyError> {
        let text = match date {
            PickupDate::Scheduled(instant) => return Ok(instant),
            PickupDate::Text(text) => text,
        };

        let local = NaiveDateTime::new(parse_date(text)?, parse_time(time)?);
        self.timezone
            .from_local_datetime(&local)
            .single()
            .map(|instant| instant.with_timezone(&Utc))
            .ok_or(DepositPolicyError::UnrepresentableLocalTime(local))
    }

    /// Decides the deposit for a pickup, measured from `reference`.
    #[must_use]
    pub fn evaluate(
        &self,
        date: PickupDate<'_>,
        time: &str,
        reference: DateTime<Utc>,
    ) -> DepositDecision {
        match self.pickup_instant(date, time) {
            Ok(pickup) => {
                let lead = pickup - reference;
                let tier = DepositTier::for_lead_time(lead);
                debug!(lead_minutes = lead.num_minutes(), ?tier, "Deposit tier computed");
                DepositDecision::Computed(tier)
            }
            Err(err) => {
                warn!(error = %err, "Pickup instant unknown, no deposit required");
                DepositDecision::Defaulted(err)
            }
        }
    }

    /// Deposit percentage for a pickup: 0, 65 or 100.
    #[must_use]
    pub fn required_deposit_percent(
        &self,
        date: PickupDate<'_>,
        time: &str,
        reference: DateTime<Utc>,
    ) -> u8 {
        self.evaluate(date, time, reference).percent()
    }
}

/// Deposit percentage under the default policy, measured from `reference`
/// or from now.
#[must_use]
pub fn required_deposit_percent(
    date: PickupDate<'_>,
    time: &str,
    reference: Option<DateTime<Utc>>,
) -> u8 {
    DepositPolicy::default().required_deposit_percent(
        date,
        time,
        reference.unwrap_or_else(Utc::now),
    )
}

fn parse_date(text: &str) -> Result<NaiveDate, DepositPolicyError> {
    let day = text.split('T').next().unwrap_or_default().trim();
    NaiveDate::parse_from_str(day, "%Y-%m-%d")
        .map_err(|_| DepositPolicyError::InvalidDate(text.to_string()))
}

fn parse_time(time: &str) -> Result<NaiveTime, DepositPolicyError> {
    let invalid = || DepositPolicyError::InvalidTime(time.to_string());
    let trimmed = time.trim();

    let (hours, minutes) = if trimmed.is_empty() {
        (0, 0)
    } else {
        let mut parts = trimmed.split(':');
        let hours = parts
            .next()
            .and_then(|part| part.trim().parse::<u32>().ok())
            .ok_or_else(invalid)?;
        let minutes = match parts.next() {
            None => 0,
            Some(part) => part.trim().parse::<u32>().map_err(|_| invalid())?,
        };
        (hours, minutes)
    };

    NaiveTime::from_hms_opt(hours, minutes, 0).ok_or_else(invalid)
}
