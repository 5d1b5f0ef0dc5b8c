use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::core::error::TideError;

pub fn now_utc() -> DateTime<Utc> {
    if let Ok(value) = std::env::var("TW_FIXED_TIME") {
        if let Ok(dt) = DateTime::parse_from_rfc3339(&value) {
            return dt.with_timezone(&Utc);
        }
    }
    Utc::now()
}

/// Lookback window accepted by the listing and hotspot queries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum DateRange {
    #[serde(rename = "1h")]
    LastHour,
    #[default]
    #[serde(rename = "24h")]
    LastDay,
    #[serde(rename = "7d")]
    LastWeek,
    #[serde(rename = "30d")]
    LastMonth,
}

impl DateRange {
    pub fn duration(&self) -> Duration {
        match self {
            DateRange::LastHour => Duration::hours(1),
            DateRange::LastDay => Duration::hours(24),
            DateRange::LastWeek => Duration::days(7),
            DateRange::LastMonth => Duration::days(30),
        }
    }

    /// Earliest creation time included by this range, relative to `now`.
    pub fn since(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now - self.duration()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DateRange::LastHour => "1h",
            DateRange::LastDay => "24h",
            DateRange::LastWeek => "7d",
            DateRange::LastMonth => "30d",
        }
    }
}

impl FromStr for DateRange {
    type Err = TideError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "1h" => Ok(DateRange::LastHour),
            "24h" => Ok(DateRange::LastDay),
            "7d" => Ok(DateRange::LastWeek),
            "30d" => Ok(DateRange::LastMonth),
            _ => Err(TideError::Validation(format!(
                "invalid date range (use 1h|24h|7d|30d): {}",
                value
            ))),
        }
    }
}
