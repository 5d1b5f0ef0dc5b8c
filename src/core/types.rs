use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::error::TideError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HazardType {
    Tsunami,
    StormSurge,
    HighWaves,
    SwellSurge,
    CoastalCurrent,
    Flooding,
    CoastalDamage,
    AbnormalTide,
    Other,
}

impl HazardType {
    pub const ALL: [HazardType; 9] = [
        HazardType::Tsunami,
        HazardType::StormSurge,
        HazardType::HighWaves,
        HazardType::SwellSurge,
        HazardType::CoastalCurrent,
        HazardType::Flooding,
        HazardType::CoastalDamage,
        HazardType::AbnormalTide,
        HazardType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HazardType::Tsunami => "TSUNAMI",
            HazardType::StormSurge => "STORM_SURGE",
            HazardType::HighWaves => "HIGH_WAVES",
            HazardType::SwellSurge => "SWELL_SURGE",
            HazardType::CoastalCurrent => "COASTAL_CURRENT",
            HazardType::Flooding => "FLOODING",
            HazardType::CoastalDamage => "COASTAL_DAMAGE",
            HazardType::AbnormalTide => "ABNORMAL_TIDE",
            HazardType::Other => "OTHER",
        }
    }
}

/// Ordinal severity; the derive order gives LOW < MEDIUM < HIGH < CRITICAL.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Low,
        Severity::Medium,
        Severity::High,
        Severity::Critical,
    ];

    /// Weight used for hotspot intensity averaging.
    pub fn weight(&self) -> u32 {
        match self {
            Severity::Low => 1,
            Severity::Medium => 2,
            Severity::High => 3,
            Severity::Critical => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
            Severity::Critical => "CRITICAL",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
    Urgent,
}

impl Sentiment {
    pub const ALL: [Sentiment; 4] = [
        Sentiment::Positive,
        Sentiment::Negative,
        Sentiment::Neutral,
        Sentiment::Urgent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "POSITIVE",
            Sentiment::Negative => "NEGATIVE",
            Sentiment::Neutral => "NEUTRAL",
            Sentiment::Urgent => "URGENT",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportStatus {
    #[default]
    Pending,
    Verified,
    Rejected,
    Investigating,
}

impl ReportStatus {
    pub const ALL: [ReportStatus; 4] = [
        ReportStatus::Pending,
        ReportStatus::Verified,
        ReportStatus::Rejected,
        ReportStatus::Investigating,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Pending => "PENDING",
            ReportStatus::Verified => "VERIFIED",
            ReportStatus::Rejected => "REJECTED",
            ReportStatus::Investigating => "INVESTIGATING",
        }
    }
}

macro_rules! str_enum_impls {
    ($ty:ident, $what:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = TideError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim().replace(['-', ' '], "_").to_uppercase();
                $ty::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == wanted)
                    .ok_or_else(|| TideError::Validation(format!("unknown {}: {}", $what, s)))
            }
        }
    };
}

str_enum_impls!(HazardType, "hazard type");
str_enum_impls!(Severity, "severity");
str_enum_impls!(Sentiment, "sentiment");
str_enum_impls!(ReportStatus, "report status");

/// A citizen hazard report as stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: String,
    pub title: String,
    pub description: String,
    pub hazard_type: HazardType,
    pub severity: Severity,
    pub latitude: f64,
    pub longitude: f64,
    pub location: String,
    pub status: ReportStatus,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
}

/// Circular region summarizing a cluster of nearby reports. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Hotspot {
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Meters.
    pub radius: f64,
    pub intensity: f64,
    pub hazard_type: HazardType,
    pub report_count: usize,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SocialPost {
    pub id: String,
    pub platform: String,
    pub post_id: String,
    pub content: String,
    pub author: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub location: Option<String>,
    pub hazard_type: Option<HazardType>,
    pub sentiment: Sentiment,
    pub confidence: f64,
    pub is_relevant: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub hazard_type: Option<HazardType>,
    pub is_relevant: bool,
    pub sentiment: Sentiment,
    pub confidence: f64,
    pub extracted_location: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Jsonl,
    Markdown,
    Csv,
}
