//! Sample reports and pre-classified posts for demos and local testing.

use anyhow::Result;
use chrono::{DateTime, Duration, Utc};

use crate::core::hash::stable_record_id;
use crate::core::store::Store;
use crate::core::types::{HazardType, Report, ReportStatus, Sentiment, Severity, SocialPost};

struct SampleReport {
    title: &'static str,
    description: &'static str,
    hazard_type: HazardType,
    severity: Severity,
    latitude: f64,
    longitude: f64,
    location: &'static str,
    status: ReportStatus,
    hours_ago: i64,
}

struct SamplePost {
    platform: &'static str,
    post_id: &'static str,
    content: &'static str,
    author: &'static str,
    position: Option<(f64, f64)>,
    location: &'static str,
    hazard_type: HazardType,
    sentiment: Sentiment,
    confidence: f64,
    hours_ago: i64,
}

const SAMPLE_REPORTS: &[SampleReport] = &[
    SampleReport {
        title: "High waves observed at Marina Beach",
        description: "Waves of 3-4 meters hitting the shore. Fishermen advised to stay ashore.",
        hazard_type: HazardType::HighWaves,
        severity: Severity::High,
        latitude: 13.0400,
        longitude: 80.2800,
        location: "Marina Beach, Chennai, Tamil Nadu",
        status: ReportStatus::Verified,
        hours_ago: 2,
    },
    SampleReport {
        title: "Storm Surge Warning - Chennai",
        description: "Heavy storm surge expected due to cyclonic activity.",
        hazard_type: HazardType::StormSurge,
        severity: Severity::Critical,
        latitude: 13.0827,
        longitude: 80.2707,
        location: "Chennai, Tamil Nadu",
        status: ReportStatus::Verified,
        hours_ago: 4,
    },
    SampleReport {
        title: "Storm surge causing flooding in Mumbai",
        description: "Sea water entering low lying areas near the Gateway of India.",
        hazard_type: HazardType::StormSurge,
        severity: Severity::Critical,
        latitude: 19.0760,
        longitude: 72.8777,
        location: "Gateway of India, Mumbai, Maharashtra",
        status: ReportStatus::Verified,
        hours_ago: 3,
    },
    SampleReport {
        title: "High Waves Alert - Mumbai Coast",
        description: "Unusually high waves observed along Mumbai coastline.",
        hazard_type: HazardType::HighWaves,
        severity: Severity::High,
        latitude: 19.0330,
        longitude: 72.8400,
        location: "Mumbai, Maharashtra",
        status: ReportStatus::Pending,
        hours_ago: 5,
    },
    SampleReport {
        title: "Swell surge affecting fishing activities",
        description: "Large swells making it difficult for fishing boats to operate safely.",
        hazard_type: HazardType::SwellSurge,
        severity: Severity::Medium,
        latitude: 15.2993,
        longitude: 74.1240,
        location: "Calangute Beach, Goa",
        status: ReportStatus::Pending,
        hours_ago: 6,
    },
    SampleReport {
        title: "Coastal Erosion - Goa",
        description: "Significant coastal erosion observed in North Goa beaches.",
        hazard_type: HazardType::CoastalDamage,
        severity: Severity::Medium,
        latitude: 15.2993,
        longitude: 74.1240,
        location: "Calangute, Goa",
        status: ReportStatus::Verified,
        hours_ago: 8,
    },
    SampleReport {
        title: "Coastal erosion at Puri Beach",
        description: "Shoreline has receded by several meters over the last week.",
        hazard_type: HazardType::CoastalDamage,
        severity: Severity::High,
        latitude: 19.8134,
        longitude: 85.8312,
        location: "Puri Beach, Odisha",
        status: ReportStatus::Investigating,
        hours_ago: 10,
    },
    SampleReport {
        title: "Coastal flooding in low-lying areas",
        description: "Heavy rainfall combined with high tide causing flooding near the coast.",
        hazard_type: HazardType::Flooding,
        severity: Severity::High,
        latitude: 21.6291,
        longitude: 87.5095,
        location: "Digha Beach, West Bengal",
        status: ReportStatus::Verified,
        hours_ago: 30,
    },
    SampleReport {
        title: "Unusual sea color observed",
        description: "Sea water appears unusually dark and murky. Authorities investigating.",
        hazard_type: HazardType::Other,
        severity: Severity::Low,
        latitude: 8.0883,
        longitude: 77.5385,
        location: "Kanyakumari, Tamil Nadu",
        status: ReportStatus::Investigating,
        hours_ago: 50,
    },
];

const SAMPLE_POSTS: &[SamplePost] = &[
    SamplePost {
        platform: "TWITTER",
        post_id: "tweet_123456",
        content: "Waves are getting really high at Puri Beach. Stay safe everyone! #OceanSafety #Puri",
        author: "@beach_watcher",
        position: Some((19.8134, 85.8312)),
        location: "Puri, Odisha",
        hazard_type: HazardType::HighWaves,
        sentiment: Sentiment::Urgent,
        confidence: 0.92,
        hours_ago: 1,
    },
    SamplePost {
        platform: "FACEBOOK",
        post_id: "fb_post_789012",
        content: "Coastal flooding reported in several areas. Emergency services are responding.",
        author: "Coastal Emergency Services",
        position: None,
        location: "Mumbai, Maharashtra",
        hazard_type: HazardType::Flooding,
        sentiment: Sentiment::Urgent,
        confidence: 0.88,
        hours_ago: 3,
    },
    SamplePost {
        platform: "FACEBOOK",
        post_id: "fb_post_345678",
        content: "Unusual tide levels in Kochi today. Water is much higher than normal. Anyone else noticed this?",
        author: "Kerala Coastal Community",
        position: Some((9.9312, 76.2673)),
        location: "Kochi, Kerala",
        hazard_type: HazardType::AbnormalTide,
        sentiment: Sentiment::Negative,
        confidence: 0.72,
        hours_ago: 7,
    },
    SamplePost {
        platform: "YOUTUBE",
        post_id: "yt_901234",
        content: "Storm surge causing flooding in low lying areas of Mumbai. Video shows the extent of damage.",
        author: "Mumbai Weather Updates",
        position: Some((19.0760, 72.8777)),
        location: "Mumbai, Maharashtra",
        hazard_type: HazardType::StormSurge,
        sentiment: Sentiment::Urgent,
        confidence: 0.91,
        hours_ago: 12,
    },
];

pub struct SeedSummary {
    pub reports: usize,
    pub posts: usize,
}

pub fn seed_store(store: &Store, now: DateTime<Utc>) -> Result<SeedSummary> {
    let mut summary = SeedSummary {
        reports: 0,
        posts: 0,
    };

    for sample in SAMPLE_REPORTS {
        let id = stable_record_id("rpt", &[sample.title, sample.location]);
        if store.report_exists(&id)? {
            continue;
        }
        let created_at = now - Duration::hours(sample.hours_ago);
        store.insert_report(&Report {
            id,
            title: sample.title.to_string(),
            description: sample.description.to_string(),
            hazard_type: sample.hazard_type,
            severity: sample.severity,
            latitude: sample.latitude,
            longitude: sample.longitude,
            location: sample.location.to_string(),
            status: sample.status,
            verified: sample.status == ReportStatus::Verified,
            created_at,
        })?;
        summary.reports += 1;
    }

    for sample in SAMPLE_POSTS {
        let id = stable_record_id("post", &[sample.platform, sample.post_id]);
        if store.post_exists(&id)? {
            continue;
        }
        store.insert_post(&SocialPost {
            id,
            platform: sample.platform.to_string(),
            post_id: sample.post_id.to_string(),
            content: sample.content.to_string(),
            author: sample.author.to_string(),
            latitude: sample.position.map(|p| p.0),
            longitude: sample.position.map(|p| p.1),
            location: Some(sample.location.to_string()),
            hazard_type: Some(sample.hazard_type),
            sentiment: sample.sentiment,
            confidence: sample.confidence,
            is_relevant: true,
            created_at: now - Duration::hours(sample.hours_ago),
        })?;
        summary.posts += 1;
    }

    tracing::info!(
        reports = summary.reports,
        posts = summary.posts,
        "sample data seeded"
    );
    Ok(summary)
}
