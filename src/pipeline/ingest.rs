use anyhow::Result;
use chrono::{DateTime, Utc};

use crate::classifier::{Classifier, PostMeta};
use crate::core::hash::stable_record_id;
use crate::core::store::{ReportFilter, ReportOrder, Store};
use crate::core::time::DateRange;
use crate::core::types::{ClassificationResult, Hotspot, Report, ReportStatus, SocialPost};
use crate::hotspot::{generate_hotspots_at, ClusterParams};
use crate::pipeline::normalizer::{PostDraft, ReportDraft};

#[derive(Debug, Clone, PartialEq)]
pub enum PostOutcome {
    Stored(SocialPost),
    /// Rejected by the relevance gate; nothing was written.
    Skipped(ClassificationResult),
}

/// Stores a validated report as PENDING and unverified.
pub fn create_report(store: &Store, draft: ReportDraft, now: DateTime<Utc>) -> Result<Report> {
    let nanos = now.timestamp_nanos_opt().unwrap_or_default().to_string();
    let report = Report {
        id: stable_record_id("rpt", &[&draft.title, &draft.location, &nanos]),
        title: draft.title,
        description: draft.description,
        hazard_type: draft.hazard_type,
        severity: draft.severity,
        latitude: draft.latitude,
        longitude: draft.longitude,
        location: draft.location,
        status: ReportStatus::Pending,
        verified: false,
        created_at: now,
    };
    store.insert_report(&report)?;
    tracing::info!(id = %report.id, hazard = %report.hazard_type, "report created");
    Ok(report)
}

/// Classifies a post and stores it only when it passes the relevance gate.
pub fn ingest_post(
    store: &Store,
    classifier: &Classifier,
    draft: PostDraft,
    now: DateTime<Utc>,
) -> Result<PostOutcome> {
    let meta = PostMeta {
        platform: Some(&draft.platform),
        author: Some(&draft.author),
        location: draft.location.as_deref(),
    };
    let result = classifier.process_post(&draft.content, &meta);
    if !result.is_relevant {
        tracing::info!(platform = %draft.platform, "post not relevant to ocean hazards");
        return Ok(PostOutcome::Skipped(result));
    }

    let nanos = now.timestamp_nanos_opt().unwrap_or_default().to_string();
    let post = SocialPost {
        id: stable_record_id(
            "post",
            &[&draft.platform, &draft.author, &draft.content, &nanos],
        ),
        post_id: format!("post_{}", now.timestamp_millis()),
        location: result.extracted_location.clone().or(draft.location),
        platform: draft.platform,
        content: draft.content,
        author: draft.author,
        latitude: draft.latitude,
        longitude: draft.longitude,
        hazard_type: result.hazard_type,
        sentiment: result.sentiment,
        confidence: result.confidence,
        is_relevant: true,
        created_at: now,
    };
    store.insert_post(&post)?;
    tracing::info!(
        id = %post.id,
        hazard = ?post.hazard_type,
        sentiment = %post.sentiment,
        "post stored"
    );
    Ok(PostOutcome::Stored(post))
}

/// Hotspots over reports created within `range` of `now`, in insertion order.
pub fn hotspots_for_range(
    store: &Store,
    params: &ClusterParams,
    range: DateRange,
    now: DateTime<Utc>,
) -> Result<Vec<Hotspot>> {
    let filter = ReportFilter {
        since: Some(range.since(now)),
        order: ReportOrder::Inserted,
        ..Default::default()
    };
    let reports = store.list_reports(&filter)?;
    tracing::info!(
        range = range.as_str(),
        reports = reports.len(),
        "clustering reports"
    );
    Ok(generate_hotspots_at(&reports, params, now))
}
