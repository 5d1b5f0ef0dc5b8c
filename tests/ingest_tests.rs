use chrono::{DateTime, Duration, Utc};
use serde_json::json;
use tidewatch::classifier::Classifier;
use tidewatch::config::ClassifierConfig;
use tidewatch::core::store::{PostFilter, ReportFilter, Store};
use tidewatch::core::time::DateRange;
use tidewatch::core::types::{HazardType, ReportStatus, Severity};
use tidewatch::hotspot::ClusterParams;
use tidewatch::pipeline::ingest::{create_report, hotspots_for_range, ingest_post, PostOutcome};
use tidewatch::pipeline::normalizer::{normalize_post, normalize_report, RawPost, RawReport};

fn now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2025-03-01T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

fn raw_report(value: serde_json::Value) -> RawReport {
    serde_json::from_value(value).unwrap()
}

fn raw_post(value: serde_json::Value) -> RawPost {
    serde_json::from_value(value).unwrap()
}

#[test]
fn created_reports_are_pending_and_persisted() {
    let path = std::env::temp_dir().join(format!("tidewatch-test-{}.db", std::process::id()));
    let _ = std::fs::remove_file(&path);
    {
        let store = Store::new(&path).unwrap();
        let draft = normalize_report(raw_report(json!({
            "title": "High waves at Marina",
            "description": "Waves over 3 m",
            "hazardType": "HIGH_WAVES",
            "severity": "HIGH",
            "latitude": "13.04",
            "longitude": 80.28,
            "location": "Marina Beach, Chennai"
        })))
        .unwrap();
        let report = create_report(&store, draft, now()).unwrap();
        assert_eq!(report.status, ReportStatus::Pending);
        assert!(!report.verified);
        assert_eq!(report.latitude, 13.04);
    }
    let reopened = Store::new(&path).unwrap();
    let reports = reopened.list_reports(&ReportFilter::default()).unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].hazard_type, HazardType::HighWaves);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn invalid_report_bodies_are_rejected() {
    let missing_location = raw_report(json!({
        "title": "t", "description": "d", "hazardType": "TSUNAMI",
        "severity": "LOW", "latitude": 1.0, "longitude": 1.0
    }));
    assert!(normalize_report(missing_location).is_err());

    let bad_hazard = raw_report(json!({
        "title": "t", "description": "d", "hazardType": "VOLCANO",
        "severity": "LOW", "latitude": 1.0, "longitude": 1.0, "location": "x"
    }));
    assert!(normalize_report(bad_hazard).is_err());

    let out_of_range = raw_report(json!({
        "title": "t", "description": "d", "hazardType": "TSUNAMI",
        "severity": "LOW", "latitude": 91.0, "longitude": 1.0, "location": "x"
    }));
    assert!(normalize_report(out_of_range).is_err());

    let zero_position = raw_report(json!({
        "title": "t", "description": "d", "hazardType": "TSUNAMI",
        "severity": "LOW", "latitude": 0, "longitude": 0, "location": "Gulf of Guinea"
    }));
    assert!(normalize_report(zero_position).is_ok());
}

#[test]
fn irrelevant_posts_are_not_stored() {
    let store = Store::in_memory().unwrap();
    let classifier = Classifier::new(&ClassifierConfig::default()).unwrap();
    let draft = normalize_post(raw_post(json!({
        "content": "I had lunch today",
        "platform": "TWITTER",
        "author": "@someone"
    })))
    .unwrap();
    let outcome = ingest_post(&store, &classifier, draft, now()).unwrap();
    assert!(matches!(outcome, PostOutcome::Skipped(ref r) if !r.is_relevant));
    assert!(store.list_posts(&PostFilter::default()).unwrap().is_empty());
}

#[test]
fn stored_posts_prefer_extracted_location() {
    let store = Store::in_memory().unwrap();
    let classifier = Classifier::new(&ClassifierConfig::default()).unwrap();
    let draft = normalize_post(raw_post(json!({
        "content": "Heavy flooding near Marina Beach",
        "platform": "TWITTER",
        "author": "@watcher",
        "location": "Chennai"
    })))
    .unwrap();
    let post = match ingest_post(&store, &classifier, draft, now()).unwrap() {
        PostOutcome::Stored(post) => post,
        other => panic!("expected stored post, got {other:?}"),
    };
    assert_eq!(post.location.as_deref(), Some("Marina Beach"));
    assert_eq!(post.post_id, format!("post_{}", now().timestamp_millis()));

    let fallback = normalize_post(raw_post(json!({
        "content": "Storm warning for the coast tonight",
        "platform": "FACEBOOK",
        "author": "Coast Guard",
        "location": "Kochi, Kerala"
    })))
    .unwrap();
    match ingest_post(&store, &classifier, fallback, now()).unwrap() {
        PostOutcome::Stored(post) => assert_eq!(post.location.as_deref(), Some("Kochi, Kerala")),
        other => panic!("expected stored post, got {other:?}"),
    }

    let twitter = store
        .list_posts(&PostFilter {
            platform: Some("TWITTER".into()),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(twitter.len(), 1);
}

#[test]
fn hotspot_query_only_sees_reports_in_range() {
    let store = Store::in_memory().unwrap();
    let body = |lat: f64, severity: &str| {
        raw_report(json!({
            "title": format!("Storm surge at {lat} ({severity})"),
            "description": "water over the road",
            "hazardType": "STORM_SURGE", "severity": severity,
            "latitude": lat, "longitude": 72.87, "location": "Mumbai"
        }))
    };
    let old = now() - Duration::hours(30);
    create_report(&store, normalize_report(body(19.07, "LOW")).unwrap(), old).unwrap();
    create_report(&store, normalize_report(body(19.08, "LOW")).unwrap(), old).unwrap();
    create_report(&store, normalize_report(body(19.07, "CRITICAL")).unwrap(), now()).unwrap();

    let params = ClusterParams::default();
    assert!(hotspots_for_range(&store, &params, DateRange::LastDay, now())
        .unwrap()
        .is_empty());
    let week = hotspots_for_range(&store, &params, DateRange::LastWeek, now()).unwrap();
    assert_eq!(week.len(), 1);
    assert_eq!(week[0].report_count, 3);
    assert_eq!(week[0].hazard_type, HazardType::StormSurge);

    let critical = store
        .list_reports(&ReportFilter {
            severity: Some(Severity::Critical),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(critical.len(), 1);
}
