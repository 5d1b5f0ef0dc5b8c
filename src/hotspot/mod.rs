//! Greedy clustering of geotagged reports into circular hotspots.
//!
//! Each unprocessed report seeds a cluster and admits every later unprocessed report
//! within the cluster radius of the seed. Membership is tested against the seed only,
//! so a chain A-B-C where A and C are out of range does not merge into one cluster.

pub mod geo;

use chrono::{DateTime, Utc};

use crate::config::HotspotConfig;
use crate::core::hash::stable_hotspot_id;
use crate::core::time::now_utc;
use crate::core::types::{HazardType, Hotspot, Report};
use geo::{haversine_m, LatLon};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClusterParams {
    pub cluster_radius_m: f64,
    pub min_radius_m: f64,
    pub min_reports: usize,
}

impl Default for ClusterParams {
    fn default() -> Self {
        Self::from(&HotspotConfig::default())
    }
}

impl From<&HotspotConfig> for ClusterParams {
    fn from(cfg: &HotspotConfig) -> Self {
        Self {
            cluster_radius_m: cfg.cluster_radius_m,
            min_radius_m: cfg.min_radius_m,
            min_reports: cfg.min_reports.max(2),
        }
    }
}

pub fn generate_hotspots(reports: &[Report], params: &ClusterParams) -> Vec<Hotspot> {
    generate_hotspots_at(reports, params, now_utc())
}

/// Same as [`generate_hotspots`] with an explicit generation timestamp.
pub fn generate_hotspots_at(
    reports: &[Report],
    params: &ClusterParams,
    generated_at: DateTime<Utc>,
) -> Vec<Hotspot> {
    let mut hotspots = Vec::new();
    for cluster in cluster_reports(reports, params.cluster_radius_m) {
        if cluster.len() < params.min_reports {
            continue;
        }
        let members: Vec<&Report> = cluster.iter().map(|&i| &reports[i]).collect();
        hotspots.push(hotspot_from_cluster(&members, params, generated_at));
    }
    tracing::debug!(
        reports = reports.len(),
        hotspots = hotspots.len(),
        "hotspots generated"
    );
    hotspots
}

/// Star-shaped clusters as lists of report indices, in seed order.
pub fn cluster_reports(reports: &[Report], radius_m: f64) -> Vec<Vec<usize>> {
    let mut processed = vec![false; reports.len()];
    let mut clusters = Vec::new();

    for i in 0..reports.len() {
        if processed[i] {
            continue;
        }
        processed[i] = true;
        let seed = position(&reports[i]);
        let mut cluster = vec![i];

        for j in (i + 1)..reports.len() {
            if processed[j] {
                continue;
            }
            if haversine_m(seed, position(&reports[j])) <= radius_m {
                cluster.push(j);
                processed[j] = true;
            }
        }
        clusters.push(cluster);
    }
    clusters
}

fn hotspot_from_cluster(
    members: &[&Report],
    params: &ClusterParams,
    generated_at: DateTime<Utc>,
) -> Hotspot {
    let n = members.len() as f64;
    let latitude = members.iter().map(|r| r.latitude).sum::<f64>() / n;
    let longitude = members.iter().map(|r| r.longitude).sum::<f64>() / n;

    let total_weight: u32 = members.iter().map(|r| r.severity.weight()).sum();
    let intensity = (total_weight as f64 / n / 4.0).clamp(0.0, 1.0);

    let mut max_distance: f64 = 0.0;
    for (i, a) in members.iter().enumerate() {
        for b in &members[i + 1..] {
            max_distance = max_distance.max(haversine_m(position(a), position(b)));
        }
    }

    let ids: Vec<&str> = members.iter().map(|r| r.id.as_str()).collect();
    Hotspot {
        id: stable_hotspot_id(&ids),
        latitude,
        longitude,
        radius: (max_distance / 2.0).max(params.min_radius_m),
        intensity,
        hazard_type: dominant_hazard(members),
        report_count: members.len(),
        created_at: generated_at,
    }
}

/// Most frequent hazard type; ties go to the type seen first.
fn dominant_hazard(members: &[&Report]) -> HazardType {
    let mut counts: Vec<(HazardType, usize)> = Vec::new();
    for report in members {
        match counts.iter_mut().find(|(h, _)| *h == report.hazard_type) {
            Some((_, count)) => *count += 1,
            None => counts.push((report.hazard_type, 1)),
        }
    }
    let mut best = counts.first().copied().unwrap_or((HazardType::Other, 0));
    for &(hazard, count) in counts.iter().skip(1) {
        if count > best.1 {
            best = (hazard, count);
        }
    }
    best.0
}

fn position(report: &Report) -> LatLon {
    LatLon::new(report.latitude, report.longitude)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{ReportStatus, Severity};

    fn report(id: &str, lat: f64, lon: f64, hazard: HazardType, severity: Severity) -> Report {
        Report {
            id: id.to_string(),
            title: id.to_string(),
            description: String::new(),
            hazard_type: hazard,
            severity,
            latitude: lat,
            longitude: lon,
            location: "test".to_string(),
            status: ReportStatus::Pending,
            verified: false,
            created_at: DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
        }
    }

    #[test]
    fn dominant_hazard_prefers_first_seen_on_tie() {
        let a = report("a", 0.0, 0.0, HazardType::Flooding, Severity::Low);
        let b = report("b", 0.0, 0.0, HazardType::Tsunami, Severity::Low);
        let c = report("c", 0.0, 0.0, HazardType::Tsunami, Severity::Low);
        let d = report("d", 0.0, 0.0, HazardType::Flooding, Severity::Low);
        assert_eq!(dominant_hazard(&[&a, &b, &c, &d]), HazardType::Flooding);
        assert_eq!(dominant_hazard(&[&b, &a, &c, &d]), HazardType::Tsunami);
        assert_eq!(dominant_hazard(&[&a, &b, &c]), HazardType::Tsunami);
    }

    #[test]
    fn clusters_follow_input_order() {
        // 0.05 deg of latitude is about 5.6 km.
        let reports = vec![
            report("a", 10.00, 80.0, HazardType::Other, Severity::Low),
            report("far", 40.00, 10.0, HazardType::Other, Severity::Low),
            report("b", 10.05, 80.0, HazardType::Other, Severity::Low),
        ];
        let clusters = cluster_reports(&reports, 10_000.0);
        assert_eq!(clusters, vec![vec![0, 2], vec![1]]);
    }

    #[test]
    fn min_reports_above_two_suppresses_pairs() {
        let reports = vec![
            report("a", 10.00, 80.0, HazardType::Other, Severity::Low),
            report("b", 10.01, 80.0, HazardType::Other, Severity::Low),
        ];
        let params = ClusterParams {
            min_reports: 3,
            ..ClusterParams::default()
        };
        assert!(generate_hotspots(&reports, &params).is_empty());
    }
}
