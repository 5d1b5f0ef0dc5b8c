use std::{fs, path::Path, path::PathBuf};

use serde::Deserialize;

use crate::core::error::TideError;

pub const DEFAULT_CONFIG_PATH: &str = "config/tidewatch.toml";

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct HotspotConfig {
    /// Seed-to-member admission distance in meters.
    #[serde(default = "default_cluster_radius")]
    pub cluster_radius_m: f64,
    /// Floor applied to every emitted hotspot radius, in meters.
    #[serde(default = "default_min_radius")]
    pub min_radius_m: f64,
    #[serde(default = "default_min_reports")]
    pub min_reports: usize,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ClassifierConfig {
    /// Hazard labels at or below this posterior are reported as absent.
    #[serde(default = "default_hazard_threshold")]
    pub hazard_confidence_threshold: f64,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,
    #[serde(default)]
    pub hotspots: HotspotConfig,
    #[serde(default)]
    pub classifier: ClassifierConfig,
}

impl Default for HotspotConfig {
    fn default() -> Self {
        Self {
            cluster_radius_m: default_cluster_radius(),
            min_radius_m: default_min_radius(),
            min_reports: default_min_reports(),
        }
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            hazard_confidence_threshold: default_hazard_threshold(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            hotspots: HotspotConfig::default(),
            classifier: ClassifierConfig::default(),
        }
    }
}

/// Loads the TOML config; a missing file yields the built-in defaults.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, TideError> {
    let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_PATH));

    if !path.exists() {
        tracing::debug!("config {} not found, using defaults", path.display());
        return Ok(AppConfig::default());
    }

    let content = fs::read_to_string(path).map_err(|e| TideError::Config(e.to_string()))?;
    let cfg = parse_config(&content)?;
    tracing::debug!("config loaded from {}", path.display());
    Ok(cfg)
}

pub fn parse_config(content: &str) -> Result<AppConfig, TideError> {
    let cfg: AppConfig = toml::from_str(content).map_err(|e| TideError::Config(e.to_string()))?;
    validate(&cfg)?;
    Ok(cfg)
}

fn validate(cfg: &AppConfig) -> Result<(), TideError> {
    let h = &cfg.hotspots;
    if !(h.cluster_radius_m.is_finite() && h.cluster_radius_m > 0.0) {
        return Err(TideError::Config(
            "hotspots.cluster_radius_m must be positive".into(),
        ));
    }
    if !(h.min_radius_m.is_finite() && h.min_radius_m >= 0.0) {
        return Err(TideError::Config(
            "hotspots.min_radius_m must not be negative".into(),
        ));
    }
    if h.min_reports < 1 {
        return Err(TideError::Config("hotspots.min_reports must be >= 1".into()));
    }
    let t = cfg.classifier.hazard_confidence_threshold;
    if !(0.0..=1.0).contains(&t) {
        return Err(TideError::Config(
            "classifier.hazard_confidence_threshold must be within [0, 1]".into(),
        ));
    }
    Ok(())
}

fn default_db_path() -> PathBuf {
    PathBuf::from("data/tidewatch.db")
}

fn default_cluster_radius() -> f64 {
    10_000.0
}

fn default_min_radius() -> f64 {
    2_000.0
}

fn default_min_reports() -> usize {
    2
}

fn default_hazard_threshold() -> f64 {
    0.3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let cfg = parse_config("").unwrap();
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.hotspots.cluster_radius_m, 10_000.0);
        assert_eq!(cfg.hotspots.min_radius_m, 2_000.0);
        assert_eq!(cfg.classifier.hazard_confidence_threshold, 0.3);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let cfg = parse_config(
            r#"
            db_path = "/tmp/tw.db"

            [hotspots]
            cluster_radius_m = 5000.0
            "#,
        )
        .unwrap();
        assert_eq!(cfg.db_path, PathBuf::from("/tmp/tw.db"));
        assert_eq!(cfg.hotspots.cluster_radius_m, 5_000.0);
        assert_eq!(cfg.hotspots.min_reports, 2);
    }

    #[test]
    fn rejects_nonsense_values() {
        assert!(parse_config("[hotspots]\ncluster_radius_m = -1.0").is_err());
        assert!(parse_config("[classifier]\nhazard_confidence_threshold = 2.0").is_err());
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let cfg = load_config(Some(Path::new("/nonexistent/tidewatch.toml"))).unwrap();
        assert_eq!(cfg, AppConfig::default());
    }
}
