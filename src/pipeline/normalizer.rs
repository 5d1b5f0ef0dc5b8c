//! Boundary validation: loosely-typed JSON bodies become typed drafts.

use serde::Deserialize;
use serde_json::Value;

use crate::core::error::TideError;
use crate::core::types::{HazardType, Severity};

/// Report creation body as it arrives.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawReport {
    pub title: Option<String>,
    pub description: Option<String>,
    pub hazard_type: Option<String>,
    pub severity: Option<String>,
    pub latitude: Option<Value>,
    pub longitude: Option<Value>,
    pub location: Option<String>,
}

/// Post creation body as it arrives.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPost {
    pub content: Option<String>,
    pub platform: Option<String>,
    pub author: Option<String>,
    pub location: Option<String>,
    pub latitude: Option<Value>,
    pub longitude: Option<Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportDraft {
    pub title: String,
    pub description: String,
    pub hazard_type: HazardType,
    pub severity: Severity,
    pub latitude: f64,
    pub longitude: f64,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PostDraft {
    pub content: String,
    pub platform: String,
    pub author: String,
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

pub fn normalize_report(raw: RawReport) -> Result<ReportDraft, TideError> {
    let title = required_text(raw.title, "title")?;
    let description = required_text(raw.description, "description")?;
    let hazard_type: HazardType = required_text(raw.hazard_type, "hazardType")?.parse()?;
    let severity: Severity = required_text(raw.severity, "severity")?.parse()?;
    let latitude = coordinate(raw.latitude.as_ref(), "latitude")?
        .ok_or_else(|| TideError::missing("latitude"))?;
    let longitude = coordinate(raw.longitude.as_ref(), "longitude")?
        .ok_or_else(|| TideError::missing("longitude"))?;
    let location = required_text(raw.location, "location")?;
    check_position(latitude, longitude)?;

    Ok(ReportDraft {
        title,
        description,
        hazard_type,
        severity,
        latitude,
        longitude,
        location,
    })
}

pub fn normalize_post(raw: RawPost) -> Result<PostDraft, TideError> {
    let content = required_text(raw.content, "content")?;
    let platform = required_text(raw.platform, "platform")?;
    let author = required_text(raw.author, "author")?;
    let latitude = coordinate(raw.latitude.as_ref(), "latitude")?;
    let longitude = coordinate(raw.longitude.as_ref(), "longitude")?;
    if let (Some(lat), Some(lon)) = (latitude, longitude) {
        check_position(lat, lon)?;
    }
    let location = raw
        .location
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty());

    Ok(PostDraft {
        content,
        platform,
        author,
        location,
        latitude,
        longitude,
    })
}

fn required_text(value: Option<String>, field: &str) -> Result<String, TideError> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(TideError::missing(field)),
    }
}

/// Accepts a JSON number or a numeric string; null and "" count as absent.
fn coordinate(value: Option<&Value>, field: &str) -> Result<Option<f64>, TideError> {
    let parsed = match value {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) if s.trim().is_empty() => return Ok(None),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    };
    match parsed {
        Some(v) if v.is_finite() => Ok(Some(v)),
        _ => Err(TideError::Validation(format!("{} is not a number", field))),
    }
}

fn check_position(latitude: f64, longitude: f64) -> Result<(), TideError> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(TideError::Validation(format!(
            "latitude out of range: {}",
            latitude
        )));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(TideError::Validation(format!(
            "longitude out of range: {}",
            longitude
        )));
    }
    Ok(())
}
