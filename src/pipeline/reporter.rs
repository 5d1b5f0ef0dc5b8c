use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use crate::core::types::{ClassificationResult, Hotspot, OutputFormat, Report, SocialPost};

/// Flat view of a record for Markdown and CSV output.
pub trait Tabular {
    fn headers() -> &'static [&'static str];
    fn cells(&self) -> Vec<String>;
}

impl Tabular for Report {
    fn headers() -> &'static [&'static str] {
        &[
            "id", "created_at", "hazard_type", "severity", "latitude", "longitude", "location",
            "verified", "title",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.created_at.to_rfc3339(),
            self.hazard_type.to_string(),
            self.severity.to_string(),
            format!("{:.4}", self.latitude),
            format!("{:.4}", self.longitude),
            self.location.clone(),
            self.verified.to_string(),
            self.title.clone(),
        ]
    }
}

impl Tabular for Hotspot {
    fn headers() -> &'static [&'static str] {
        &[
            "id", "latitude", "longitude", "radius_m", "intensity", "hazard_type", "reports",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            format!("{:.4}", self.latitude),
            format!("{:.4}", self.longitude),
            format!("{:.0}", self.radius),
            format!("{:.2}", self.intensity),
            self.hazard_type.to_string(),
            self.report_count.to_string(),
        ]
    }
}

impl Tabular for SocialPost {
    fn headers() -> &'static [&'static str] {
        &[
            "id", "created_at", "platform", "author", "hazard_type", "sentiment", "confidence",
            "location", "content",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.created_at.to_rfc3339(),
            self.platform.clone(),
            self.author.clone(),
            optional(self.hazard_type.map(|h| h.to_string())),
            self.sentiment.to_string(),
            format!("{:.2}", self.confidence),
            optional(self.location.clone()),
            self.content.clone(),
        ]
    }
}

impl Tabular for ClassificationResult {
    fn headers() -> &'static [&'static str] {
        &[
            "is_relevant", "hazard_type", "sentiment", "confidence", "extracted_location",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.is_relevant.to_string(),
            optional(self.hazard_type.map(|h| h.to_string())),
            self.sentiment.to_string(),
            format!("{:.2}", self.confidence),
            optional(self.extracted_location.clone()),
        ]
    }
}

fn optional(value: Option<String>) -> String {
    value.unwrap_or_else(|| "-".to_string())
}

pub fn render<T: Serialize + Tabular>(records: &[T], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(records)?)),
        OutputFormat::Jsonl => {
            let mut out = String::new();
            for record in records {
                out.push_str(&serde_json::to_string(record)?);
                out.push('\n');
            }
            Ok(out)
        }
        OutputFormat::Markdown => Ok(render_markdown(records)),
        OutputFormat::Csv => Ok(render_csv(records)),
    }
}

/// Writes to `path` when given, otherwise to stdout.
pub fn emit<T: Serialize + Tabular>(
    records: &[T],
    format: OutputFormat,
    path: Option<&Path>,
) -> Result<()> {
    let body = render(records, format)?;
    match path {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(path, body)?;
            tracing::info!("wrote {} records to {}", records.len(), path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(body.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn render_markdown<T: Tabular>(records: &[T]) -> String {
    let headers = T::headers();
    let mut out = String::new();
    out.push_str(&format!("| {} |\n", headers.join(" | ")));
    out.push_str(&format!("|{}\n", "---|".repeat(headers.len())));
    for record in records {
        let cells: Vec<String> = record
            .cells()
            .into_iter()
            .map(|c| c.replace('|', "\\|").replace('\n', " "))
            .collect();
        out.push_str(&format!("| {} |\n", cells.join(" | ")));
    }
    if records.is_empty() {
        out.push_str("\n_No records._\n");
    }
    out
}

fn render_csv<T: Tabular>(records: &[T]) -> String {
    let mut out = String::new();
    out.push_str(&T::headers().join(","));
    out.push('\n');
    for record in records {
        let cells: Vec<String> = record.cells().iter().map(|c| csv_escape(c)).collect();
        out.push_str(&cells.join(","));
        out.push('\n');
    }
    out
}

fn csv_escape(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
