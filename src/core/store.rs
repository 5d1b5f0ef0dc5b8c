use std::path::Path;

use anyhow::Result;
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};

use crate::core::error::TideError;
use crate::core::types::{HazardType, Report, Severity, SocialPost};

/// Listing cap for social posts, newest first.
pub const POST_LIST_LIMIT: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportOrder {
    #[default]
    NewestFirst,
    /// Insertion order; what the hotspot query uses.
    Inserted,
}

#[derive(Debug, Clone, Default)]
pub struct ReportFilter {
    pub since: Option<DateTime<Utc>>,
    pub hazard_type: Option<HazardType>,
    pub severity: Option<Severity>,
    pub verified: Option<bool>,
    pub order: ReportOrder,
}

#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    pub platform: Option<String>,
    pub hazard_type: Option<HazardType>,
    pub is_relevant: Option<bool>,
    pub since: Option<DateTime<Utc>>,
}

pub struct Store {
    conn: Connection,
}

impl Store {
    pub fn new(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    pub fn in_memory() -> Result<Self> {
        let store = Self {
            conn: Connection::open_in_memory()?,
        };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS reports (
              id TEXT PRIMARY KEY,
              title TEXT NOT NULL,
              description TEXT NOT NULL,
              hazard_type TEXT NOT NULL,
              severity TEXT NOT NULL,
              latitude REAL NOT NULL,
              longitude REAL NOT NULL,
              location TEXT NOT NULL,
              status TEXT NOT NULL,
              verified INTEGER NOT NULL,
              created_at TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_reports_created ON reports(created_at);

            CREATE TABLE IF NOT EXISTS social_posts (
              id TEXT PRIMARY KEY,
              platform TEXT NOT NULL,
              post_id TEXT NOT NULL,
              content TEXT NOT NULL,
              author TEXT NOT NULL,
              latitude REAL,
              longitude REAL,
              location TEXT,
              hazard_type TEXT,
              sentiment TEXT NOT NULL,
              confidence REAL NOT NULL,
              is_relevant INTEGER NOT NULL,
              created_at TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_posts_created ON social_posts(created_at);
            ",
        )?;
        Ok(())
    }

    pub fn insert_report(&self, report: &Report) -> Result<()> {
        self.conn.execute(
            "INSERT INTO reports
             (id, title, description, hazard_type, severity, latitude, longitude, location, status, verified, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            params![
                report.id,
                report.title,
                report.description,
                report.hazard_type.as_str(),
                report.severity.as_str(),
                report.latitude,
                report.longitude,
                report.location,
                report.status.as_str(),
                report.verified,
                timestamp(&report.created_at),
            ],
        )?;
        Ok(())
    }

    pub fn list_reports(&self, filter: &ReportFilter) -> Result<Vec<Report>> {
        let mut sql = String::from(
            "SELECT id, title, description, hazard_type, severity, latitude, longitude, location, status, verified, created_at
             FROM reports WHERE 1 = 1",
        );
        let mut args: Vec<Value> = Vec::new();
        if let Some(since) = &filter.since {
            sql.push_str(" AND created_at >= ?");
            args.push(Value::Text(timestamp(since)));
        }
        if let Some(hazard) = filter.hazard_type {
            sql.push_str(" AND hazard_type = ?");
            args.push(Value::Text(hazard.as_str().to_string()));
        }
        if let Some(severity) = filter.severity {
            sql.push_str(" AND severity = ?");
            args.push(Value::Text(severity.as_str().to_string()));
        }
        if let Some(verified) = filter.verified {
            sql.push_str(" AND verified = ?");
            args.push(Value::Integer(verified as i64));
        }
        match filter.order {
            ReportOrder::NewestFirst => sql.push_str(" ORDER BY created_at DESC, rowid DESC"),
            ReportOrder::Inserted => sql.push_str(" ORDER BY rowid ASC"),
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(args.iter()), ReportRow::from_row)?;
        let mut out = Vec::new();
        for row in rows {
            out.push(row?.into_report()?);
        }
        Ok(out)
    }

    pub fn report_exists(&self, id: &str) -> Result<bool> {
        let found = self
            .conn
            .query_row("SELECT 1 FROM reports WHERE id = ?1", params![id], |_| Ok(()))
            .optional()?;
        Ok(found.is_some())
    }

    pub fn post_exists(&self, id: &str) -> Result<bool> {
        let found = self
            .conn
            .query_row("SELECT 1 FROM social_posts WHERE id = ?1", params![id], |_| {
                Ok(())
            })
            .optional()?;
        Ok(found.is_some())
    }

    pub fn insert_post(&self, post: &SocialPost) -> Result<()> {
        self.conn.execute(
            "INSERT INTO social_posts
             (id, platform, post_id, content, author, latitude, longitude, location, hazard_type, sentiment, confidence, is_relevant, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
            params![
                post.id,
                post.platform,
                post.post_id,
                post.content,
                post.author,
                post.latitude,
                post.longitude,
                post.location,
                post.hazard_type.map(|h| h.as_str()),
                post.sentiment.as_str(),
                post.confidence,
                post.is_relevant,
                timestamp(&post.created_at),
            ],
        )?;
        Ok(())
    }

    pub fn list_posts(&self, filter: &PostFilter) -> Result<Vec<SocialPost>> {
        let mut sql = String::from(
            "SELECT id, platform, post_id, content, author, latitude, longitude, location, hazard_type, sentiment, confidence, is_relevant, created_at
             FROM social_posts WHERE 1 = 1",
        );
        let mut args: Vec<Value> = Vec::new();
        if let Some(platform) = &filter.platform {
            sql.push_str(" AND platform = ?");
            args.push(Value::Text(platform.clone()));
        }
        if let Some(hazard) = filter.hazard_type {
            sql.push_str(" AND hazard_type = ?");
            args.push(Value::Text(hazard.as_str().to_string()));
        }
        if let Some(relevant) = filter.is_relevant {
            sql.push_str(" AND is_relevant = ?");
            args.push(Value::Integer(relevant as i64));
        }
        if let Some(since) = &filter.since {
            sql.push_str(" AND created_at >= ?");
            args.push(Value::Text(timestamp(since)));
        }
        sql.push_str(" ORDER BY created_at DESC, rowid DESC LIMIT ?");
        args.push(Value::Integer(POST_LIST_LIMIT as i64));

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(args.iter()), PostRow::from_row)?;
        let mut out = Vec::new();
        for row in rows {
            out.push(row?.into_post()?);
        }
        Ok(out)
    }
}

/// Fixed-width UTC timestamps so that text comparison in SQL matches time order.
fn timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, TideError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| TideError::Db(format!("bad timestamp {}: {}", value, e)))
}

struct ReportRow {
    id: String,
    title: String,
    description: String,
    hazard_type: String,
    severity: String,
    latitude: f64,
    longitude: f64,
    location: String,
    status: String,
    verified: bool,
    created_at: String,
}

impl ReportRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get(2)?,
            hazard_type: row.get(3)?,
            severity: row.get(4)?,
            latitude: row.get(5)?,
            longitude: row.get(6)?,
            location: row.get(7)?,
            status: row.get(8)?,
            verified: row.get(9)?,
            created_at: row.get(10)?,
        })
    }

    fn into_report(self) -> Result<Report, TideError> {
        Ok(Report {
            hazard_type: self.hazard_type.parse()?,
            severity: self.severity.parse()?,
            status: self.status.parse()?,
            created_at: parse_timestamp(&self.created_at)?,
            id: self.id,
            title: self.title,
            description: self.description,
            latitude: self.latitude,
            longitude: self.longitude,
            location: self.location,
            verified: self.verified,
        })
    }
}

struct PostRow {
    id: String,
    platform: String,
    post_id: String,
    content: String,
    author: String,
    latitude: Option<f64>,
    longitude: Option<f64>,
    location: Option<String>,
    hazard_type: Option<String>,
    sentiment: String,
    confidence: f64,
    is_relevant: bool,
    created_at: String,
}

impl PostRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            platform: row.get(1)?,
            post_id: row.get(2)?,
            content: row.get(3)?,
            author: row.get(4)?,
            latitude: row.get(5)?,
            longitude: row.get(6)?,
            location: row.get(7)?,
            hazard_type: row.get(8)?,
            sentiment: row.get(9)?,
            confidence: row.get(10)?,
            is_relevant: row.get(11)?,
            created_at: row.get(12)?,
        })
    }

    fn into_post(self) -> Result<SocialPost, TideError> {
        let hazard_type = match self.hazard_type.as_deref() {
            Some(raw) => Some(raw.parse::<HazardType>()?),
            None => None,
        };
        Ok(SocialPost {
            hazard_type,
            sentiment: self.sentiment.parse()?,
            created_at: parse_timestamp(&self.created_at)?,
            id: self.id,
            platform: self.platform,
            post_id: self.post_id,
            content: self.content,
            author: self.author,
            latitude: self.latitude,
            longitude: self.longitude,
            location: self.location,
            confidence: self.confidence,
            is_relevant: self.is_relevant,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{ReportStatus, Sentiment};
    use chrono::Duration;

    fn at(hours_ago: i64) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2025-06-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
            - Duration::hours(hours_ago)
    }

    fn report(id: &str, hazard: HazardType, severity: Severity, hours_ago: i64) -> Report {
        Report {
            id: id.to_string(),
            title: format!("report {}", id),
            description: "desc".to_string(),
            hazard_type: hazard,
            severity,
            latitude: 13.0,
            longitude: 80.0,
            location: "Chennai".to_string(),
            status: ReportStatus::Pending,
            verified: false,
            created_at: at(hours_ago),
        }
    }

    #[test]
    fn report_round_trips_through_sqlite() {
        let store = Store::in_memory().unwrap();
        let original = report("r1", HazardType::Tsunami, Severity::High, 1);
        store.insert_report(&original).unwrap();
        let loaded = store.list_reports(&ReportFilter::default()).unwrap();
        assert_eq!(loaded, vec![original]);
    }

    #[test]
    fn report_filters_combine() {
        let store = Store::in_memory().unwrap();
        store
            .insert_report(&report("old", HazardType::Flooding, Severity::High, 48))
            .unwrap();
        store
            .insert_report(&report("new", HazardType::Flooding, Severity::High, 2))
            .unwrap();
        store
            .insert_report(&report("low", HazardType::Flooding, Severity::Low, 1))
            .unwrap();

        let filter = ReportFilter {
            since: Some(at(24)),
            severity: Some(Severity::High),
            ..Default::default()
        };
        let ids: Vec<String> = store
            .list_reports(&filter)
            .unwrap()
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec!["new"]);
    }

    #[test]
    fn inserted_order_is_preserved_for_hotspot_queries() {
        let store = Store::in_memory().unwrap();
        store
            .insert_report(&report("b", HazardType::Other, Severity::Low, 1))
            .unwrap();
        store
            .insert_report(&report("a", HazardType::Other, Severity::Low, 5))
            .unwrap();
        let filter = ReportFilter {
            order: ReportOrder::Inserted,
            ..Default::default()
        };
        let ids: Vec<String> = store
            .list_reports(&filter)
            .unwrap()
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn post_listing_is_capped() {
        let store = Store::in_memory().unwrap();
        for i in 0..(POST_LIST_LIMIT + 5) {
            store
                .insert_post(&SocialPost {
                    id: format!("p{}", i),
                    platform: "TWITTER".to_string(),
                    post_id: format!("tweet_{}", i),
                    content: "storm at the coast".to_string(),
                    author: "@watcher".to_string(),
                    latitude: None,
                    longitude: None,
                    location: None,
                    hazard_type: None,
                    sentiment: Sentiment::Neutral,
                    confidence: 0.8,
                    is_relevant: true,
                    created_at: at(i as i64),
                })
                .unwrap();
        }
        let posts = store.list_posts(&PostFilter::default()).unwrap();
        assert_eq!(posts.len(), POST_LIST_LIMIT);
        assert_eq!(posts[0].id, "p0");
    }
}
