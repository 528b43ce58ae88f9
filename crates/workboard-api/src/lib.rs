pub mod companies;
pub mod error;
pub mod jobs;
pub mod routes;
pub mod state;
pub mod store;
pub mod upload;
pub mod users;
pub mod validation;

use chrono::{DateTime, Utc};
use tracing::warn;
use uuid::Uuid;

pub(crate) fn parse_id(raw: &str) -> Uuid {
    raw.parse().unwrap_or_else(|e| {
        warn!("Corrupt row id '{}': {}", raw, e);
        Uuid::default()
    })
}

pub(crate) fn parse_timestamp(raw: &str) -> DateTime<Utc> {
    raw.parse::<DateTime<Utc>>()
        .or_else(|_| {
            // SQLite-default timestamps are "YYYY-MM-DD HH:MM:SS" without
            // timezone. Parse as naive UTC and convert.
            chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").map(|ndt| ndt.and_utc())
        })
        .unwrap_or_else(|e| {
            warn!("Corrupt timestamp '{}': {}", raw, e);
            DateTime::default()
        })
}
