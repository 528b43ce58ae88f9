use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A company record. One row is created per successful image upload;
/// there is no dedup by name, so the same company can appear many times.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: Uuid,
    pub company_name: String,
    pub image_path: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A job posting. Immutable after creation; `company_name` is a plain
/// string with no link to any company record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: Uuid,
    pub company_name: String,
    pub job_title: String,
    pub description: String,
    pub salary: String,
    pub apply_link: String,
    pub posted_at: DateTime<Utc>,
}
