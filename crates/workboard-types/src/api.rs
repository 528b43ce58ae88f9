use serde::{Deserialize, Serialize};

use crate::models::{Company, Job};

// -- Users --

/// Request fields are optional so that absent fields surface as our own
/// 400 responses instead of a rejection at the deserialization layer.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditUserRequest {
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub password: Option<String>,
    pub old_password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteUserRequest {
    pub email: Option<String>,
}

/// The `/user/getAll` projection. The stored password hash is included
/// to stay wire-compatible with the service this replaces; see DESIGN.md.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadImageResponse {
    pub message: String,
    pub file_path: String,
}

// -- Companies --

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyImage {
    pub company_name: String,
    pub image_path: String,
}

#[derive(Debug, Serialize)]
pub struct CompanyUploadResponse {
    pub message: String,
    pub data: Company,
}

#[derive(Debug, Serialize)]
pub struct CompanyImagesResponse {
    pub message: String,
    pub images: Vec<CompanyImage>,
}

// -- Jobs --

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobRequest {
    pub company_name: Option<String>,
    pub job_title: Option<String>,
    pub description: Option<String>,
    pub salary: Option<String>,
    pub apply_link: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct JobCreatedResponse {
    pub message: String,
    pub job: Job,
}

#[derive(Debug, Serialize)]
pub struct JobListResponse {
    pub jobs: Vec<Job>,
}
