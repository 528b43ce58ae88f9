//! Database row types — these map directly to SQLite rows.
//! Distinct from the workboard-types API models to keep the DB layer
//! independent.

pub struct UserRow {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub image_path: Option<String>,
    pub account_type: String,
    pub created_at: String,
}

pub struct CompanyRow {
    pub id: String,
    pub company_name: String,
    pub image_path: String,
    pub created_at: String,
    pub updated_at: String,
}

pub struct JobRow {
    pub id: String,
    pub company_name: String,
    pub job_title: String,
    pub description: String,
    pub salary: String,
    pub apply_link: String,
    pub posted_at: String,
}
