use std::path::PathBuf;

/// Server configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
    pub user_image_dir: PathBuf,
    pub company_image_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("WORKBOARD_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: std::env::var("WORKBOARD_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),
            db_path: std::env::var("WORKBOARD_DB_PATH")
                .unwrap_or_else(|_| "workboard.db".into())
                .into(),
            user_image_dir: std::env::var("WORKBOARD_IMAGE_DIR")
                .unwrap_or_else(|_| "images".into())
                .into(),
            company_image_dir: std::env::var("WORKBOARD_COMPANY_IMAGE_DIR")
                .unwrap_or_else(|_| "company-images".into())
                .into(),
        }
    }
}
