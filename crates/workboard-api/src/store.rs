use anyhow::Result;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

/// On-disk image storage.
///
/// Files are stored flat under `dir` and recorded as `{dir-name}/{file}`
/// relative paths, which is also where the static file service exposes
/// them.
pub struct ImageStore {
    dir: PathBuf,
}

impl ImageStore {
    pub async fn new(dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&dir).await?;
        info!("Image storage directory: {}", dir.display());
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write `data` under a timestamp-prefixed version of the client's
    /// file name and return the relative path for embedding in a record.
    pub async fn save(&self, original_name: &str, data: &[u8]) -> Result<String> {
        // Client-sent names are reduced to their final path component so
        // they cannot point outside the storage directory.
        let base = Path::new(original_name)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload");

        let stored = format!("{}-{}", chrono::Utc::now().timestamp_millis(), base);
        let path = self.dir.join(&stored);
        fs::write(&path, data).await?;

        let prefix = self
            .dir
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        Ok(format!("{}/{}", prefix, stored))
    }
}
