use std::sync::Arc;

use tracing::error;
use workboard_db::Database;

use crate::error::ApiError;
use crate::store::ImageStore;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub db: Database,
    pub user_images: ImageStore,
    pub company_images: ImageStore,
}

/// Run a blocking rusqlite call off the async runtime.
pub(crate) async fn with_db<T, F>(state: &AppState, f: F) -> Result<T, ApiError>
where
    F: FnOnce(&Database) -> anyhow::Result<T> + Send + 'static,
    T: Send + 'static,
{
    let state = state.clone();
    tokio::task::spawn_blocking(move || f(&state.db))
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            ApiError::Store(anyhow::anyhow!("task join error: {}", e))
        })?
        .map_err(ApiError::Store)
}
