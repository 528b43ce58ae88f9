mod config;

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use workboard_api::routes;
use workboard_api::state::AppStateInner;
use workboard_api::store::ImageStore;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "workboard_server=debug,workboard_api=debug,workboard_db=debug,tower_http=debug"
                    .into()
            }),
        )
        .init();

    let config = Config::from_env();

    // Store handles are built here and injected; nothing global.
    let db = workboard_db::Database::open(&config.db_path)?;
    let user_images = ImageStore::new(config.user_image_dir.clone()).await?;
    let company_images = ImageStore::new(config.company_image_dir.clone()).await?;

    let state = Arc::new(AppStateInner {
        db,
        user_images,
        company_images,
    });

    // Uploaded images are served straight back as static files under the
    // same relative paths the records carry.
    let app = routes::router(state)
        .nest_service("/images", ServeDir::new(&config.user_image_dir))
        .nest_service("/company-images", ServeDir::new(&config.company_image_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Workboard server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();
    #[cfg(unix)]
    {
        let mut sigterm = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler");
        tokio::select! {
            _ = ctrl_c => info!("Received Ctrl+C, shutting down..."),
            _ = sigterm.recv() => info!("Received SIGTERM, shutting down..."),
        }
    }
    #[cfg(not(unix))]
    {
        ctrl_c.await.ok();
        info!("Received Ctrl+C, shutting down...");
    }
}
