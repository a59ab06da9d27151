use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;

use scrawl::app::AppState;
use scrawl::config::ServerConfig;
use scrawl::store::client::{FilePostStore, PostStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scrawl=info,tower_http=info".into()),
        )
        .init();

    tracing::info!("Starting scrawl server...");

    let config = ServerConfig::from_env()?;

    let store: Arc<dyn PostStore> = Arc::new(FilePostStore::new(
        &config.store_path,
        &config.template_path,
    ));
    let app = scrawl::app::router(AppState { store }, &config.assets_dir);

    // Start the server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    axum::serve(listener, app.into_make_service())
        .await
        .context("Server error")?;

    Ok(())
}
