use std::path::Path;
use std::sync::Arc;

use axum::routing::{delete, get};
use axum::Router;
use tower_http::services::ServeDir;

use crate::api;
use crate::store::client::PostStore;

/// Shared state available to all request handlers.
///
/// The store is the only shared state; nothing else persists between
/// requests.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PostStore>,
}

/// Build the application router: the JSON API plus the static front end.
///
/// Unmatched paths fall through to the assets directory, which serves
/// `index.html` at the root.
pub fn router(state: AppState, assets_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/api/posts", get(api::posts::list_posts_handler))
        .route("/api/posts/{id}", delete(api::posts::delete_post_handler))
        .route("/health", get(api::health::health_handler))
        .fallback_service(ServeDir::new(assets_dir.as_ref()))
        .with_state(state)
}
