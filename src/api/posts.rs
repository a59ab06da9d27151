use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::post::{coerce_id, Post, PostDocument};
use crate::store::client::PostStore;

/// Response for a successful delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletePostResponse {
    pub success: bool,
    pub message: String,
    pub resources: Vec<Post>,
}

/// Response for the post listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostListResponse {
    pub posts: Vec<Post>,
}

/// Read the effective document: the live store, or the template when the
/// live store is unreadable. When both fail, the template's error is the one
/// surfaced to the caller.
async fn load_effective(store: &dyn PostStore) -> Result<PostDocument, AppError> {
    match store.read_store().await {
        Ok(doc) => Ok(doc),
        Err(e) => {
            tracing::warn!("Live store unreadable, falling back to template: {e}");
            store.read_template().await
        }
    }
}

/// Core delete logic, separated from the HTTP layer for testability.
///
/// Removes every record whose ID numerically equals `raw_id` and persists
/// the filtered document back to the live store path. The read-modify-write
/// cycle is unsynchronized: two concurrent deletes can lose an update.
pub async fn process_delete_post(
    store: &dyn PostStore,
    raw_id: &str,
) -> Result<DeletePostResponse, AppError> {
    // 1. Read the live document, or the template if the live one is unreadable
    let mut doc = load_effective(store).await?;

    // 2. Normalize the requested ID (non-numeric text matches nothing)
    let target = coerce_id(raw_id);

    // 3. Keep every record that does not match the target
    let initial_len = doc.resources.len();
    doc.resources.retain(|post| !post.id.matches(target));

    // 4. Nothing removed: report not-found without writing
    if doc.resources.len() == initial_len {
        return Err(AppError::NotFound(format!(
            "Blog post with ID {raw_id} not found"
        )));
    }

    // 5. Persist the filtered document to the live store path
    store.write_store(&doc).await?;

    Ok(DeletePostResponse {
        success: true,
        message: format!("Blog post with ID {raw_id} deleted successfully"),
        resources: doc.resources,
    })
}

/// Core listing logic: a stateless read of the effective document.
///
/// Uses the same template fallback as the delete path but never writes, so a
/// fresh checkout lists the seed posts without creating the live file.
pub async fn process_list_posts(store: &dyn PostStore) -> Result<PostListResponse, AppError> {
    let doc = load_effective(store).await?;
    Ok(PostListResponse {
        posts: doc.resources,
    })
}

/// Axum handler for `DELETE /api/posts/{id}`.
pub async fn delete_post_handler(
    axum::extract::State(state): axum::extract::State<crate::app::AppState>,
    axum::extract::Path(id): axum::extract::Path<String>,
) -> Result<axum::Json<DeletePostResponse>, AppError> {
    let response = process_delete_post(state.store.as_ref(), &id).await?;
    Ok(axum::Json(response))
}

/// Axum handler for `GET /api/posts`.
pub async fn list_posts_handler(
    axum::extract::State(state): axum::extract::State<crate::app::AppState>,
) -> Result<axum::Json<PostListResponse>, AppError> {
    let response = process_list_posts(state.store.as_ref()).await?;
    Ok(axum::Json(response))
}
