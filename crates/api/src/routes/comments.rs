//! Route definitions for comment-scoped operations (edit, delete, like).
//!
//! Creation and listing live under `/posts/{post_id}/comments`; see the
//! posts router.

use axum::routing::{post, put};
use axum::Router;

use crate::handlers::{comments, likes};
use crate::state::AppState;

/// Routes mounted at `/comments`.
///
/// ```text
/// PUT    /{id}       -> update_comment (author only)
/// DELETE /{id}       -> delete_comment (author only, soft)
/// POST   /{id}/like  -> toggle_like
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}",
            put(comments::update_comment).delete(comments::delete_comment),
        )
        .route("/{id}/like", post(likes::toggle_like))
}
