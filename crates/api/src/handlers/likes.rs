//! Handler for the per-comment like toggle.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use threadline_core::error::CoreError;
use threadline_core::types::DbId;
use threadline_db::repositories::{CommentLikeRepo, CommentRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Post-toggle like state for one (comment, user) pair.
#[derive(Debug, Serialize)]
pub struct LikeStatus {
    /// Whether the calling user likes the comment after this toggle.
    pub liked: bool,
    /// Total likes on the comment, read after the toggle.
    pub likes_count: i64,
}

/// POST /comments/{id}/like
///
/// Toggle the calling user's like on a comment. Two concurrent first-likes
/// both report `liked: true`; the storage constraint guarantees only one
/// row exists.
pub async fn toggle_like(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    CommentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Comment",
            id,
        }))?;

    let liked = CommentLikeRepo::toggle(&state.pool, id, auth.user_id).await?;

    // Read back the count in the same request so the response reflects the
    // toggle that was just applied.
    let likes_count = CommentLikeRepo::count_for(&state.pool, id).await?;

    tracing::info!(
        user_id = auth.user_id,
        comment_id = id,
        liked,
        likes_count,
        "Comment like toggled"
    );

    Ok(Json(DataResponse {
        data: LikeStatus { liked, likes_count },
    }))
}
