//! Handlers for threaded comments: create, list as a reply tree, edit, and
//! soft-delete.
//!
//! Listing is the hot path: one row query, one batched like-count query,
//! then a linear in-memory assembly -- never a query per node.

use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use threadline_core::comments::validate_comment_content;
use threadline_core::error::CoreError;
use threadline_core::tree::{assemble, CommentNode, FlatComment};
use threadline_core::types::DbId;
use threadline_db::models::comment::{Comment, CreateComment, UpdateComment};
use threadline_db::repositories::{CommentLikeRepo, CommentRepo, PostRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Shape a bare comment row into a childless response node, resolving the
/// author's username.
async fn single_node(
    state: &AppState,
    comment: Comment,
    likes_count: i64,
) -> AppResult<CommentNode> {
    let username = UserRepo::find_by_id(&state.pool, comment.author_id)
        .await?
        .map(|u| u.username)
        .ok_or_else(|| {
            AppError::InternalError(format!(
                "author {} missing for comment {}",
                comment.author_id, comment.id
            ))
        })?;

    Ok(CommentNode::from_flat(
        FlatComment {
            id: comment.id,
            author_id: comment.author_id,
            username,
            parent_id: comment.parent_id,
            content: comment.content,
            deleted: comment.deleted,
            created_at: comment.created_at,
        },
        likes_count,
    ))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /posts/{post_id}/comments
///
/// Create a comment under a post, optionally as a reply to another comment
/// on the same post.
pub async fn create_comment(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(post_id): Path<DbId>,
    Json(input): Json<CreateComment>,
) -> AppResult<impl IntoResponse> {
    validate_comment_content(&input.content).map_err(AppError::BadRequest)?;

    PostRepo::find_by_id(&state.pool, post_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Post",
            id: post_id,
        }))?;

    // A reply's parent must exist under the same post. The parent may
    // already be soft-deleted; replying to a deleted comment is allowed.
    if let Some(parent_id) = input.parent_id {
        let parent = CommentRepo::find_by_id(&state.pool, parent_id).await?;
        match parent {
            Some(parent) if parent.post_id == post_id => {}
            _ => {
                return Err(AppError::Core(CoreError::Validation(format!(
                    "Invalid parent comment {parent_id} for post {post_id}"
                ))));
            }
        }
    }

    let comment = CommentRepo::create(&state.pool, post_id, auth.user_id, &input).await?;

    tracing::info!(
        user_id = auth.user_id,
        comment_id = comment.id,
        post_id,
        parent_id = ?comment.parent_id,
        "Comment created"
    );

    // A fresh comment has no likes and no children; no need to re-assemble.
    let node = single_node(&state, comment, 0).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: node })))
}

/// GET /posts/{post_id}/comments
///
/// List the full reply forest for a post. A post with no comments (or an
/// unknown post id) yields an empty forest, not an error.
pub async fn list_comments(
    State(state): State<AppState>,
    Path(post_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let rows = CommentRepo::list_by_post_with_author(&state.pool, post_id).await?;

    let like_counts: HashMap<DbId, i64> = if rows.is_empty() {
        HashMap::new()
    } else {
        let ids: Vec<DbId> = rows.iter().map(|r| r.id).collect();
        CommentLikeRepo::count_for_many(&state.pool, &ids)
            .await?
            .into_iter()
            .map(|row| (row.comment_id, row.count))
            .collect()
    };

    let flat: Vec<FlatComment> = rows.into_iter().map(Into::into).collect();
    let forest = assemble(flat, &like_counts);

    Ok(Json(DataResponse { data: forest }))
}

/// PUT /comments/{id}
///
/// Edit a comment's content. Author-only; a soft-deleted comment cannot be
/// edited back to life.
pub async fn update_comment(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateComment>,
) -> AppResult<impl IntoResponse> {
    validate_comment_content(&input.content).map_err(AppError::BadRequest)?;

    let comment = CommentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Comment",
            id,
        }))?;

    if comment.author_id != auth.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the author can edit a comment".into(),
        )));
    }

    if comment.deleted {
        return Err(AppError::Core(CoreError::Forbidden(
            "Deleted comments cannot be edited".into(),
        )));
    }

    let updated = CommentRepo::update_content(&state.pool, id, &input.content)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Comment",
            id,
        }))?;

    tracing::info!(user_id = auth.user_id, comment_id = id, "Comment edited");

    let likes_count = CommentLikeRepo::count_for(&state.pool, id).await?;
    let node = single_node(&state, updated, likes_count).await?;
    Ok(Json(DataResponse { data: node }))
}

/// DELETE /comments/{id}
///
/// Soft-delete a comment: the row stays, the content is redacted, replies
/// remain attached. Author-only, and idempotent -- deleting an
/// already-deleted own comment succeeds silently.
pub async fn delete_comment(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let comment = CommentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Comment",
            id,
        }))?;

    if comment.author_id != auth.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the author can delete a comment".into(),
        )));
    }

    CommentRepo::soft_delete(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Comment",
            id,
        }))?;

    tracing::info!(user_id = auth.user_id, comment_id = id, "Comment deleted");

    Ok(StatusCode::NO_CONTENT)
}
