//! Handlers for the `/posts` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use threadline_core::error::CoreError;
use threadline_core::posts::{validate_post_content, validate_post_title};
use threadline_core::types::DbId;
use threadline_db::models::post::{CreatePost, UpdatePost};
use threadline_db::repositories::PostRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for listing posts.
#[derive(Debug, Deserialize)]
pub struct PostListParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// POST /posts
///
/// Create a new post.
pub async fn create_post(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreatePost>,
) -> AppResult<impl IntoResponse> {
    validate_post_title(&input.title).map_err(AppError::BadRequest)?;
    validate_post_content(&input.content).map_err(AppError::BadRequest)?;

    let post = PostRepo::create(&state.pool, auth.user_id, &input).await?;

    tracing::info!(user_id = auth.user_id, post_id = post.id, "Post created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: post })))
}

/// GET /posts?limit=&offset=
///
/// List posts, newest first.
pub async fn list_posts(
    State(state): State<AppState>,
    Query(params): Query<PostListParams>,
) -> AppResult<impl IntoResponse> {
    let posts = PostRepo::list(&state.pool, params.limit, params.offset).await?;
    Ok(Json(DataResponse { data: posts }))
}

/// GET /posts/{id}
///
/// Get a single post by ID.
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let post = PostRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Post", id }))?;

    Ok(Json(DataResponse { data: post }))
}

/// PUT /posts/{id}
///
/// Replace a post's title and content. Author-only.
pub async fn update_post(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePost>,
) -> AppResult<impl IntoResponse> {
    validate_post_title(&input.title).map_err(AppError::BadRequest)?;
    validate_post_content(&input.content).map_err(AppError::BadRequest)?;

    let post = PostRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Post", id }))?;

    if post.author_id != auth.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the author can edit a post".into(),
        )));
    }

    let updated = PostRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Post", id }))?;

    tracing::info!(user_id = auth.user_id, post_id = id, "Post updated");

    Ok(Json(DataResponse { data: updated }))
}

/// DELETE /posts/{id}
///
/// Delete a post and, via cascade, its comments and likes. Author-only.
pub async fn delete_post(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let post = PostRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Post", id }))?;

    if post.author_id != auth.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the author can delete a post".into(),
        )));
    }

    let deleted = PostRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Post", id }));
    }

    tracing::info!(user_id = auth.user_id, post_id = id, "Post deleted");

    Ok(StatusCode::NO_CONTENT)
}
