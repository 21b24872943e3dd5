//! Route tree for the API.

pub mod auth;
pub mod comments;
pub mod health;
pub mod posts;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                 register (public)
/// /auth/login                    login (public)
/// /auth/me                       current user (requires auth)
///
/// /posts                         create (auth), list (public)
/// /posts/{id}                    get (public), update/delete (author)
/// /posts/{post_id}/comments      create (auth), list forest (public)
///
/// /comments/{id}                 edit/soft-delete (author)
/// /comments/{id}/like            toggle like (auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/posts", posts::router())
        .nest("/comments", comments::router())
}
