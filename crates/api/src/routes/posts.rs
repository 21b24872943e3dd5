//! Route definitions for the `/posts` resource, including the comment
//! endpoints scoped to a post.

use axum::routing::get;
use axum::Router;

use crate::handlers::{comments, posts};
use crate::state::AppState;

/// Routes mounted at `/posts`.
///
/// ```text
/// POST   /                     -> create_post
/// GET    /                     -> list_posts
/// GET    /{id}                 -> get_post
/// PUT    /{id}                 -> update_post (author only)
/// DELETE /{id}                 -> delete_post (author only)
/// POST   /{post_id}/comments   -> create_comment
/// GET    /{post_id}/comments   -> list_comments (reply forest)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(posts::list_posts).post(posts::create_post))
        .route(
            "/{id}",
            get(posts::get_post)
                .put(posts::update_post)
                .delete(posts::delete_post),
        )
        .route(
            "/{post_id}/comments",
            get(comments::list_comments).post(comments::create_comment),
        )
}
