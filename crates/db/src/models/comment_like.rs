//! Comment like model and aggregate shapes.

use sqlx::FromRow;
use threadline_core::types::{DbId, Timestamp};

/// A row from the `comment_likes` table. At most one exists per
/// (comment, user) pair, enforced by `uq_comment_likes_comment_user`.
#[derive(Debug, Clone, FromRow)]
pub struct CommentLike {
    pub id: DbId,
    pub comment_id: DbId,
    pub user_id: DbId,
    pub created_at: Timestamp,
}

/// One row of the batched per-comment like count query.
#[derive(Debug, Clone, FromRow)]
pub struct LikeCount {
    pub comment_id: DbId,
    pub count: i64,
}
