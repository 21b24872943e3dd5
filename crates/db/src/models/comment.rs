//! Comment entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use threadline_core::tree::FlatComment;
use threadline_core::types::{DbId, Timestamp};

/// A row from the `comments` table.
///
/// `parent_id` is immutable once set and always references a comment on the
/// same post. `deleted` only ever transitions false -> true; the row itself
/// is never removed while its post lives, so replies stay attached.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Comment {
    pub id: DbId,
    pub post_id: DbId,
    pub author_id: DbId,
    pub parent_id: Option<DbId>,
    pub content: String,
    pub deleted: bool,
    pub created_at: Timestamp,
}

/// A comment row joined with its author's username, the shape consumed by
/// the tree assembler.
#[derive(Debug, Clone, FromRow)]
pub struct CommentWithAuthor {
    pub id: DbId,
    pub post_id: DbId,
    pub author_id: DbId,
    pub username: String,
    pub parent_id: Option<DbId>,
    pub content: String,
    pub deleted: bool,
    pub created_at: Timestamp,
}

impl From<CommentWithAuthor> for FlatComment {
    fn from(row: CommentWithAuthor) -> Self {
        FlatComment {
            id: row.id,
            author_id: row.author_id,
            username: row.username,
            parent_id: row.parent_id,
            content: row.content,
            deleted: row.deleted,
            created_at: row.created_at,
        }
    }
}

/// DTO for creating a new comment under a post.
#[derive(Debug, Deserialize)]
pub struct CreateComment {
    pub content: String,
    pub parent_id: Option<DbId>,
}

/// DTO for editing a comment's content.
#[derive(Debug, Deserialize)]
pub struct UpdateComment {
    pub content: String,
}
