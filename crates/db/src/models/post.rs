//! Post entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use threadline_core::types::{DbId, Timestamp};

/// A row from the `posts` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Post {
    pub id: DbId,
    pub author_id: DbId,
    pub title: String,
    pub content: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new post.
#[derive(Debug, Deserialize)]
pub struct CreatePost {
    pub title: String,
    pub content: String,
}

/// DTO for updating a post. Both fields are replaced together.
#[derive(Debug, Deserialize)]
pub struct UpdatePost {
    pub title: String,
    pub content: String,
}
