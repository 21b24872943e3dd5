//! Repository for the `comments` table.
//!
//! Comments are append-only apart from content edits and the one-way
//! `deleted` flag; rows are never removed here so replies stay addressable.

use sqlx::PgPool;
use threadline_core::comments::REDACTED_CONTENT;
use threadline_core::types::DbId;

use crate::models::comment::{Comment, CommentWithAuthor, CreateComment};

/// Column list for comments queries.
const COLUMNS: &str = "id, post_id, author_id, parent_id, content, deleted, created_at";

/// Provides the durable operations behind the comment service.
pub struct CommentRepo;

impl CommentRepo {
    /// Insert a new comment, returning the created row.
    ///
    /// Referential checks (post exists, parent belongs to the same post) are
    /// the caller's job; this is a plain insert.
    pub async fn create(
        pool: &PgPool,
        post_id: DbId,
        author_id: DbId,
        input: &CreateComment,
    ) -> Result<Comment, sqlx::Error> {
        let query = format!(
            "INSERT INTO comments (post_id, author_id, parent_id, content)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(post_id)
            .bind(author_id)
            .bind(input.parent_id)
            .bind(&input.content)
            .fetch_one(pool)
            .await
    }

    /// Find a comment by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM comments WHERE id = $1");
        sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every comment for a post, joined with the author's username,
    /// ascending by created_at.
    ///
    /// Ties on created_at break by id, so two calls over the same data give
    /// the same order and tree assembly is reproducible.
    pub async fn list_by_post_with_author(
        pool: &PgPool,
        post_id: DbId,
    ) -> Result<Vec<CommentWithAuthor>, sqlx::Error> {
        sqlx::query_as::<_, CommentWithAuthor>(
            "SELECT c.id, c.post_id, c.author_id, u.username, c.parent_id,
                    c.content, c.deleted, c.created_at
             FROM comments c
             JOIN users u ON u.id = c.author_id
             WHERE c.post_id = $1
             ORDER BY c.created_at ASC, c.id ASC",
        )
        .bind(post_id)
        .fetch_all(pool)
        .await
    }

    /// Overwrite a comment's content, returning the updated row.
    ///
    /// Returns `None` if no row with the given `id` exists. No authorization
    /// or deleted-state check here -- the caller is responsible.
    pub async fn update_content(
        pool: &PgPool,
        id: DbId,
        content: &str,
    ) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!(
            "UPDATE comments SET content = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .bind(content)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a comment: set the flag and overwrite the stored content
    /// with the redaction marker, returning the updated row.
    ///
    /// Idempotent in effect -- re-running it leaves the row in the same
    /// state. Returns `None` if no row with the given `id` exists.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!(
            "UPDATE comments SET deleted = TRUE, content = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .bind(REDACTED_CONTENT)
            .fetch_optional(pool)
            .await
    }
}
