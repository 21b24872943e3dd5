//! Repository for the `comment_likes` table.
//!
//! Likes are toggled: a row is created on like and deleted on unlike, never
//! updated in place. The (comment, user) uniqueness constraint is what makes
//! the concurrent-toggle race safe.

use sqlx::PgPool;
use threadline_core::types::DbId;

use crate::is_unique_violation;
use crate::models::comment_like::{CommentLike, LikeCount};

/// Column list for comment_likes queries.
const COLUMNS: &str = "id, comment_id, user_id, created_at";

/// Name of the uniqueness constraint on (comment_id, user_id).
const UQ_COMMENT_USER: &str = "uq_comment_likes_comment_user";

/// Counts and toggles per-comment like relations.
pub struct CommentLikeRepo;

impl CommentLikeRepo {
    /// Find the like row for a (comment, user) pair, if any.
    pub async fn find(
        pool: &PgPool,
        comment_id: DbId,
        user_id: DbId,
    ) -> Result<Option<CommentLike>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM comment_likes WHERE comment_id = $1 AND user_id = $2"
        );
        sqlx::query_as::<_, CommentLike>(&query)
            .bind(comment_id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Toggle the like state for a (comment, user) pair.
    ///
    /// Returns `true` when the call ends with the pair liked, `false` when
    /// it ends unliked. Two concurrent first-likes both observe "absent" and
    /// both insert; the constraint rejects the loser with a 23505, which is
    /// absorbed here and reported as liked -- the caller never sees the
    /// conflict.
    pub async fn toggle(
        pool: &PgPool,
        comment_id: DbId,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        if let Some(existing) = Self::find(pool, comment_id, user_id).await? {
            sqlx::query("DELETE FROM comment_likes WHERE id = $1")
                .bind(existing.id)
                .execute(pool)
                .await?;
            return Ok(false);
        }

        let inserted = sqlx::query("INSERT INTO comment_likes (comment_id, user_id) VALUES ($1, $2)")
            .bind(comment_id)
            .bind(user_id)
            .execute(pool)
            .await;

        match inserted {
            Ok(_) => Ok(true),
            Err(err) if is_unique_violation(&err, UQ_COMMENT_USER) => {
                // Lost the insert race to a concurrent toggle; the end state
                // is the one we wanted.
                tracing::debug!(comment_id, user_id, "duplicate like insert absorbed");
                Ok(true)
            }
            Err(err) => Err(err),
        }
    }

    /// Count likes for a single comment.
    pub async fn count_for(pool: &PgPool, comment_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM comment_likes WHERE comment_id = $1")
            .bind(comment_id)
            .fetch_one(pool)
            .await
    }

    /// Count likes for many comments in one query.
    ///
    /// Ids with no likes are omitted from the result; callers default them
    /// to zero. This is what keeps tree listing at one like query per post
    /// instead of one per node.
    pub async fn count_for_many(
        pool: &PgPool,
        comment_ids: &[DbId],
    ) -> Result<Vec<LikeCount>, sqlx::Error> {
        sqlx::query_as::<_, LikeCount>(
            "SELECT comment_id, COUNT(*) AS count
             FROM comment_likes
             WHERE comment_id = ANY($1)
             GROUP BY comment_id",
        )
        .bind(comment_ids)
        .fetch_all(pool)
        .await
    }
}
