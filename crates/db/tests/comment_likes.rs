//! Integration tests for the like repository: toggle semantics, batched
//! counts, and the duplicate-insert race policy.

use futures::future::join_all;
use sqlx::PgPool;
use threadline_db::is_unique_violation;
use threadline_db::models::comment::CreateComment;
use threadline_db::models::post::CreatePost;
use threadline_db::models::user::CreateUser;
use threadline_db::repositories::{CommentLikeRepo, CommentRepo, PostRepo, UserRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_user(pool: &PgPool, username: &str) -> i64 {
    UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            email: format!("{username}@test.com"),
            password_hash: "$argon2id$test-hash".to_string(),
        },
    )
    .await
    .unwrap()
    .id
}

/// Seed a user, a post, and one comment; return (user_id, comment_id).
async fn seed_comment(pool: &PgPool, username: &str) -> (i64, i64) {
    let user = seed_user(pool, username).await;
    let post = PostRepo::create(
        pool,
        user,
        &CreatePost {
            title: "Liked Post".to_string(),
            content: "body".to_string(),
        },
    )
    .await
    .unwrap();
    let comment = CommentRepo::create(
        pool,
        post.id,
        user,
        &CreateComment {
            content: "like me".to_string(),
            parent_id: None,
        },
    )
    .await
    .unwrap();
    (user, comment.id)
}

// ---------------------------------------------------------------------------
// Test: toggle pairs are idempotent and counts follow
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_toggle_like_then_unlike(pool: PgPool) {
    let (user, comment) = seed_comment(&pool, "toggler").await;

    let before = CommentLikeRepo::count_for(&pool, comment).await.unwrap();
    assert_eq!(before, 0);

    let first = CommentLikeRepo::toggle(&pool, comment, user).await.unwrap();
    assert!(first, "first toggle should like");
    assert_eq!(CommentLikeRepo::count_for(&pool, comment).await.unwrap(), 1);

    let second = CommentLikeRepo::toggle(&pool, comment, user).await.unwrap();
    assert!(!second, "second toggle should unlike");

    let after = CommentLikeRepo::count_for(&pool, comment).await.unwrap();
    assert_eq!(after, before, "a toggle pair must leave the count unchanged");
}

// ---------------------------------------------------------------------------
// Test: distinct users accumulate distinct likes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_likes_count_per_user(pool: PgPool) {
    let (author, comment) = seed_comment(&pool, "author").await;
    let fan_one = seed_user(&pool, "fan_one").await;
    let fan_two = seed_user(&pool, "fan_two").await;

    assert!(CommentLikeRepo::toggle(&pool, comment, author).await.unwrap());
    assert!(CommentLikeRepo::toggle(&pool, comment, fan_one).await.unwrap());
    assert!(CommentLikeRepo::toggle(&pool, comment, fan_two).await.unwrap());

    assert_eq!(CommentLikeRepo::count_for(&pool, comment).await.unwrap(), 3);
}

// ---------------------------------------------------------------------------
// Test: batched counts omit unliked comments
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_count_for_many_omits_unliked(pool: PgPool) {
    let (user, liked) = seed_comment(&pool, "counter").await;
    let post = CommentRepo::find_by_id(&pool, liked).await.unwrap().unwrap().post_id;

    let unliked = CommentRepo::create(
        &pool,
        post,
        user,
        &CreateComment {
            content: "nobody likes me".to_string(),
            parent_id: None,
        },
    )
    .await
    .unwrap()
    .id;

    CommentLikeRepo::toggle(&pool, liked, user).await.unwrap();

    let counts = CommentLikeRepo::count_for_many(&pool, &[liked, unliked])
        .await
        .unwrap();

    assert_eq!(counts.len(), 1, "unliked ids are omitted");
    assert_eq!(counts[0].comment_id, liked);
    assert_eq!(counts[0].count, 1);
}

// ---------------------------------------------------------------------------
// Test: the unique constraint rejects a duplicate insert with 23505
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_insert_is_unique_violation(pool: PgPool) {
    let (user, comment) = seed_comment(&pool, "dupe").await;

    let insert = "INSERT INTO comment_likes (comment_id, user_id) VALUES ($1, $2)";
    sqlx::query(insert)
        .bind(comment)
        .bind(user)
        .execute(&pool)
        .await
        .unwrap();

    let err = sqlx::query(insert)
        .bind(comment)
        .bind(user)
        .execute(&pool)
        .await
        .unwrap_err();

    assert!(
        is_unique_violation(&err, "uq_comment_likes_comment_user"),
        "second insert must trip the pair constraint, got: {err}"
    );
    assert!(
        !is_unique_violation(&err, "uq_users_username"),
        "classification is constraint-specific"
    );
}

// ---------------------------------------------------------------------------
// Test: concurrent first-likes end with exactly one row and no error
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_concurrent_first_likes_insert_one_row(pool: PgPool) {
    let (user, comment) = seed_comment(&pool, "racer").await;

    // Launch the toggles together so every call sees the like-free state;
    // the losers of the insert race must absorb the conflict, not fail.
    let toggles = (0..4).map(|_| CommentLikeRepo::toggle(&pool, comment, user));
    let results = join_all(toggles).await;

    for result in results {
        let liked = result.expect("no toggle may surface a constraint error");
        assert!(liked, "every racing first-like reports liked");
    }

    assert_eq!(
        CommentLikeRepo::count_for(&pool, comment).await.unwrap(),
        1,
        "exactly one like row exists after the race"
    );
}
