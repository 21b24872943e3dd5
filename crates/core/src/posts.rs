//! Post title and body rules, plus list paging bounds.

/// Maximum length of a post title in characters.
pub const MAX_POST_TITLE_LENGTH: usize = 200;

/// Maximum length of a post body in characters.
pub const MAX_POST_CONTENT_LENGTH: usize = 50_000;

/// Default page size for post listings.
pub const DEFAULT_POST_LIST_LIMIT: i64 = 20;

/// Hard cap on post listing page size.
pub const MAX_POST_LIST_LIMIT: i64 = 100;

/// Clamp a caller-supplied limit to `1..=max`, defaulting when absent.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).clamp(1, max)
}

/// Clamp a caller-supplied offset to be non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

/// Validate a post title: non-empty and within the length limit.
pub fn validate_post_title(title: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("Post title cannot be empty".to_string());
    }
    if title.len() > MAX_POST_TITLE_LENGTH {
        return Err(format!(
            "Post title exceeds maximum length of {MAX_POST_TITLE_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate a post body: non-empty and within the length limit.
pub fn validate_post_content(content: &str) -> Result<(), String> {
    if content.is_empty() {
        return Err("Post content cannot be empty".to_string());
    }
    if content.len() > MAX_POST_CONTENT_LENGTH {
        return Err(format!(
            "Post content exceeds maximum length of {MAX_POST_CONTENT_LENGTH} characters"
        ));
    }
    Ok(())
}
