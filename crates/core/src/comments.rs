//! Comment content rules and the soft-delete redaction marker.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of comment content in characters.
pub const MAX_COMMENT_CONTENT_LENGTH: usize = 10_000;

/// Fixed marker shown in place of a soft-deleted comment's content.
///
/// The store writes this into the row on delete, and the tree assembler
/// applies it again from the `deleted` flag, so the marker is authoritative
/// even if the stored content somehow survived.
pub const REDACTED_CONTENT: &str = "[This comment has been deleted]";

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate comment content: must be non-empty and within the length limit.
pub fn validate_comment_content(content: &str) -> Result<(), String> {
    if content.is_empty() {
        return Err("Comment content cannot be empty".to_string());
    }
    if content.len() > MAX_COMMENT_CONTENT_LENGTH {
        return Err(format!(
            "Comment content exceeds maximum length of {MAX_COMMENT_CONTENT_LENGTH} characters"
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
