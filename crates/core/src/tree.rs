//! Read-time assembly of the threaded reply forest.
//!
//! Comments are stored flat with an optional parent back-reference; the
//! nested tree exists only in responses. The assembler is a pure function
//! over a created_at-ascending snapshot of one post's comments: one pass
//! builds an id-keyed arena of childless nodes, a second pass links each
//! node into its parent. Both passes are loops, so reply depth is bounded
//! only by the data, never by the call stack.

use std::collections::HashMap;

use serde::Serialize;

use crate::comments::REDACTED_CONTENT;
use crate::types::{DbId, Timestamp};

/// A flat comment row annotated with the author's display name, as produced
/// by the storage layer's list query.
#[derive(Debug, Clone)]
pub struct FlatComment {
    pub id: DbId,
    pub author_id: DbId,
    pub username: String,
    pub parent_id: Option<DbId>,
    pub content: String,
    pub deleted: bool,
    pub created_at: Timestamp,
}

/// A node of the assembled reply tree, ready for serialization.
#[derive(Debug, Clone, Serialize)]
pub struct CommentNode {
    pub id: DbId,
    pub author_id: DbId,
    pub username: String,
    pub parent_id: Option<DbId>,
    pub content: String,
    pub likes_count: i64,
    pub deleted: bool,
    pub created_at: Timestamp,
    pub children: Vec<CommentNode>,
}

impl CommentNode {
    /// Build a childless node from a flat row.
    ///
    /// Redaction keys off the `deleted` flag alone: the store also overwrites
    /// content on delete, but the assembler does not rely on that.
    pub fn from_flat(comment: FlatComment, likes_count: i64) -> Self {
        let content = if comment.deleted {
            REDACTED_CONTENT.to_string()
        } else {
            comment.content
        };
        CommentNode {
            id: comment.id,
            author_id: comment.author_id,
            username: comment.username,
            parent_id: comment.parent_id,
            content,
            likes_count,
            deleted: comment.deleted,
            created_at: comment.created_at,
            children: Vec::new(),
        }
    }
}

/// Assemble the reply forest for one post.
///
/// `comments` must be ascending by `created_at` (ties broken by id), which
/// is the order the store's list query returns. `like_counts` maps comment
/// ids to like totals; ids absent from the map count as zero.
///
/// Guarantees:
/// - roots and every sibling list come out in the same ascending order;
/// - a node whose parent is missing from the snapshot is promoted to a
///   root rather than dropped, so every input comment appears in the
///   output exactly once;
/// - O(n) time, no recursion.
pub fn assemble(comments: Vec<FlatComment>, like_counts: &HashMap<DbId, i64>) -> Vec<CommentNode> {
    // Pass 1: arena of childless nodes keyed by id, plus the input order.
    let mut order: Vec<(DbId, Option<DbId>)> = Vec::with_capacity(comments.len());
    let mut nodes: HashMap<DbId, CommentNode> = HashMap::with_capacity(comments.len());
    for comment in comments {
        order.push((comment.id, comment.parent_id));
        let likes = like_counts.get(&comment.id).copied().unwrap_or(0);
        nodes.insert(comment.id, CommentNode::from_flat(comment, likes));
    }

    // Pass 2: link children into parents, youngest first. A parent always
    // predates its children, so when a node leaves the arena every one of
    // its children has already been attached to it.
    let mut roots: Vec<CommentNode> = Vec::new();
    for (id, parent_id) in order.into_iter().rev() {
        let Some(mut node) = nodes.remove(&id) else {
            continue;
        };
        // Children arrived youngest-first; restore ascending order.
        node.children.reverse();
        match parent_id.and_then(|pid| nodes.get_mut(&pid)) {
            Some(parent) => parent.children.push(node),
            // Top-level comment, or a parent absent from this snapshot:
            // either way the node surfaces as a root.
            None => roots.push(node),
        }
    }
    roots.reverse();
    roots
}

/// Total number of nodes in a forest, descendants included.
pub fn node_count(forest: &[CommentNode]) -> usize {
    let mut count = 0;
    let mut stack: Vec<&CommentNode> = forest.iter().collect();
    while let Some(node) = stack.pop() {
        count += 1;
        stack.extend(node.children.iter());
    }
    count
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
