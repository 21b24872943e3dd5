//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - Query-result shapes used by the read paths

pub mod comment;
pub mod comment_like;
pub mod post;
pub mod user;
