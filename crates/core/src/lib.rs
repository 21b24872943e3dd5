//! Pure domain logic for the Threadline comment backend.
//!
//! No I/O lives here: the error taxonomy, validation rules, and the
//! read-time reply-tree assembler. Persistence is in `threadline-db`,
//! the HTTP surface in `threadline-api`.

pub mod comments;
pub mod error;
pub mod posts;
pub mod tree;
pub mod types;
pub mod users;
