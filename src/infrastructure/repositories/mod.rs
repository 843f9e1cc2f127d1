//! Repository Implementations
//!
//! PostgreSQL implementations of the domain repository traits.
//!
//! - **PgThreadRepository** — thread rows, existence checks, detail reads
//! - **PgCommentRepository** — comment rows, ownership checks, conditional
//!   soft delete, ordered detail reads

pub mod comment_repository;
pub mod thread_repository;

pub use comment_repository::PgCommentRepository;
pub use thread_repository::PgThreadRepository;
