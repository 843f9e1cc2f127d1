//! Entity ID generation.
//!
//! Thread and comment ids are opaque strings with a type prefix, e.g.
//! `thread-7f9c24e8b3ab4f0a9d6c1e2f5a8b0c3d`. The prefix makes ids
//! self-describing in logs and rules out cross-entity id mixups in queries.

use uuid::Uuid;

/// Generator for prefixed entity ids.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator;

impl IdGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate an id for a thread row.
    pub fn thread_id(&self) -> String {
        format!("thread-{}", Uuid::new_v4().simple())
    }

    /// Generate an id for a comment row.
    pub fn comment_id(&self) -> String {
        format!("comment-{}", Uuid::new_v4().simple())
    }
}
