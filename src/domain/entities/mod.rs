//! # Domain Entities
//!
//! Immutable value objects for the forum core. Construction is the only
//! place validation happens: a successfully constructed entity is valid for
//! its whole lifetime and exposes no mutation methods.
//!
//! Two construction styles exist, matching where the data comes from:
//!
//! - **Input entities** (`AddThread`, `AddComment`, `DeleteComment`) parse an
//!   untyped JSON payload from the HTTP boundary. A missing or empty required
//!   field fails with `<ENTITY>.NOT_CONTAIN_NEEDED_PROPERTY`; a present field
//!   of the wrong JSON type fails with
//!   `<ENTITY>.NOT_MEET_DATA_TYPE_SPECIFICATION`.
//! - **Output entities** (`AddedThread`, `AddedComment`, `DetailThread`,
//!   `DetailComment`) are built from typed repository rows, so the wrong-type
//!   class cannot occur; their constructors enforce the non-empty invariant
//!   only.
//!
//! ## Repository Traits
//!
//! Each aggregate has an associated repository trait defining its persistence
//! contract. The traits are implemented in the infrastructure layer.

mod comment;
mod thread;

pub use comment::{
    AddComment, AddedComment, CommentRepository, DeleteComment, DetailComment, DELETED_CONTENT,
};
pub use thread::{AddThread, AddedThread, DetailThread, ThreadRepository};

#[cfg(test)]
pub use comment::MockCommentRepository;
#[cfg(test)]
pub use thread::MockThreadRepository;

use serde_json::Value;

use crate::shared::error::AppError;

/// Extract a required string field from an untyped payload.
///
/// `entity` is the uppercase tag used in validation codes, e.g. `ADD_COMMENT`.
fn require_string(payload: &Value, field: &str, entity: &str) -> Result<String, AppError> {
    match payload.get(field) {
        None | Some(Value::Null) => Err(missing_property(entity)),
        Some(Value::String(s)) if s.is_empty() => Err(missing_property(entity)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(wrong_type(entity)),
    }
}

/// Non-empty check for fields sourced from typed rows.
fn require_non_empty(value: String, entity: &str) -> Result<String, AppError> {
    if value.is_empty() {
        Err(missing_property(entity))
    } else {
        Ok(value)
    }
}

fn missing_property(entity: &str) -> AppError {
    AppError::Validation(format!("{entity}.NOT_CONTAIN_NEEDED_PROPERTY"))
}

fn wrong_type(entity: &str) -> AppError {
    AppError::Validation(format!("{entity}.NOT_MEET_DATA_TYPE_SPECIFICATION"))
}
