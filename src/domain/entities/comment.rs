//! Comment entities and repository trait.
//!
//! Maps to the `comments` table. A comment belongs to exactly one thread and
//! one owning user. Deletion is logical: the `is_delete` flag flips, the row
//! stays, and the stored content is replaced by a redaction marker when the
//! comment is rendered in a thread's detail view.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use super::{require_non_empty, require_string};
use crate::shared::error::AppError;

/// Marker shown in place of a soft-deleted comment's content.
pub const DELETED_CONTENT: &str = "**komentar telah dihapus**";

/// Validated payload for creating a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddComment {
    pub content: String,
}

impl AddComment {
    /// Parse and validate a raw request payload.
    pub fn parse(payload: &Value) -> Result<Self, AppError> {
        let content = require_string(payload, "content", "ADD_COMMENT")?;

        Ok(Self { content })
    }
}

/// A freshly persisted comment, as returned to the creating client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedComment {
    pub id: String,
    pub content: String,
    pub owner: String,
}

impl AddedComment {
    pub fn new(id: String, content: String, owner: String) -> Result<Self, AppError> {
        Ok(Self {
            id: require_non_empty(id, "ADDED_COMMENT")?,
            content: require_non_empty(content, "ADDED_COMMENT")?,
            owner: require_non_empty(owner, "ADDED_COMMENT")?,
        })
    }
}

/// Validated identifiers for deleting a comment.
///
/// Both ids are required so the repository can match the row on comment AND
/// thread, which blocks deleting a comment through a foreign thread's URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteComment {
    pub comment_id: String,
    pub thread_id: String,
}

impl DeleteComment {
    /// Parse and validate a raw payload carrying `commentId` and `threadId`.
    pub fn parse(payload: &Value) -> Result<Self, AppError> {
        let comment_id = require_string(payload, "commentId", "DELETE_COMMENT")?;
        let thread_id = require_string(payload, "threadId", "DELETE_COMMENT")?;

        Ok(Self {
            comment_id,
            thread_id,
        })
    }
}

/// A comment composed for a thread's detail view.
///
/// Soft-deleted comments stay in the sequence (ordering and count are part of
/// the thread's history); only their content is redacted, at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailComment {
    pub id: String,
    pub username: String,
    pub date: String,
    pub content: String,
    #[serde(skip_serializing)]
    pub is_delete: bool,
    pub replies: Vec<DetailComment>,
}

impl DetailComment {
    pub fn new(
        id: String,
        username: String,
        date: String,
        content: String,
        is_delete: bool,
    ) -> Result<Self, AppError> {
        let content = if is_delete {
            DELETED_CONTENT.to_string()
        } else {
            require_non_empty(content, "DETAIL_COMMENT")?
        };

        Ok(Self {
            id: require_non_empty(id, "DETAIL_COMMENT")?,
            username: require_non_empty(username, "DETAIL_COMMENT")?,
            date: require_non_empty(date, "DETAIL_COMMENT")?,
            content,
            is_delete,
            replies: Vec::new(),
        })
    }
}

/// Repository trait for comment persistence operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Persist a new comment on `thread_id` owned by `user_id`.
    async fn add_comment(
        &self,
        user_id: &str,
        thread_id: &str,
        comment: &AddComment,
    ) -> Result<AddedComment, AppError>;

    /// Fail with NotFound unless a comment with this id exists.
    async fn verify_available_comment(&self, comment_id: &str) -> Result<(), AppError>;

    /// Fail with NotFound if the comment is absent, Forbidden if `user_id`
    /// is not its owner.
    async fn verify_comment_owner(&self, user_id: &str, comment_id: &str)
        -> Result<(), AppError>;

    /// Soft-delete the comment matching both ids. Fails with NotFound when no
    /// row matches, including a concurrent delete that already flipped the
    /// flag.
    async fn delete_comment(&self, delete_comment: &DeleteComment) -> Result<(), AppError>;

    /// Fetch a thread's comments ordered by creation time ascending,
    /// soft-deleted rows included.
    async fn get_comments_by_thread_id(
        &self,
        thread_id: &str,
    ) -> Result<Vec<DetailComment>, AppError>;
}
