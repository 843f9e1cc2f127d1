//! Delete Comment Use Case

use std::sync::Arc;

use serde_json::Value;

use crate::domain::{CommentRepository, DeleteComment, ThreadRepository};
use crate::shared::error::AppError;

/// Soft-deletes a comment after a fixed chain of guards.
///
/// Guard order is part of the authorization policy: thread existence, then
/// comment existence, then ownership, then the mutation. The flag flip never
/// runs before all three guards have passed.
pub struct DeleteCommentUseCase<T, C>
where
    T: ThreadRepository,
    C: CommentRepository,
{
    thread_repo: Arc<T>,
    comment_repo: Arc<C>,
}

impl<T, C> DeleteCommentUseCase<T, C>
where
    T: ThreadRepository,
    C: CommentRepository,
{
    pub fn new(thread_repo: Arc<T>, comment_repo: Arc<C>) -> Self {
        Self {
            thread_repo,
            comment_repo,
        }
    }

    pub async fn execute(&self, user_id: &str, payload: &Value) -> Result<(), AppError> {
        let delete_comment = DeleteComment::parse(payload)?;
        self.thread_repo
            .verify_available_thread(&delete_comment.thread_id)
            .await?;
        self.comment_repo
            .verify_available_comment(&delete_comment.comment_id)
            .await?;
        self.comment_repo
            .verify_comment_owner(user_id, &delete_comment.comment_id)
            .await?;
        self.comment_repo.delete_comment(&delete_comment).await
    }
}
