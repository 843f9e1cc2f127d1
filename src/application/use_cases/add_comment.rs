//! Add Comment Use Case

use std::sync::Arc;

use serde_json::Value;

use crate::domain::{AddComment, AddedComment, CommentRepository, ThreadRepository};
use crate::shared::error::AppError;

/// Creates a comment on an existing thread from a raw request payload.
pub struct AddCommentUseCase<T, C>
where
    T: ThreadRepository,
    C: CommentRepository,
{
    thread_repo: Arc<T>,
    comment_repo: Arc<C>,
}

impl<T, C> AddCommentUseCase<T, C>
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

    /// Steps, in order: validate the payload shape (cheap, local), verify the
    /// thread exists (first I/O), then persist the comment.
    pub async fn execute(
        &self,
        user_id: &str,
        thread_id: &str,
        payload: &Value,
    ) -> Result<AddedComment, AppError> {
        let add_comment = AddComment::parse(payload)?;
        self.thread_repo.verify_available_thread(thread_id).await?;
        self.comment_repo
            .add_comment(user_id, thread_id, &add_comment)
            .await
    }
}

#[cfg(test)]
mod tests {
    use mockall::Sequence;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::domain::{MockCommentRepository, MockThreadRepository};

    #[tokio::test]
    async fn orchestrates_the_add_comment_action_correctly() {
        let payload = json!({ "content": "a comment" });
        let expected = AddedComment::new(
            "comment-123".into(),
            "a comment".into(),
            "user-123".into(),
        )
        .unwrap();

        let mut sequence = Sequence::new();

        let mut thread_repo = MockThreadRepository::new();
        thread_repo
            .expect_verify_available_thread()
            .withf(|thread_id| thread_id == "thread-123")
            .times(1)
            .in_sequence(&mut sequence)
            .returning(|_| Ok(()));

        let mut comment_repo = MockCommentRepository::new();
        comment_repo
            .expect_add_comment()
            .withf(|user_id, thread_id, comment| {
                user_id == "user-123"
                    && thread_id == "thread-123"
                    && comment.content == "a comment"
            })
            .times(1)
            .in_sequence(&mut sequence)
            .returning(|user_id, _, comment| {
                AddedComment::new("comment-123".into(), comment.content.clone(), user_id.into())
            });

        let use_case = AddCommentUseCase::new(Arc::new(thread_repo), Arc::new(comment_repo));

        let added_comment = use_case
            .execute("user-123", "thread-123", &payload)
            .await
            .unwrap();

        assert_eq!(added_comment, expected);
    }

    #[tokio::test]
    async fn never_persists_when_thread_is_missing() {
        let payload = json!({ "content": "a comment" });

        let mut thread_repo = MockThreadRepository::new();
        thread_repo
            .expect_verify_available_thread()
            .times(1)
            .returning(|_| Err(AppError::NotFound("thread not found".into())));

        let mut comment_repo = MockCommentRepository::new();
        comment_repo.expect_add_comment().times(0);

        let use_case = AddCommentUseCase::new(Arc::new(thread_repo), Arc::new(comment_repo));

        let err = use_case
            .execute("user-123", "thread-404", &payload)
            .await
            .unwrap_err();

        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn validates_payload_before_touching_storage() {
        let payload = json!({ "content": 123 });

        let mut thread_repo = MockThreadRepository::new();
        thread_repo.expect_verify_available_thread().times(0);

        let mut comment_repo = MockCommentRepository::new();
        comment_repo.expect_add_comment().times(0);

        let use_case = AddCommentUseCase::new(Arc::new(thread_repo), Arc::new(comment_repo));

        let err = use_case
            .execute("user-123", "thread-123", &payload)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(code)
            if code == "ADD_COMMENT.NOT_MEET_DATA_TYPE_SPECIFICATION"));
    }
}
