//! Detail Thread Use Case

use std::sync::Arc;

use serde_json::Value;

use crate::domain::{CommentRepository, DetailThread, ThreadRepository};
use crate::shared::error::AppError;

/// Composes a thread's detail view from two independent repository reads.
///
/// The thread read returns an empty comment list by contract; the comment
/// read supplies the ordered sequence and this use case joins them in memory.
/// Keeping the reads separate is the seam that lets thread and comment
/// storage evolve independently.
pub struct DetailThreadUseCase<T, C>
where
    T: ThreadRepository,
    C: CommentRepository,
{
    thread_repo: Arc<T>,
    comment_repo: Arc<C>,
}

impl<T, C> DetailThreadUseCase<T, C>
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

    pub async fn execute(&self, payload: &Value) -> Result<DetailThread, AppError> {
        let thread_id = Self::verify_payload(payload)?;
        self.thread_repo.verify_available_thread(&thread_id).await?;
        let thread = self.thread_repo.get_thread_by_id(&thread_id).await?;
        let comments = self
            .comment_repo
            .get_comments_by_thread_id(&thread_id)
            .await?;

        Ok(thread.with_comments(comments))
    }

    /// The payload here is not an entity; `threadId` is checked in place with
    /// the use case's own validation codes.
    fn verify_payload(payload: &Value) -> Result<String, AppError> {
        match payload.get("threadId") {
            None | Some(Value::Null) => Err(AppError::Validation(
                "DETAIL_THREAD_USE_CASE.NOT_CONTAIN_NEEDED_PROPERTY".into(),
            )),
            Some(Value::String(thread_id)) if thread_id.is_empty() => Err(AppError::Validation(
                "DETAIL_THREAD_USE_CASE.NOT_CONTAIN_NEEDED_PROPERTY".into(),
            )),
            Some(Value::String(thread_id)) => Ok(thread_id.clone()),
            Some(_) => Err(AppError::Validation(
                "DETAIL_THREAD_USE_CASE.PAYLOAD_NOT_MEET_DATA_TYPE_SPECIFICATION".into(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::domain::{DetailComment, MockCommentRepository, MockThreadRepository};

    fn thread_fixture() -> DetailThread {
        DetailThread::new(
            "thread-123".into(),
            "a thread".into(),
            "a body".into(),
            "2024-04-28T07:46:00+00:00".into(),
            "johndoe".into(),
        )
        .unwrap()
    }

    fn comments_fixture() -> Vec<DetailComment> {
        vec![
            DetailComment::new(
                "comment-123".into(),
                "johndoe".into(),
                "2024-04-28T07:46:00+00:00".into(),
                "a comment".into(),
                false,
            )
            .unwrap(),
            DetailComment::new(
                "comment-456".into(),
                "janedoe".into(),
                "2024-04-28T07:47:00+00:00".into(),
                "ignored".into(),
                true,
            )
            .unwrap(),
        ]
    }

    #[tokio::test]
    async fn rejects_payload_without_thread_id() {
        let use_case = DetailThreadUseCase::new(
            Arc::new(MockThreadRepository::new()),
            Arc::new(MockCommentRepository::new()),
        );

        let err = use_case.execute(&json!({})).await.unwrap_err();

        assert!(matches!(err, AppError::Validation(code)
            if code == "DETAIL_THREAD_USE_CASE.NOT_CONTAIN_NEEDED_PROPERTY"));
    }

    #[tokio::test]
    async fn rejects_payload_with_non_string_thread_id() {
        let use_case = DetailThreadUseCase::new(
            Arc::new(MockThreadRepository::new()),
            Arc::new(MockCommentRepository::new()),
        );

        let err = use_case.execute(&json!({ "threadId": 123 })).await.unwrap_err();

        assert!(matches!(err, AppError::Validation(code)
            if code == "DETAIL_THREAD_USE_CASE.PAYLOAD_NOT_MEET_DATA_TYPE_SPECIFICATION"));
    }

    #[tokio::test]
    async fn orchestrates_the_detail_thread_action_correctly() {
        let mut thread_repo = MockThreadRepository::new();
        thread_repo
            .expect_verify_available_thread()
            .withf(|thread_id| thread_id == "thread-123")
            .times(1)
            .returning(|_| Ok(()));
        thread_repo
            .expect_get_thread_by_id()
            .withf(|thread_id| thread_id == "thread-123")
            .times(1)
            .returning(|_| Ok(thread_fixture()));

        let mut comment_repo = MockCommentRepository::new();
        comment_repo
            .expect_get_comments_by_thread_id()
            .withf(|thread_id| thread_id == "thread-123")
            .times(1)
            .returning(|_| Ok(comments_fixture()));

        let use_case = DetailThreadUseCase::new(Arc::new(thread_repo), Arc::new(comment_repo));

        let thread = use_case
            .execute(&json!({ "threadId": "thread-123" }))
            .await
            .unwrap();

        assert_eq!(thread, thread_fixture().with_comments(comments_fixture()));
    }

    #[tokio::test]
    async fn keeps_soft_deleted_comments_in_the_sequence() {
        let mut thread_repo = MockThreadRepository::new();
        thread_repo
            .expect_verify_available_thread()
            .times(1)
            .returning(|_| Ok(()));
        thread_repo
            .expect_get_thread_by_id()
            .times(1)
            .returning(|_| Ok(thread_fixture()));

        let mut comment_repo = MockCommentRepository::new();
        comment_repo
            .expect_get_comments_by_thread_id()
            .times(1)
            .returning(|_| Ok(comments_fixture()));

        let use_case = DetailThreadUseCase::new(Arc::new(thread_repo), Arc::new(comment_repo));

        let thread = use_case
            .execute(&json!({ "threadId": "thread-123" }))
            .await
            .unwrap();

        assert_eq!(thread.comments.len(), 2);
        assert!(thread.comments[1].is_delete);
        assert_eq!(thread.comments[1].content, crate::domain::DELETED_CONTENT);
    }

    #[tokio::test]
    async fn propagates_not_found_without_reading_comments() {
        let mut thread_repo = MockThreadRepository::new();
        thread_repo
            .expect_verify_available_thread()
            .times(1)
            .returning(|_| Err(AppError::NotFound("thread not found".into())));
        thread_repo.expect_get_thread_by_id().times(0);

        let mut comment_repo = MockCommentRepository::new();
        comment_repo.expect_get_comments_by_thread_id().times(0);

        let use_case = DetailThreadUseCase::new(Arc::new(thread_repo), Arc::new(comment_repo));

        let err = use_case
            .execute(&json!({ "threadId": "thread-404" }))
            .await
            .unwrap_err();

        assert!(err.is_not_found());
    }
}
