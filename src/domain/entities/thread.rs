//! Thread entities and repository trait.
//!
//! Maps to the `threads` table. A thread is a top-level discussion post with
//! title, body and an owning user; it collects zero or more comments.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use super::{require_non_empty, require_string, DetailComment};
use crate::shared::error::AppError;

/// Validated payload for creating a thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddThread {
    pub title: String,
    pub body: String,
}

impl AddThread {
    /// Parse and validate a raw request payload.
    pub fn parse(payload: &Value) -> Result<Self, AppError> {
        let title = require_string(payload, "title", "ADD_THREAD")?;
        let body = require_string(payload, "body", "ADD_THREAD")?;

        Ok(Self { title, body })
    }
}

/// A freshly persisted thread, as returned to the creating client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedThread {
    pub id: String,
    pub title: String,
    pub owner: String,
}

impl AddedThread {
    pub fn new(id: String, title: String, owner: String) -> Result<Self, AppError> {
        Ok(Self {
            id: require_non_empty(id, "ADDED_THREAD")?,
            title: require_non_empty(title, "ADDED_THREAD")?,
            owner: require_non_empty(owner, "ADDED_THREAD")?,
        })
    }
}

/// A thread composed for the detail view, including its ordered comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailThread {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: String,
    pub username: String,
    pub comments: Vec<DetailComment>,
}

impl DetailThread {
    /// Construct a detail view with no comments attached yet.
    ///
    /// The repository returns threads in this shape; the detail use case
    /// attaches the comment sequence afterwards via [`with_comments`].
    ///
    /// [`with_comments`]: DetailThread::with_comments
    pub fn new(
        id: String,
        title: String,
        body: String,
        date: String,
        username: String,
    ) -> Result<Self, AppError> {
        Ok(Self {
            id: require_non_empty(id, "DETAIL_THREAD")?,
            title: require_non_empty(title, "DETAIL_THREAD")?,
            body: require_non_empty(body, "DETAIL_THREAD")?,
            date: require_non_empty(date, "DETAIL_THREAD")?,
            username: require_non_empty(username, "DETAIL_THREAD")?,
            comments: Vec::new(),
        })
    }

    /// Return a copy of this thread with the given comment sequence attached,
    /// preserving its order.
    pub fn with_comments(mut self, comments: Vec<DetailComment>) -> Self {
        self.comments = comments;
        self
    }
}

/// Repository trait for thread persistence operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ThreadRepository: Send + Sync {
    /// Persist a new thread owned by `user_id`.
    async fn add_thread(&self, user_id: &str, thread: &AddThread) -> Result<AddedThread, AppError>;

    /// Fail with NotFound unless a thread with this id exists.
    async fn verify_available_thread(&self, thread_id: &str) -> Result<(), AppError>;

    /// Fetch a thread for the detail view, with an empty comment list.
    async fn get_thread_by_id(&self, thread_id: &str) -> Result<DetailThread, AppError>;
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn validation_code(err: AppError) -> String {
        match err {
            AppError::Validation(code) => code,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn add_thread_rejects_missing_property() {
        let payload = json!({ "title": "a thread" });

        let err = AddThread::parse(&payload).unwrap_err();

        assert_eq!(validation_code(err), "ADD_THREAD.NOT_CONTAIN_NEEDED_PROPERTY");
    }

    #[test]
    fn add_thread_rejects_empty_field() {
        let payload = json!({ "title": "", "body": "a body" });

        let err = AddThread::parse(&payload).unwrap_err();

        assert_eq!(validation_code(err), "ADD_THREAD.NOT_CONTAIN_NEEDED_PROPERTY");
    }

    #[test]
    fn add_thread_rejects_wrong_type() {
        let payload = json!({ "title": 123, "body": "a body" });

        let err = AddThread::parse(&payload).unwrap_err();

        assert_eq!(
            validation_code(err),
            "ADD_THREAD.NOT_MEET_DATA_TYPE_SPECIFICATION"
        );
    }

    #[test]
    fn add_thread_parses_valid_payload() {
        let payload = json!({ "title": "a thread", "body": "a body" });

        let thread = AddThread::parse(&payload).unwrap();

        assert_eq!(thread.title, "a thread");
        assert_eq!(thread.body, "a body");
    }

    #[test]
    fn added_thread_rejects_empty_field() {
        let err =
            AddedThread::new("thread-123".into(), String::new(), "user-123".into()).unwrap_err();

        assert_eq!(
            validation_code(err),
            "ADDED_THREAD.NOT_CONTAIN_NEEDED_PROPERTY"
        );
    }

    #[test]
    fn detail_thread_starts_with_no_comments() {
        let thread = DetailThread::new(
            "thread-123".into(),
            "a thread".into(),
            "a body".into(),
            "2024-04-28T07:46:00+00:00".into(),
            "johndoe".into(),
        )
        .unwrap();

        assert!(thread.comments.is_empty());
    }

    #[test]
    fn with_comments_preserves_order() {
        let thread = DetailThread::new(
            "thread-123".into(),
            "a thread".into(),
            "a body".into(),
            "2024-04-28T07:46:00+00:00".into(),
            "johndoe".into(),
        )
        .unwrap();

        let comments = vec![
            DetailComment::new(
                "comment-1".into(),
                "johndoe".into(),
                "2024-04-28T07:46:00+00:00".into(),
                "first".into(),
                false,
            )
            .unwrap(),
            DetailComment::new(
                "comment-2".into(),
                "janedoe".into(),
                "2024-04-28T07:47:00+00:00".into(),
                "second".into(),
                false,
            )
            .unwrap(),
        ];

        let composed = thread.with_comments(comments.clone());

        assert_eq!(composed.comments, comments);
    }
}
