//! Add Thread Use Case

use std::sync::Arc;

use serde_json::Value;

use crate::domain::{AddThread, AddedThread, ThreadRepository};
use crate::shared::error::AppError;

/// Creates a thread from a raw request payload.
pub struct AddThreadUseCase<T>
where
    T: ThreadRepository,
{
    thread_repo: Arc<T>,
}

impl<T> AddThreadUseCase<T>
where
    T: ThreadRepository,
{
    pub fn new(thread_repo: Arc<T>) -> Self {
        Self { thread_repo }
    }

    /// Validate the payload shape, then persist the thread for `user_id`.
    pub async fn execute(&self, user_id: &str, payload: &Value) -> Result<AddedThread, AppError> {
        let add_thread = AddThread::parse(payload)?;
        self.thread_repo.add_thread(user_id, &add_thread).await
    }
}
