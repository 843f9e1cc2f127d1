//! Thread Repository Implementation
//!
//! PostgreSQL implementation of thread persistence. The detail read joins
//! `threads` to `users` on the owner column to obtain a display username.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{AddThread, AddedThread, DetailThread, ThreadRepository};
use crate::shared::error::AppError;
use crate::shared::id::IdGenerator;

pub struct PgThreadRepository {
    pool: PgPool,
    id_generator: IdGenerator,
}

impl PgThreadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            id_generator: IdGenerator::new(),
        }
    }
}

/// Row type for the columns returned by the thread INSERT.
#[derive(Debug, sqlx::FromRow)]
struct AddedThreadRow {
    id: String,
    title: String,
    owner: String,
}

impl AddedThreadRow {
    fn into_added_thread(self) -> Result<AddedThread, AppError> {
        AddedThread::new(self.id, self.title, self.owner)
    }
}

/// Row type for the thread detail query.
#[derive(Debug, sqlx::FromRow)]
struct DetailThreadRow {
    id: String,
    title: String,
    body: String,
    created: DateTime<Utc>,
    username: String,
}

impl DetailThreadRow {
    fn into_detail_thread(self) -> Result<DetailThread, AppError> {
        DetailThread::new(
            self.id,
            self.title,
            self.body,
            self.created.to_rfc3339(),
            self.username,
        )
    }
}

#[async_trait]
impl ThreadRepository for PgThreadRepository {
    async fn add_thread(&self, user_id: &str, thread: &AddThread) -> Result<AddedThread, AppError> {
        let id = self.id_generator.thread_id();

        let row = sqlx::query_as::<_, AddedThreadRow>(
            r#"
            INSERT INTO threads (id, title, body, owner)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, owner
            "#,
        )
        .bind(&id)
        .bind(&thread.title)
        .bind(&thread.body)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        row.into_added_thread()
    }

    async fn verify_available_thread(&self, thread_id: &str) -> Result<(), AppError> {
        let row: Option<(String,)> = sqlx::query_as("SELECT id FROM threads WHERE id = $1")
            .bind(thread_id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound("thread not found".into())),
        }
    }

    async fn get_thread_by_id(&self, thread_id: &str) -> Result<DetailThread, AppError> {
        let row = sqlx::query_as::<_, DetailThreadRow>(
            r#"
            SELECT threads.id AS id, title, body, created, username
            FROM threads
            JOIN users ON threads.owner = users.id
            WHERE threads.id = $1
            "#,
        )
        .bind(thread_id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => row.into_detail_thread(),
            None => Err(AppError::NotFound("thread not found".into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn added_thread_row_converts_to_entity() {
        let row = AddedThreadRow {
            id: "thread-123".into(),
            title: "a thread".into(),
            owner: "user-123".into(),
        };

        let added_thread = row.into_added_thread().unwrap();

        assert_eq!(added_thread.id, "thread-123");
        assert_eq!(added_thread.title, "a thread");
        assert_eq!(added_thread.owner, "user-123");
    }

    #[test]
    fn detail_thread_row_renders_date_as_rfc3339() {
        let row = DetailThreadRow {
            id: "thread-123".into(),
            title: "a thread".into(),
            body: "a body".into(),
            created: Utc.with_ymd_and_hms(2024, 4, 28, 7, 46, 0).unwrap(),
            username: "johndoe".into(),
        };

        let thread = row.into_detail_thread().unwrap();

        assert_eq!(thread.date, "2024-04-28T07:46:00+00:00");
        assert!(thread.comments.is_empty());
    }
}
