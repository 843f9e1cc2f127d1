//! Comment Repository Implementation
//!
//! PostgreSQL implementation of comment persistence. Deletion is a
//! conditional UPDATE that matches the row on comment id, thread id and the
//! not-yet-deleted flag; that single statement is the only concurrency guard,
//! so two racing deletes resolve at the database and the loser sees zero
//! affected rows.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{AddComment, AddedComment, CommentRepository, DeleteComment, DetailComment};
use crate::shared::error::AppError;
use crate::shared::id::IdGenerator;

pub struct PgCommentRepository {
    pool: PgPool,
    id_generator: IdGenerator,
}

impl PgCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            id_generator: IdGenerator::new(),
        }
    }
}

/// Row type for the columns returned by the comment INSERT.
#[derive(Debug, sqlx::FromRow)]
struct AddedCommentRow {
    id: String,
    content: String,
    owner: String,
}

impl AddedCommentRow {
    fn into_added_comment(self) -> Result<AddedComment, AppError> {
        AddedComment::new(self.id, self.content, self.owner)
    }
}

/// Row type for the comment detail query (joined to users).
#[derive(Debug, sqlx::FromRow)]
struct DetailCommentRow {
    id: String,
    username: String,
    created: DateTime<Utc>,
    content: String,
    is_delete: bool,
}

impl DetailCommentRow {
    fn into_detail_comment(self) -> Result<DetailComment, AppError> {
        DetailComment::new(
            self.id,
            self.username,
            self.created.to_rfc3339(),
            self.content,
            self.is_delete,
        )
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    async fn add_comment(
        &self,
        user_id: &str,
        thread_id: &str,
        comment: &AddComment,
    ) -> Result<AddedComment, AppError> {
        let id = self.id_generator.comment_id();

        let row = sqlx::query_as::<_, AddedCommentRow>(
            r#"
            INSERT INTO comments (id, content, thread_id, owner)
            VALUES ($1, $2, $3, $4)
            RETURNING id, content, owner
            "#,
        )
        .bind(&id)
        .bind(&comment.content)
        .bind(thread_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        row.into_added_comment()
    }

    async fn verify_available_comment(&self, comment_id: &str) -> Result<(), AppError> {
        let row: Option<(String,)> = sqlx::query_as("SELECT id FROM comments WHERE id = $1")
            .bind(comment_id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound("comment not found".into())),
        }
    }

    async fn verify_comment_owner(
        &self,
        user_id: &str,
        comment_id: &str,
    ) -> Result<(), AppError> {
        let row: Option<(String,)> = sqlx::query_as("SELECT owner FROM comments WHERE id = $1")
            .bind(comment_id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            None => Err(AppError::NotFound("comment not found".into())),
            Some((owner,)) if owner != user_id => {
                Err(AppError::Forbidden("not the comment owner".into()))
            }
            Some(_) => Ok(()),
        }
    }

    async fn delete_comment(&self, delete_comment: &DeleteComment) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE comments
            SET is_delete = TRUE
            WHERE id = $1 AND thread_id = $2 AND is_delete = FALSE
            "#,
        )
        .bind(&delete_comment.comment_id)
        .bind(&delete_comment.thread_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("comment not found".into()));
        }

        Ok(())
    }

    async fn get_comments_by_thread_id(
        &self,
        thread_id: &str,
    ) -> Result<Vec<DetailComment>, AppError> {
        let rows = sqlx::query_as::<_, DetailCommentRow>(
            r#"
            SELECT comments.id AS id, username, comments.created AS created,
                   content, is_delete
            FROM comments
            JOIN users ON comments.owner = users.id
            WHERE comments.thread_id = $1
            ORDER BY comments.created ASC
            "#,
        )
        .bind(thread_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(DetailCommentRow::into_detail_comment)
            .collect()
    }
}
