//! Comment Handlers

use std::sync::Arc;

use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use crate::application::use_cases::{AddCommentUseCase, DeleteCommentUseCase};
use crate::domain::AddedComment;
use crate::infrastructure::repositories::{PgCommentRepository, PgThreadRepository};
use crate::presentation::middleware::AuthUser;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Create a comment on a thread.
pub async fn create_comment(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(thread_id): Path<String>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<AddedComment>), AppError> {
    let thread_repo = Arc::new(PgThreadRepository::new(state.db.clone()));
    let comment_repo = Arc::new(PgCommentRepository::new(state.db.clone()));
    let use_case = AddCommentUseCase::new(thread_repo, comment_repo);

    let added_comment = use_case
        .execute(&auth.user_id, &thread_id, &payload)
        .await?;

    Ok((StatusCode::CREATED, Json(added_comment)))
}

/// Soft-delete a comment owned by the authenticated user.
///
/// Both path ids go into the use-case payload so the repository matches the
/// row on comment AND thread.
pub async fn delete_comment(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path((thread_id, comment_id)): Path<(String, String)>,
) -> Result<StatusCode, AppError> {
    let thread_repo = Arc::new(PgThreadRepository::new(state.db.clone()));
    let comment_repo = Arc::new(PgCommentRepository::new(state.db.clone()));
    let use_case = DeleteCommentUseCase::new(thread_repo, comment_repo);

    let payload: Value = json!({
        "commentId": comment_id,
        "threadId": thread_id,
    });

    use_case.execute(&auth.user_id, &payload).await?;

    Ok(StatusCode::OK)
}
