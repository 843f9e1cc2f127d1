//! Thread Handlers

use std::sync::Arc;

use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use crate::application::use_cases::{AddThreadUseCase, DetailThreadUseCase};
use crate::domain::{AddedThread, DetailThread};
use crate::infrastructure::repositories::{PgCommentRepository, PgThreadRepository};
use crate::presentation::middleware::AuthUser;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Create a thread owned by the authenticated user.
///
/// The body is passed to the use case untyped; payload shape validation is
/// the domain's job and produces the machine-readable codes clients rely on.
pub async fn create_thread(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<AddedThread>), AppError> {
    let thread_repo = Arc::new(PgThreadRepository::new(state.db.clone()));
    let use_case = AddThreadUseCase::new(thread_repo);

    let added_thread = use_case.execute(&auth.user_id, &payload).await?;

    Ok((StatusCode::CREATED, Json(added_thread)))
}

/// Get a thread with its ordered comments.
pub async fn get_thread(
    State(state): State<AppState>,
    Path(thread_id): Path<String>,
) -> Result<Json<DetailThread>, AppError> {
    let thread_repo = Arc::new(PgThreadRepository::new(state.db.clone()));
    let comment_repo = Arc::new(PgCommentRepository::new(state.db.clone()));
    let use_case = DetailThreadUseCase::new(thread_repo, comment_repo);

    let thread = use_case.execute(&json!({ "threadId": thread_id })).await?;

    Ok(Json(thread))
}
