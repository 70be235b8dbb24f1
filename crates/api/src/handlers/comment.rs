//! Handlers for comments on questions and answers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use studyhub_core::error::CoreError;
use studyhub_core::forum::{validate_comment_content, CommentParent};
use studyhub_core::search::Page;
use studyhub_core::types::DbId;
use studyhub_db::models::comment::{CreateComment, UpdateComment};
use studyhub_db::repositories::CommentRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /comments`.
#[derive(Debug, Deserialize)]
pub struct CommentListParams {
    pub parent_type: CommentParent,
    pub parent_id: DbId,
    pub limit: Option<i64>,
    pub skip: Option<i64>,
}

/// GET /comments?parent_type=&parent_id=&limit=&skip=
///
/// Public.
pub async fn list_comments(
    State(state): State<AppState>,
    Query(params): Query<CommentListParams>,
) -> AppResult<impl IntoResponse> {
    let page = Page::from_params(params.limit, params.skip);
    let comments =
        CommentRepo::list_by_parent(&state.pool, params.parent_type, params.parent_id, page)
            .await?;
    Ok(Json(DataResponse { data: comments }))
}

/// POST /comments
///
/// The parent question or answer must exist.
pub async fn create_comment(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateComment>,
) -> AppResult<impl IntoResponse> {
    validate_comment_content(&input.content).map_err(CoreError::Validation)?;

    let comment = CommentRepo::create(&state.pool, auth.user_id, auth.author(), &input)
        .await?
        .ok_or_else(|| {
            let entity = match input.parent_type {
                CommentParent::Question => "Question",
                CommentParent::Answer => "Answer",
            };
            AppError::Core(CoreError::not_found(entity, input.parent_id))
        })?;

    tracing::info!(
        user_id = auth.user_id,
        comment_id = comment.id,
        parent_type = %input.parent_type,
        parent_id = input.parent_id,
        "Comment created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: comment })))
}

/// PUT /comments/{id}
///
/// Owner only.
pub async fn update_comment(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateComment>,
) -> AppResult<impl IntoResponse> {
    validate_comment_content(&input.content).map_err(CoreError::Validation)?;

    let comment = CommentRepo::update(&state.pool, id, auth.user_id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Comment", id)))?;

    tracing::info!(user_id = auth.user_id, comment_id = id, "Comment updated");

    Ok(Json(DataResponse { data: comment }))
}

/// DELETE /comments/{id}
///
/// Owner only.
pub async fn delete_comment(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = CommentRepo::delete(&state.pool, id, auth.user_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::not_found("Comment", id)));
    }

    tracing::info!(user_id = auth.user_id, comment_id = id, "Comment deleted");
    Ok(StatusCode::NO_CONTENT)
}
