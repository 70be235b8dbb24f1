//! Handlers for forum questions.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use studyhub_core::error::CoreError;
use studyhub_core::forum::{validate_question_content, validate_question_title};
use studyhub_core::types::DbId;
use studyhub_db::models::question::{CreateQuestion, UpdateQuestion};
use studyhub_db::repositories::QuestionRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::query::QuestionListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /questions?limit=&skip=&search=
///
/// Public. Newest first; `search` is a case-insensitive substring match on
/// title or content.
pub async fn list_questions(
    State(state): State<AppState>,
    Query(params): Query<QuestionListParams>,
) -> AppResult<impl IntoResponse> {
    let questions =
        QuestionRepo::list(&state.pool, params.search.as_deref(), params.page()).await?;
    Ok(Json(DataResponse { data: questions }))
}

/// POST /questions
pub async fn create_question(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateQuestion>,
) -> AppResult<impl IntoResponse> {
    validate_question_title(&input.title).map_err(CoreError::Validation)?;
    validate_question_content(&input.content).map_err(CoreError::Validation)?;

    let question = QuestionRepo::create(&state.pool, auth.user_id, auth.author(), &input).await?;

    tracing::info!(
        user_id = auth.user_id,
        question_id = question.id,
        "Question created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: question })))
}

/// GET /questions/{id}
///
/// Public. Bumps the view counter in the background; the response carries
/// the count as it was before this view, and a failed bump never fails the
/// read.
pub async fn get_question(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let question = QuestionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Question", id)))?;

    let pool = state.pool.clone();
    tokio::spawn(async move {
        if let Err(e) = QuestionRepo::increment_views(&pool, id).await {
            tracing::warn!(question_id = id, error = %e, "Failed to increment question views");
        }
    });

    Ok(Json(DataResponse { data: question }))
}

/// PUT /questions/{id}
///
/// Owner only. 404 when the question is absent or owned by someone else.
pub async fn update_question(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateQuestion>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref title) = input.title {
        validate_question_title(title).map_err(CoreError::Validation)?;
    }
    if let Some(ref content) = input.content {
        validate_question_content(content).map_err(CoreError::Validation)?;
    }

    let question = QuestionRepo::update(&state.pool, id, auth.user_id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Question", id)))?;

    tracing::info!(user_id = auth.user_id, question_id = id, "Question updated");

    Ok(Json(DataResponse { data: question }))
}

/// DELETE /questions/{id}
///
/// Owner only. Answers are removed with the question.
pub async fn delete_question(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = QuestionRepo::delete(&state.pool, id, auth.user_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::not_found("Question", id)));
    }

    tracing::info!(user_id = auth.user_id, question_id = id, "Question deleted");
    Ok(StatusCode::NO_CONTENT)
}
