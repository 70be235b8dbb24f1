//! Handlers for answers and answer voting.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use studyhub_core::error::CoreError;
use studyhub_core::forum::{validate_answer_content, VoteType};
use studyhub_core::search::Page;
use studyhub_core::types::DbId;
use studyhub_db::models::answer::{CreateAnswer, UpdateAnswer};
use studyhub_db::repositories::AnswerRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /answers`.
#[derive(Debug, Deserialize)]
pub struct AnswerListParams {
    #[serde(alias = "questionId")]
    pub question_id: DbId,
    pub limit: Option<i64>,
    pub skip: Option<i64>,
}

/// Request body for `POST /answers/{id}/vote`.
#[derive(Debug, Deserialize)]
pub struct VoteRequest {
    #[serde(alias = "voteType")]
    pub vote_type: VoteType,
}

/// GET /answers?question_id=&limit=&skip=
///
/// Public. Answers to one question, newest first.
pub async fn list_answers(
    State(state): State<AppState>,
    Query(params): Query<AnswerListParams>,
) -> AppResult<impl IntoResponse> {
    let page = Page::from_params(params.limit, params.skip);
    let answers = AnswerRepo::list_by_question(&state.pool, params.question_id, page).await?;
    Ok(Json(DataResponse { data: answers }))
}

/// POST /answers
///
/// 404 when the question does not exist, including when it is deleted while
/// the answer is being written.
pub async fn create_answer(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateAnswer>,
) -> AppResult<impl IntoResponse> {
    validate_answer_content(&input.content).map_err(CoreError::Validation)?;

    let answer = AnswerRepo::create(&state.pool, auth.user_id, auth.author(), &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Question", input.question_id)))?;

    tracing::info!(
        user_id = auth.user_id,
        question_id = answer.question_id,
        answer_id = answer.id,
        "Answer created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: answer })))
}

/// PUT /answers/{id}
///
/// Owner only.
pub async fn update_answer(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateAnswer>,
) -> AppResult<impl IntoResponse> {
    validate_answer_content(&input.content).map_err(CoreError::Validation)?;

    let answer = AnswerRepo::update(&state.pool, id, auth.user_id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Answer", id)))?;

    tracing::info!(user_id = auth.user_id, answer_id = id, "Answer updated");

    Ok(Json(DataResponse { data: answer }))
}

/// DELETE /answers/{id}
///
/// Owner only.
pub async fn delete_answer(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = AnswerRepo::delete(&state.pool, id, auth.user_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::not_found("Answer", id)));
    }

    tracing::info!(user_id = auth.user_id, answer_id = id, "Answer deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /answers/{id}/vote
///
/// Atomically adds one (`upvote`) or subtracts one (`downvote`).
pub async fn vote_answer(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<VoteRequest>,
) -> AppResult<impl IntoResponse> {
    let answer = AnswerRepo::add_vote(&state.pool, id, input.vote_type.delta())
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Answer", id)))?;

    tracing::info!(
        user_id = auth.user_id,
        answer_id = id,
        vote = ?input.vote_type,
        votes = answer.votes,
        "Answer voted"
    );

    Ok(Json(DataResponse { data: answer }))
}
