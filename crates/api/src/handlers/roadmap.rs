//! Handlers for roadmap generation and saved roadmaps.
//!
//! Generation and persistence are separate steps: `POST /generate-roadmap`
//! returns an unsaved draft, and only `POST /save-roadmap` writes it. Every
//! roadmap written (saved or updated) passes the same structural validator
//! used on model output.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::{Map, Value};
use studyhub_core::error::CoreError;
use studyhub_core::generation::{self, GenerationError, RoadmapRequest};
use studyhub_core::roadmap::{validate_stages, validate_structure, RoadmapDraft};
use studyhub_core::types::DbId;
use studyhub_db::models::roadmap::{CreateRoadmap, UpdateRoadmap};
use studyhub_db::repositories::RoadmapRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::query::PaginationParams;
use crate::response::{DataResponse, SavedRoadmapResponse};
use crate::state::AppState;

/// Request body for `POST /save-roadmap`.
///
/// `userId` is optional; when present it must name the caller.
#[derive(Debug, Deserialize)]
pub struct SaveRoadmapRequest {
    #[serde(rename = "userId")]
    pub user_id: Option<DbId>,
    #[serde(flatten)]
    pub roadmap: Map<String, Value>,
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// POST /generate-roadmap
///
/// Ask the completion provider for a roadmap and return the validated draft
/// as `{ goal, skill_level, roadmap }`. Nothing is persisted.
pub async fn generate_roadmap(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<RoadmapRequest>,
) -> AppResult<Json<RoadmapDraft>> {
    // Bad input is reported before a missing provider.
    let topic = input.validate()?.topic;

    let service = state
        .completion
        .as_deref()
        .ok_or(GenerationError::NotConfigured)?;

    let draft = generation::generate(service, &input).await?;

    tracing::info!(
        user_id = auth.user_id,
        topic = %topic,
        skill_level = %draft.skill_level,
        "Roadmap generated"
    );

    Ok(Json(draft))
}

// ---------------------------------------------------------------------------
// Saved roadmaps
// ---------------------------------------------------------------------------

/// POST /save-roadmap
///
/// Persist a roadmap for the caller. Returns 201 with
/// `{ message, roadmapId }`.
pub async fn save_roadmap(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<SaveRoadmapRequest>,
) -> AppResult<impl IntoResponse> {
    if let Some(user_id) = input.user_id {
        if user_id != auth.user_id {
            return Err(AppError::Core(CoreError::Forbidden(
                "Cannot save a roadmap on behalf of another user".into(),
            )));
        }
    }

    let draft = validate_structure(&Value::Object(input.roadmap))
        .map_err(|v| AppError::Core(CoreError::Validation(v.to_string())))?;

    let roadmap = RoadmapRepo::create(
        &state.pool,
        auth.user_id,
        &CreateRoadmap {
            goal: draft.goal,
            skill_level: draft.skill_level,
            stages: draft.roadmap,
        },
    )
    .await?;

    tracing::info!(user_id = auth.user_id, roadmap_id = roadmap.id, "Roadmap saved");

    Ok((
        StatusCode::CREATED,
        Json(SavedRoadmapResponse {
            message: "Roadmap saved successfully",
            roadmap_id: roadmap.id,
        }),
    ))
}

/// GET /roadmaps?limit=&skip=
///
/// List the caller's own roadmaps, newest first.
pub async fn list_roadmaps(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    let roadmaps = RoadmapRepo::list_by_user(&state.pool, auth.user_id, params.page()).await?;
    Ok(Json(DataResponse { data: roadmaps }))
}

/// GET /roadmaps/{id}
///
/// 404 when the roadmap does not exist or belongs to someone else.
pub async fn get_roadmap(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let roadmap = RoadmapRepo::find_by_id_for_owner(&state.pool, id, auth.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Roadmap", id)))?;

    Ok(Json(DataResponse { data: roadmap }))
}

/// PUT /roadmaps/{id}
///
/// Partial update. A replacement `roadmap` array must satisfy the same
/// structure as a generated one.
pub async fn update_roadmap(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateRoadmap>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref goal) = input.goal {
        non_blank(goal, "goal")?;
    }
    if let Some(ref level) = input.skill_level {
        non_blank(level, "skill_level")?;
    }
    if let Some(ref stages) = input.stages {
        validate_stages(stages).map_err(|v| AppError::Core(CoreError::Validation(v.to_string())))?;
    }

    let roadmap = RoadmapRepo::update(&state.pool, id, auth.user_id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Roadmap", id)))?;

    tracing::info!(user_id = auth.user_id, roadmap_id = id, "Roadmap updated");

    Ok(Json(DataResponse { data: roadmap }))
}

/// DELETE /roadmaps/{id}
pub async fn delete_roadmap(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = RoadmapRepo::delete(&state.pool, id, auth.user_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::not_found("Roadmap", id)));
    }

    tracing::info!(user_id = auth.user_id, roadmap_id = id, "Roadmap deleted");
    Ok(StatusCode::NO_CONTENT)
}

fn non_blank(value: &str, field: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(format!(
            "{field} cannot be empty"
        ))));
    }
    Ok(())
}
