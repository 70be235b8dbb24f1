//! Shared response envelope types for API handlers.
//!
//! Resource endpoints use a `{ "data": ... }` envelope. The roadmap
//! generation and save endpoints return their own documented shapes.

use serde::Serialize;
use studyhub_core::types::DbId;

/// Standard `{ "data": T }` response envelope.
///
/// ```ignore
/// Ok(Json(DataResponse { data: items }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Body returned by `POST /save-roadmap`.
#[derive(Debug, Serialize)]
pub struct SavedRoadmapResponse {
    pub message: &'static str,
    #[serde(rename = "roadmapId")]
    pub roadmap_id: DbId,
}
