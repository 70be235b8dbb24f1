//! Saved roadmap model.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use studyhub_core::roadmap::Stage;
use studyhub_core::types::{DbId, Timestamp};

/// A row from the `roadmaps` table.
///
/// `stages` is stored as JSONB and serialized under the `roadmap` key to
/// match the generation response shape.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Roadmap {
    pub id: DbId,
    pub user_id: DbId,
    pub goal: String,
    pub skill_level: String,
    #[serde(rename = "roadmap")]
    pub stages: Json<Vec<Stage>>,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
}

/// DTO for persisting a validated roadmap.
#[derive(Debug)]
pub struct CreateRoadmap {
    pub goal: String,
    pub skill_level: String,
    pub stages: Vec<Stage>,
}

/// DTO for editing a roadmap. Absent fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateRoadmap {
    pub goal: Option<String>,
    pub skill_level: Option<String>,
    #[serde(rename = "roadmap")]
    pub stages: Option<Vec<Stage>>,
}
