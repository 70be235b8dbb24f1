//! Repository for the `roadmaps` table.
//!
//! Every read and write is scoped to the owning user. Structural validation
//! happens before these methods are called; stages are stored as given.

use sqlx::types::Json;
use sqlx::PgPool;
use studyhub_core::search::Page;
use studyhub_core::types::DbId;

use crate::models::roadmap::{CreateRoadmap, Roadmap, UpdateRoadmap};

/// Column list for roadmaps queries.
const COLUMNS: &str = "id, user_id, goal, skill_level, stages, created_at, updated_at";

/// Provides owner-scoped CRUD operations for saved roadmaps.
pub struct RoadmapRepo;

impl RoadmapRepo {
    /// Persist a roadmap for `user_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateRoadmap,
    ) -> Result<Roadmap, sqlx::Error> {
        let query = format!(
            "INSERT INTO roadmaps (user_id, goal, skill_level, stages)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Roadmap>(&query)
            .bind(user_id)
            .bind(&input.goal)
            .bind(&input.skill_level)
            .bind(Json(&input.stages))
            .fetch_one(pool)
            .await
    }

    /// Find a roadmap by ID, visible only to its owner.
    pub async fn find_by_id_for_owner(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<Roadmap>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM roadmaps WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, Roadmap>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List a user's roadmaps, newest first.
    pub async fn list_by_user(
        pool: &PgPool,
        user_id: DbId,
        page: Page,
    ) -> Result<Vec<Roadmap>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM roadmaps
             WHERE user_id = $1
             ORDER BY created_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Roadmap>(&query)
            .bind(user_id)
            .bind(page.limit)
            .bind(page.skip)
            .fetch_all(pool)
            .await
    }

    /// Update a roadmap owned by `user_id`. Absent fields keep their value.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        input: &UpdateRoadmap,
    ) -> Result<Option<Roadmap>, sqlx::Error> {
        let query = format!(
            "UPDATE roadmaps SET
                goal = COALESCE($3, goal),
                skill_level = COALESCE($4, skill_level),
                stages = COALESCE($5, stages),
                updated_at = NOW()
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Roadmap>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&input.goal)
            .bind(&input.skill_level)
            .bind(input.stages.as_ref().map(Json))
            .fetch_optional(pool)
            .await
    }

    /// Delete a roadmap owned by `user_id`. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM roadmaps WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
