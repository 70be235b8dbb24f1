//! Repository for the `questions` table.

use sqlx::PgPool;
use studyhub_core::search::{substring_pattern, Page};
use studyhub_core::types::DbId;

use crate::models::question::{CreateQuestion, Question, UpdateQuestion};

/// Column list for questions queries.
const COLUMNS: &str = "id, user_id, author, title, content, views, created_at, updated_at";

/// Provides CRUD operations for forum questions.
pub struct QuestionRepo;

impl QuestionRepo {
    /// Insert a new question owned by `user_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        author: &str,
        input: &CreateQuestion,
    ) -> Result<Question, sqlx::Error> {
        let query = format!(
            "INSERT INTO questions (user_id, author, title, content)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(user_id)
            .bind(author)
            .bind(&input.title)
            .bind(&input.content)
            .fetch_one(pool)
            .await
    }

    /// Find a question by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions WHERE id = $1");
        sqlx::query_as::<_, Question>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List questions newest first, optionally filtered by a case-insensitive
    /// substring of the title or content.
    pub async fn list(
        pool: &PgPool,
        search: Option<&str>,
        page: Page,
    ) -> Result<Vec<Question>, sqlx::Error> {
        let pattern = substring_pattern(search);
        let query = format!(
            "SELECT {COLUMNS} FROM questions
             WHERE ($1::TEXT IS NULL OR title ILIKE $1 OR content ILIKE $1)
             ORDER BY created_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(pattern)
            .bind(page.limit)
            .bind(page.skip)
            .fetch_all(pool)
            .await
    }

    /// Update a question owned by `user_id`.
    ///
    /// Returns `None` when no row matches both `id` and `user_id`.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        input: &UpdateQuestion,
    ) -> Result<Option<Question>, sqlx::Error> {
        let query = format!(
            "UPDATE questions SET
                title = COALESCE($3, title),
                content = COALESCE($4, content),
                updated_at = NOW()
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&input.title)
            .bind(&input.content)
            .fetch_optional(pool)
            .await
    }

    /// Delete a question owned by `user_id`. Returns `true` if a row was deleted.
    ///
    /// Answers cascade with the question. Comments on the question and on
    /// its answers are removed by triggers in the same statement.
    pub async fn delete(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Atomically add one to the view counter. Returns `true` if the row exists.
    pub async fn increment_views(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE questions SET views = views + 1 WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
