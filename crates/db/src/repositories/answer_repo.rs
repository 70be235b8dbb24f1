//! Repository for the `answers` table.

use sqlx::PgPool;
use studyhub_core::search::Page;
use studyhub_core::types::DbId;

use crate::models::answer::{Answer, CreateAnswer, UpdateAnswer};

/// Column list for answers queries.
const COLUMNS: &str = "id, question_id, user_id, author, content, votes, created_at, updated_at";

/// Provides CRUD and voting operations for answers.
pub struct AnswerRepo;

impl AnswerRepo {
    /// Insert a new answer owned by `user_id`, returning the created row.
    ///
    /// Returns `None` when the question does not exist. The question row is
    /// key-share locked by the same statement, so a concurrent delete either
    /// waits for the insert or makes it find nothing.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        author: &str,
        input: &CreateAnswer,
    ) -> Result<Option<Answer>, sqlx::Error> {
        let query = format!(
            "WITH question AS (
                 SELECT id FROM questions WHERE id = $1 FOR KEY SHARE
             )
             INSERT INTO answers (question_id, user_id, author, content)
             SELECT question.id, $2, $3, $4 FROM question
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Answer>(&query)
            .bind(input.question_id)
            .bind(user_id)
            .bind(author)
            .bind(&input.content)
            .fetch_optional(pool)
            .await
    }

    /// Find an answer by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Answer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM answers WHERE id = $1");
        sqlx::query_as::<_, Answer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List answers to a question, newest first.
    pub async fn list_by_question(
        pool: &PgPool,
        question_id: DbId,
        page: Page,
    ) -> Result<Vec<Answer>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM answers
             WHERE question_id = $1
             ORDER BY created_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Answer>(&query)
            .bind(question_id)
            .bind(page.limit)
            .bind(page.skip)
            .fetch_all(pool)
            .await
    }

    /// Update the content of an answer owned by `user_id`.
    ///
    /// Returns `None` when no row matches both `id` and `user_id`.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        input: &UpdateAnswer,
    ) -> Result<Option<Answer>, sqlx::Error> {
        let query = format!(
            "UPDATE answers SET content = $3, updated_at = NOW()
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Answer>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&input.content)
            .fetch_optional(pool)
            .await
    }

    /// Delete an answer owned by `user_id`. Returns `true` if a row was deleted.
    ///
    /// Comments on the answer are removed with it by a trigger.
    pub async fn delete(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM answers WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Atomically add `delta` to the vote counter, returning the updated row.
    pub async fn add_vote(
        pool: &PgPool,
        id: DbId,
        delta: i64,
    ) -> Result<Option<Answer>, sqlx::Error> {
        let query = format!(
            "UPDATE answers SET votes = votes + $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Answer>(&query)
            .bind(id)
            .bind(delta)
            .fetch_optional(pool)
            .await
    }
}
