//! Repository for the `comments` table.

use sqlx::PgPool;
use studyhub_core::forum::CommentParent;
use studyhub_core::search::Page;
use studyhub_core::types::DbId;

use crate::models::comment::{Comment, CreateComment, UpdateComment};

/// Column list for comments queries.
const COLUMNS: &str =
    "id, parent_type, parent_id, user_id, author, content, created_at, updated_at";

/// Provides CRUD operations for comments on questions and answers.
pub struct CommentRepo;

impl CommentRepo {
    /// Insert a new comment owned by `user_id`, returning the created row.
    ///
    /// Returns `None` when the parent question or answer does not exist. The
    /// parent row is key-share locked for the duration of the insert, so the
    /// delete trigger on the parent always sees the new comment.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        author: &str,
        input: &CreateComment,
    ) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!(
            "WITH parent AS (
                 SELECT id FROM {table} WHERE id = $2 FOR KEY SHARE
             )
             INSERT INTO comments (parent_type, parent_id, user_id, author, content)
             SELECT $1, parent.id, $3, $4, $5 FROM parent
             RETURNING {COLUMNS}",
            table = parent_table(input.parent_type),
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(input.parent_type.as_str())
            .bind(input.parent_id)
            .bind(user_id)
            .bind(author)
            .bind(&input.content)
            .fetch_optional(pool)
            .await
    }

    /// Find a comment by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM comments WHERE id = $1");
        sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List comments on a question or answer, newest first.
    pub async fn list_by_parent(
        pool: &PgPool,
        parent_type: CommentParent,
        parent_id: DbId,
        page: Page,
    ) -> Result<Vec<Comment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM comments
             WHERE parent_type = $1 AND parent_id = $2
             ORDER BY created_at DESC, id DESC
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(parent_type.as_str())
            .bind(parent_id)
            .bind(page.limit)
            .bind(page.skip)
            .fetch_all(pool)
            .await
    }

    /// Update a comment owned by `user_id`.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        input: &UpdateComment,
    ) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!(
            "UPDATE comments SET content = $3, updated_at = NOW()
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&input.content)
            .fetch_optional(pool)
            .await
    }

    /// Delete a comment owned by `user_id`. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

fn parent_table(parent: CommentParent) -> &'static str {
    match parent {
        CommentParent::Question => "questions",
        CommentParent::Answer => "answers",
    }
}
