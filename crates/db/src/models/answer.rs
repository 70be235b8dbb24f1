//! Forum answer model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use studyhub_core::types::{DbId, Timestamp};

/// A row from the `answers` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Answer {
    pub id: DbId,
    pub question_id: DbId,
    pub user_id: DbId,
    pub author: String,
    pub content: String,
    pub votes: i64,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
}

/// DTO for answering a question.
#[derive(Debug, Deserialize)]
pub struct CreateAnswer {
    #[serde(alias = "questionId")]
    pub question_id: DbId,
    pub content: String,
}

/// DTO for editing an answer.
#[derive(Debug, Deserialize)]
pub struct UpdateAnswer {
    pub content: String,
}
