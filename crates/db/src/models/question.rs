//! Forum question model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use studyhub_core::types::{DbId, Timestamp};

/// A row from the `questions` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Question {
    pub id: DbId,
    pub user_id: DbId,
    pub author: String,
    pub title: String,
    pub content: String,
    pub views: i64,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
}

/// DTO for asking a new question. Owner and author come from the session.
#[derive(Debug, Deserialize)]
pub struct CreateQuestion {
    pub title: String,
    pub content: String,
}

/// DTO for editing a question. Absent fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateQuestion {
    pub title: Option<String>,
    pub content: Option<String>,
}
