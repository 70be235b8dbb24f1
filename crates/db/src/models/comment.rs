//! Comment model. A comment hangs off either a question or an answer.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use studyhub_core::forum::CommentParent;
use studyhub_core::types::{DbId, Timestamp};

/// A row from the `comments` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Comment {
    pub id: DbId,
    pub parent_type: String,
    pub parent_id: DbId,
    pub user_id: DbId,
    pub author: String,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
}

/// DTO for posting a comment.
#[derive(Debug, Deserialize)]
pub struct CreateComment {
    pub parent_type: CommentParent,
    pub parent_id: DbId,
    pub content: String,
}

/// DTO for editing a comment.
#[derive(Debug, Deserialize)]
pub struct UpdateComment {
    pub content: String,
}
