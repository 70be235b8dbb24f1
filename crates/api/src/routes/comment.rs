//! Route definitions for comments, mounted at `/comments`.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::comment;
use crate::state::AppState;

/// ```text
/// GET    /       -> list_comments (?parent_type, parent_id, limit, skip)
/// POST   /       -> create_comment
/// PUT    /{id}   -> update_comment
/// DELETE /{id}   -> delete_comment
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(comment::list_comments).post(comment::create_comment),
        )
        .route(
            "/{id}",
            put(comment::update_comment).delete(comment::delete_comment),
        )
}
