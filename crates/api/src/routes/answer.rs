//! Route definitions for answers, mounted at `/answers`.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::answer;
use crate::state::AppState;

/// ```text
/// GET    /            -> list_answers (?question_id, limit, skip)
/// POST   /            -> create_answer
/// PUT    /{id}        -> update_answer
/// DELETE /{id}        -> delete_answer
/// POST   /{id}/vote   -> vote_answer
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(answer::list_answers).post(answer::create_answer))
        .route(
            "/{id}",
            put(answer::update_answer).delete(answer::delete_answer),
        )
        .route("/{id}/vote", post(answer::vote_answer))
}
