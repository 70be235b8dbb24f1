//! Route definitions for forum questions, mounted at `/questions`.

use axum::routing::get;
use axum::Router;

use crate::handlers::question;
use crate::state::AppState;

/// ```text
/// GET    /       -> list_questions (?limit, skip, search)
/// POST   /       -> create_question
/// GET    /{id}   -> get_question
/// PUT    /{id}   -> update_question
/// DELETE /{id}   -> delete_question
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(question::list_questions).post(question::create_question),
        )
        .route(
            "/{id}",
            get(question::get_question)
                .put(question::update_question)
                .delete(question::delete_question),
        )
}
