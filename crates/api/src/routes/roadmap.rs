//! Route definitions for saved roadmaps, mounted at `/roadmaps`.

use axum::routing::get;
use axum::Router;

use crate::handlers::roadmap;
use crate::state::AppState;

/// ```text
/// GET    /       -> list_roadmaps (?limit, skip)
/// GET    /{id}   -> get_roadmap
/// PUT    /{id}   -> update_roadmap
/// DELETE /{id}   -> delete_roadmap
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(roadmap::list_roadmaps)).route(
        "/{id}",
        get(roadmap::get_roadmap)
            .put(roadmap::update_roadmap)
            .delete(roadmap::delete_roadmap),
    )
}
