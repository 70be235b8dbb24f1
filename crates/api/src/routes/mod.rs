pub mod answer;
pub mod auth;
pub mod comment;
pub mod health;
pub mod question;
pub mod roadmap;

use axum::routing::post;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Public routes are the auth entry points and the forum reads; every other
/// route takes an `AuthUser` and answers 401 without a valid token.
///
/// ```text
/// /auth/register                     register (public)
/// /auth/login                        login (public)
/// /auth/refresh                      refresh (public)
/// /auth/logout                       logout
/// /auth/me                           current user
///
/// /generate-roadmap                  generate a draft (POST)
/// /save-roadmap                      persist a draft (POST)
/// /roadmaps                          list own
/// /roadmaps/{id}                     get, update, delete (owner)
///
/// /questions                         list (public), create
/// /questions/{id}                    get (public), update, delete (owner)
///
/// /answers                           list (public), create
/// /answers/{id}                      update, delete (owner)
/// /answers/{id}/vote                 vote (POST)
///
/// /comments                          list (public), create
/// /comments/{id}                     update, delete (owner)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .route(
            "/generate-roadmap",
            post(handlers::roadmap::generate_roadmap),
        )
        .route("/save-roadmap", post(handlers::roadmap::save_roadmap))
        .nest("/roadmaps", roadmap::router())
        .nest("/questions", question::router())
        .nest("/answers", answer::router())
        .nest("/comments", comment::router())
}
