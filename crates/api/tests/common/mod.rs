#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use studyhub_api::auth::jwt::{generate_access_token, JwtConfig};
use studyhub_api::auth::password::hash_password;
use studyhub_api::config::ServerConfig;
use studyhub_api::router::build_app_router;
use studyhub_api::state::AppState;
use studyhub_core::completion::{CompletionError, CompletionRequest, CompletionService};
use studyhub_db::models::user::{CreateUser, User};
use studyhub_db::repositories::UserRepo;

pub const TEST_PASSWORD: &str = "test_password_123!";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 60,
            refresh_token_expiry_days: 7,
        },
    }
}

/// Build the production router with no completion provider configured.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_with_completion(pool, None)
}

/// Build the production router with the given completion provider.
pub fn build_app_with_completion(
    pool: PgPool,
    completion: Option<Arc<dyn CompletionService>>,
) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        completion,
    };
    build_app_router(state, &config)
}

/// Build the production router backed by `stub`.
pub fn build_app_with_stub(pool: PgPool, stub: &Arc<StubCompletion>) -> Router {
    let service: Arc<dyn CompletionService> = stub.clone();
    build_app_with_completion(pool, Some(service))
}

// ---------------------------------------------------------------------------
// Completion stub
// ---------------------------------------------------------------------------

/// Replays a fixed reply and counts calls.
pub struct StubCompletion {
    reply: Result<String, u16>,
    calls: Mutex<usize>,
}

impl StubCompletion {
    pub fn replying(reply: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(reply.into()),
            calls: Mutex::new(0),
        })
    }

    pub fn failing(status: u16) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(status),
            calls: Mutex::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl CompletionService for StubCompletion {
    async fn complete(&self, _request: &CompletionRequest) -> Result<String, CompletionError> {
        *self.calls.lock().unwrap() += 1;
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(status) => Err(CompletionError::Api {
                status: *status,
                body: "provider unavailable".to_string(),
            }),
        }
    }
}

/// A well-formed roadmap document with `stages` stages, 3 topics each and
/// 2 resources per topic.
pub fn roadmap_json(stages: usize) -> serde_json::Value {
    let roadmap: Vec<_> = (1..=stages)
        .map(|s| {
            let topics: Vec<_> = (1..=3)
                .map(|t| {
                    serde_json::json!({
                        "name": format!("Topic {s}.{t}"),
                        "description": format!("Learn part {s}.{t}"),
                        "resources": [
                            { "name": "The Book", "url": format!("https://example.com/{s}/{t}") },
                            { "name": "Course", "url": format!("https://example.org/{s}/{t}") },
                        ],
                    })
                })
                .collect();
            serde_json::json!({ "stage": format!("Stage {s}"), "topics": topics })
        })
        .collect();

    serde_json::json!({
        "goal": "Build backend systems in Rust",
        "skill_level": "beginner",
        "roadmap": roadmap,
    })
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

/// Create a user directly in the database with [`TEST_PASSWORD`].
pub async fn create_user(pool: &PgPool, username: &str) -> User {
    let input = CreateUser {
        username: username.to_string(),
        display_name: format!("{username} display"),
        password_hash: hash_password(TEST_PASSWORD).expect("hashing should succeed"),
    };
    UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed")
}

/// Mint an access token for `user` with the test JWT secret.
pub fn token_for(user: &User) -> String {
    generate_access_token(user.id, &user.display_name, &test_config().jwt)
        .expect("token generation should succeed")
}

/// Create a user and return it with a valid access token.
pub async fn user_with_token(pool: &PgPool, username: &str) -> (User, String) {
    let user = create_user(pool, username).await;
    let token = token_for(&user);
    (user, token)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// POST a body verbatim, for requests that are not valid JSON.
pub async fn post_raw_auth(app: Router, uri: &str, body: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}
