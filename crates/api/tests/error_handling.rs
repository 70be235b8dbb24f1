//! Tests for `AppError` -> HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no server or
//! database is involved.

use assert_matches::assert_matches;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use studyhub_api::error::AppError;
use studyhub_core::completion::CompletionError;
use studyhub_core::error::CoreError;
use studyhub_core::generation::GenerationError;

async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::not_found("Question", 42));
    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Question with id 42 not found");
}

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation("goal: is missing".into()));
    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "goal: is missing");
}

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("Question title cannot be empty".into());
    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn unauthorized_and_forbidden() {
    let (status, json) =
        error_to_response(AppError::Core(CoreError::Unauthorized("no token".into()))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["code"], "UNAUTHORIZED");

    let (status, json) =
        error_to_response(AppError::Core(CoreError::Forbidden("not yours".into()))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["code"], "FORBIDDEN");
}

#[tokio::test]
async fn internal_errors_are_sanitized() {
    let (status, json) =
        error_to_response(AppError::InternalError("secret stack detail".into())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");

    let (_, json) = error_to_response(AppError::Database(sqlx::Error::PoolTimedOut)).await;
    assert_eq!(json["code"], "INTERNAL_ERROR");
}

#[tokio::test]
async fn row_not_found_returns_404() {
    let (status, json) = error_to_response(AppError::Database(sqlx::Error::RowNotFound)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Generation errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_input_returns_400() {
    let err = AppError::from(GenerationError::MissingInput("topic"));
    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "MISSING_INPUT");
    assert_eq!(json["error"], "Missing required parameter: topic");
}

#[tokio::test]
async fn not_configured_returns_500() {
    let (status, json) = error_to_response(GenerationError::NotConfigured.into()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "COMPLETION_NOT_CONFIGURED");
}

#[tokio::test]
async fn malformed_output_returns_500_without_raw_text() {
    let err = GenerationError::MalformedOutput {
        reason: "expected value at line 1 column 1".into(),
        output_len: 27,
    };
    let (status, json) = error_to_response(err.into()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "MALFORMED_OUTPUT");
    assert_eq!(json["error"], "Failed to parse the generated roadmap");
}

#[tokio::test]
async fn invalid_structure_names_path() {
    let err = GenerationError::InvalidStructure {
        path: "roadmap".into(),
        reason: "expected exactly 5 stages, found 4".into(),
    };
    let (status, json) = error_to_response(err.into()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INVALID_STRUCTURE");
    let message = json["error"].as_str().unwrap();
    assert!(message.contains("roadmap"));
    assert!(message.contains("found 4"));
}

#[tokio::test]
async fn upstream_failure_returns_502_without_provider_body() {
    let err = GenerationError::Upstream(CompletionError::Api {
        status: 503,
        body: "internal provider trace".into(),
    });
    let (status, json) = error_to_response(err.into()).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["code"], "UPSTREAM_FAILURE");
    assert!(!json["error"].as_str().unwrap().contains("provider trace"));
}

#[test]
fn generation_errors_convert_into_app_error() {
    let err: AppError = GenerationError::NotConfigured.into();
    assert_matches!(err, AppError::Generation(GenerationError::NotConfigured));
}
