use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use studyhub_core::error::CoreError;
use studyhub_core::generation::GenerationError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors, [`GenerationError`] for the roadmap
/// pipeline, and adds HTTP-specific variants. Implements [`IntoResponse`] to
/// produce consistent `{ "error", "code" }` JSON bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `studyhub_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A roadmap generation failure.
    #[error(transparent)]
    Generation(#[from] GenerationError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Unreadable request bodies (bad JSON, wrong field types, missing content
/// type) are the caller's mistake.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    internal()
                }
            },

            // --- Generation pipeline ---
            AppError::Generation(err) => classify_generation_error(err),

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

/// Classify a generation failure.
///
/// Caller mistakes map to 400. Provider misbehaviour maps to 500 (bad output)
/// or 502 (the call itself failed). Provider error bodies are logged, never
/// returned.
fn classify_generation_error(err: &GenerationError) -> (StatusCode, &'static str, String) {
    match err {
        GenerationError::MissingInput(_) => {
            (StatusCode::BAD_REQUEST, "MISSING_INPUT", err.to_string())
        }
        GenerationError::InvalidLevel(msg) => {
            (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
        }
        GenerationError::NotConfigured => {
            tracing::error!("Roadmap generation requested but no completion provider is configured");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "COMPLETION_NOT_CONFIGURED",
                err.to_string(),
            )
        }
        GenerationError::Upstream(source) => {
            tracing::error!(error = %source, "Completion provider call failed");
            (
                StatusCode::BAD_GATEWAY,
                "UPSTREAM_FAILURE",
                "The completion service request failed".to_string(),
            )
        }
        GenerationError::MalformedOutput { reason, output_len } => {
            tracing::debug!(%reason, output_len, "Completion output is not valid JSON");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "MALFORMED_OUTPUT",
                "Failed to parse the generated roadmap".to_string(),
            )
        }
        GenerationError::InvalidStructure { path, reason } => {
            tracing::warn!(%path, %reason, "Generated roadmap failed structural validation");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INVALID_STRUCTURE",
                err.to_string(),
            )
        }
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (constraint name starting with `uq_`) map to 409.
/// - Foreign key violations map to 404: the referenced row is gone.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            // PostgreSQL unique constraint violation: error code 23505
            if db_err.code().as_deref() == Some("23505") {
                let constraint = db_err.constraint().unwrap_or("unknown");
                if constraint.starts_with("uq_") {
                    return (
                        StatusCode::CONFLICT,
                        "CONFLICT",
                        conflict_message(constraint),
                    );
                }
            }
            // PostgreSQL foreign key violation: error code 23503
            if db_err.code().as_deref() == Some("23503") {
                return (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    missing_reference_message(db_err.constraint()),
                );
            }
            tracing::error!(error = %db_err, "Database error");
            internal()
        }
        other => {
            tracing::error!(error = %other, "Database error");
            internal()
        }
    }
}

fn conflict_message(constraint: &str) -> String {
    match constraint {
        "uq_users_username" => "Username is already taken".to_string(),
        other => format!("Duplicate value violates unique constraint: {other}"),
    }
}

fn missing_reference_message(constraint: Option<&str>) -> String {
    match constraint {
        Some("answers_question_id_fkey") => "Question not found".to_string(),
        _ => "Referenced resource not found".to_string(),
    }
}
