//! Request body extractor with JSON error responses.

use axum::extract::FromRequest;

use crate::error::AppError;

/// `axum::Json`, but a body that cannot be read or deserialized becomes an
/// [`AppError::BadRequest`] and is rendered as `400 { "error", "code" }`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
