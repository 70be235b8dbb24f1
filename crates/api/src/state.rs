use std::sync::Arc;

use studyhub_core::completion::CompletionService;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: studyhub_db::DbPool,
    /// Server configuration (JWT settings are read by the auth extractor).
    pub config: Arc<ServerConfig>,
    /// Text-completion provider for roadmap generation. `None` when no API
    /// key is configured; generation then fails with `NotConfigured`.
    pub completion: Option<Arc<dyn CompletionService>>,
}
