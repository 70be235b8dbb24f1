use std::net::SocketAddr;
use std::sync::Arc;

use studyhub_core::completion::CompletionService;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use studyhub_api::config::ServerConfig;
use studyhub_api::router::build_app_router;
use studyhub_api::state::AppState;
use studyhub_completion::{ChatCompletionsApi, CompletionConfig};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "studyhub_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = studyhub_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    studyhub_db::health_check(&pool)
        .await
        .expect("Database health check failed");

    studyhub_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    // --- Completion provider ---
    let completion: Option<Arc<dyn CompletionService>> = match CompletionConfig::from_env() {
        Some(completion_config) => {
            tracing::info!(
                model = %completion_config.model,
                base_url = %completion_config.base_url,
                "Completion provider configured"
            );
            let api: Arc<dyn CompletionService> = Arc::new(
                ChatCompletionsApi::new(completion_config)
                    .expect("Failed to build completion HTTP client"),
            );
            Some(api)
        }
        None => {
            tracing::warn!("OPENAI_API_KEY not set; roadmap generation is disabled");
            None
        }
    };

    // --- App state ---
    let state = AppState {
        pool: pool.clone(),
        config: Arc::new(config.clone()),
        completion,
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // --- Post-shutdown cleanup ---
    tracing::info!("Server stopped accepting connections, closing database pool");
    pool.close().await;
    tracing::info!("Graceful shutdown complete");
}

/// Wait for SIGINT (Ctrl-C) or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
