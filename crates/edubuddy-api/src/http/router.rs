//! Axum router configuration with middleware.
//!
//! All API routes are under `/api/v1/`.
//! Middleware: CORS, tracing.
//!
//! The browser front end is served from `EDUBUDDY_WEB_DIR` (default `web`).
//! API routes take priority; unknown paths fall through to `index.html`.
//! If the directory does not exist, only the API is served.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/chat", post(handlers::chat::chat))
        .route("/persona", post(handlers::persona::set_persona))
        .route("/history", get(handlers::history::get_history))
        .route("/reset", post(handlers::history::reset_conversation));

    let mut router = Router::new()
        .nest("/api/v1", api_routes)
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let web_dir = std::env::var("EDUBUDDY_WEB_DIR").unwrap_or_else(|_| "web".to_string());
    if std::path::Path::new(&web_dir).exists() {
        let index_path = format!("{web_dir}/index.html");
        let serve_dir = ServeDir::new(&web_dir).fallback(ServeFile::new(index_path));
        router = router.fallback_service(serve_dir);
        tracing::info!(path = %web_dir, "static file serving enabled");
    }

    router
}

/// GET /health - Liveness check with a database ping.
///
/// Reports "degraded" when the database is unreachable; chat still works in
/// that state through the session fallback.
async fn health_check(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> axum::Json<serde_json::Value> {
    let database = match sqlx::query("SELECT 1").fetch_one(&state.db_pool.reader).await {
        Ok(_) => "ok",
        Err(_) => "unreachable",
    };

    axum::Json(serde_json::json!({
        "status": if database == "ok" { "ok" } else { "degraded" },
        "database": database,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
