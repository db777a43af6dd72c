//! Static site server: serves the compiled frontend plus a health route and
//! one debug database-check endpoint.

use crate::types::{DbCheckResponse, HealthResponse};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::path::PathBuf;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    db: Option<PgPool>,
}

/// Create a lazy connection pool for the debug check; no connection is
/// attempted until the endpoint is hit.
pub fn connect_database(url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(1)
        .acquire_timeout(Duration::from_secs(5))
        .connect_lazy(url)
}

/// Build the router: `/health`, `/debug/db`, everything else falls through to
/// the static directory with an SPA index fallback.
pub fn build_router(static_dir: PathBuf, db: Option<PgPool>) -> Router {
    let spa = ServeDir::new(&static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/health", get(health))
        .route("/debug/db", get(db_check))
        .fallback_service(spa)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .with_state(AppState { db })
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn db_check(State(state): State<AppState>) -> (StatusCode, Json<DbCheckResponse>) {
    let Some(pool) = state.db else {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(DbCheckResponse {
                status: "unconfigured".to_string(),
                error: None,
            }),
        );
    };

    match sqlx::query_scalar::<_, i32>("SELECT 1").fetch_one(&pool).await {
        Ok(_) => (
            StatusCode::OK,
            Json(DbCheckResponse {
                status: "ok".to_string(),
                error: None,
            }),
        ),
        Err(e) => {
            tracing::warn!("database check failed: {e}");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(DbCheckResponse {
                    status: "error".to_string(),
                    error: Some(e.to_string()),
                }),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    #[tokio::test]
    async fn health_reports_ok() {
        let app = build_router(PathBuf::from("static"), None);
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .unwrap();
        let health: HealthResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(health.status, "ok");
    }

    #[tokio::test]
    async fn db_check_without_database_is_unavailable() {
        let app = build_router(PathBuf::from("static"), None);
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/debug/db")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .unwrap();
        let check: DbCheckResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(check.status, "unconfigured");
    }
}
