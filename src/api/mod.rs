//! Dashboard HTTP API
//!
//! HTTP layer for the dashboard, built with Axum.
//!
//! # Endpoints
//!
//! ## Dashboard
//! - `GET /` - Full dashboard page (`name`, `year`, `month`, `color` query)
//!
//! ## Data
//! - `GET /api/v1/dataset` - Generated tables as JSON
//! - `GET /api/v1/charts/sales.svg` - Sales line chart
//! - `GET /api/v1/charts/performance.svg` - Performance bar chart
//! - `GET /api/v1/export?table=` - One table as CSV
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use datatech_dashboard::api::{serve, AppState};
//! use datatech_dashboard::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let state = AppState::new(config.dashboard.clone(), config.server.clone());
//!     serve(state).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{http::HeaderValue, routing::get, Router};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/dataset", get(routes::dataset::get_dataset))
        .route("/charts/sales.svg", get(routes::charts::sales_chart))
        .route("/charts/performance.svg", get(routes::charts::performance_chart))
        .route("/export", get(routes::export::export_table));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let cors = cors_layer(&state.server.cors_origins);
    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::dashboard::index))
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

/// Permissive when no origins are configured
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!(origin = %o, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if allowed.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new().allow_origin(AllowOrigin::list(allowed))
    }
}

/// Start the HTTP server
pub async fn serve(state: AppState) -> Result<(), ApiError> {
    let addr = state.server.addr();
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Dashboard listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Dashboard shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DashboardConfig, ServerConfig};
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        build_router(AppState::new(DashboardConfig::default(), ServerConfig::default()))
    }

    async fn get(uri: &str) -> (StatusCode, Option<String>, String) {
        let response = create_test_app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health_live() {
        let (status, _, _) = get("/health/live").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready() {
        let (status, _, _) = get("/health/ready").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let (status, _, body) = get("/health").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "healthy");
    }

    #[tokio::test]
    async fn test_index_with_defaults() {
        let (status, content_type, body) = get("/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(content_type.unwrap().starts_with("text/html"));
        assert!(body.contains("Dashboard Interactivo de DataTech Solutions"));
        assert!(body.contains("Usuario activo: <b>Usuario</b>"));
        assert_eq!(body.matches("class=\"marker\"").count(), 12);
        assert_eq!(body.matches("class=\"bar\"").count(), 4);
    }

    #[tokio::test]
    async fn test_index_with_empty_name_and_black() {
        let (status, _, body) = get("/?name=&year=2022&month=3&color=%23000000").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Usuario activo: <b></b>"));
        assert!(body.contains("stroke=\"#000000\""));
        assert!(body.contains("Periodo seleccionado: 3/2022"));
    }

    #[tokio::test]
    async fn test_index_rejects_year_outside_set() {
        let (status, _, body) = get("/?year=1999").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("VALIDATION_ERROR"));
    }

    #[tokio::test]
    async fn test_index_rejects_bad_color() {
        let (status, _, _) = get("/?color=blue").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_dataset_json() {
        let (status, _, body) = get("/api/v1/dataset?name=Ana&month=4").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["seed"], 42);
        assert_eq!(json["preferences"]["display_name"], "Ana");
        assert_eq!(json["preferences"]["month"], 4);
        assert_eq!(json["sales"].as_array().unwrap().len(), 12);
        assert_eq!(json["sales"][0]["month"], "Enero");
        assert_eq!(json["performance"].as_array().unwrap().len(), 4);
        assert_eq!(json["customers"].as_array().unwrap().len(), 10);
    }

    #[tokio::test]
    async fn test_dataset_is_stable_between_requests() {
        let (_, _, first) = get("/api/v1/dataset").await;
        let (_, _, second) = get("/api/v1/dataset").await;

        let a: serde_json::Value = serde_json::from_str(&first).unwrap();
        let b: serde_json::Value = serde_json::from_str(&second).unwrap();
        assert_eq!(a["sales"], b["sales"]);
        assert_eq!(a["performance"], b["performance"]);
        assert_eq!(a["customers"], b["customers"]);
    }

    #[tokio::test]
    async fn test_sales_chart_svg() {
        let (status, content_type, body) = get("/api/v1/charts/sales.svg?color=%23000000").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("image/svg+xml"));
        assert!(body.contains("stroke=\"#000000\""));
    }

    #[tokio::test]
    async fn test_performance_chart_svg_default_color() {
        let (status, _, body) = get("/api/v1/charts/performance.svg").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.matches("fill=\"#3498db\"").count(), 4);
    }

    #[tokio::test]
    async fn test_export_csv() {
        let (status, content_type, body) = get("/api/v1/export?table=performance").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("text/csv"));
        assert!(body.starts_with("department,score\n"));
        assert_eq!(body.lines().count(), 5);
    }

    #[tokio::test]
    async fn test_export_unknown_table() {
        let (status, _, _) = get("/api/v1/export?table=orders").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
