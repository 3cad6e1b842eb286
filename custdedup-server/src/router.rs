use axum::{extract::DefaultBodyLimit, http::StatusCode, response::IntoResponse, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::api;
use crate::state::AppState;

const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", api::router())
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
        .with_state(state)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
}

async fn root() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({
            "message": "Customer Deduplication API",
            "status": "running",
            "version": env!("CARGO_PKG_VERSION"),
        })),
    )
}

async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, axum::Json(serde_json::json!({"status": "healthy"})))
}

#[cfg(test)]
mod tests {
    use crate::test_helpers::test_server;

    #[tokio::test]
    async fn test_root_endpoint() {
        let server = test_server();
        let response = server.get("/").await;

        response.assert_status_ok();
        let json: serde_json::Value = response.json();
        assert_eq!(json["status"], "running");
        assert_eq!(json["version"], "1.0.0");
        assert_eq!(json["message"], "Customer Deduplication API");
    }

    #[tokio::test]
    async fn test_health_endpoints() {
        let server = test_server();
        for path in ["/health", "/healthz"] {
            let response = server.get(path).await;
            response.assert_status_ok();
            assert_eq!(response.json::<serde_json::Value>()["status"], "healthy");
        }
    }
}
