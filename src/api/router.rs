use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use super::health;
use super::middleware::logging_middleware;
use super::rephrase;
use super::state::AppState;

/// Routes mounted under `/api`
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/rephrase", post(rephrase::rephrase))
        .route("/rephrase/stream", post(rephrase::rephrase_stream))
}

/// Create the full router with application state
///
/// When `static_dir` is given, every path not matched by the API is served
/// from it, with `index.html` as the fallback page.
pub fn create_router(state: AppState, static_dir: Option<&str>) -> Router {
    let router = Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        .nest("/api", create_api_router())
        .with_state(state);

    let router = match static_dir {
        Some(dir) => {
            let index = format!("{}/index.html", dir.trim_end_matches('/'));
            router.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)))
        }
        None => router,
    };

    router
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;
    use crate::domain::llm::MockCompletionProvider;

    fn state(credential_configured: bool) -> AppState {
        AppState::new(Arc::new(MockCompletionProvider::new()), credential_configured)
    }

    async fn get_json(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        (status, serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null))
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json(create_router(state(true), None), "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_ready_with_credential() {
        let (status, body) = get_json(create_router(state(true), None), "/ready").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_ready_without_credential_is_degraded() {
        let (status, body) = get_json(create_router(state(false), None), "/ready").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "degraded");
        assert_eq!(body["checks"][0]["message"], "No API key configured");
    }

    #[tokio::test]
    async fn test_live() {
        let (status, _) = get_json(create_router(state(true), None), "/live").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_rephrase_requires_post() {
        let (status, _) = get_json(create_router(state(true), None), "/api/rephrase").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_unknown_path_without_ui() {
        let (status, _) = get_json(create_router(state(true), None), "/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_serves_ui_index() {
        let dir = concat!(env!("CARGO_MANIFEST_DIR"), "/public");
        let response = create_router(state(true), Some(dir))
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("Text Rephraser"));
    }
}
