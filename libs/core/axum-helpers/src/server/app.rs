use crate::errors::handlers::{method_not_allowed, not_found};
use axum::Router;
use core_config::server::ServerConfig;
use std::future::Future;
use std::io;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Binds the configured address and serves `router` until `shutdown` resolves.
///
/// In-flight requests are drained before this returns.
///
/// # Errors
/// Returns an error if the listener fails to bind or the server fails while running.
pub async fn create_app<F>(router: Router, server_config: &ServerConfig, shutdown: F) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;

    info!("HTTP server listening on {}", listener.local_addr()?);
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown)
        .await
        .inspect_err(|e| {
            tracing::error!("HTTP server encountered an error: {:?}", e);
        })?;

    info!("HTTP server stopped");
    Ok(())
}

/// Creates the HTTP router shared by every app.
///
/// - Swagger UI at `/swagger-ui`, document at `/api-docs/openapi.json`
/// - `apis` nested under `/api`
/// - JSON 404 / 405 fallbacks
/// - request tracing and response compression
///
/// Domain routers apply their own state; health routes are merged by the caller.
pub fn create_router<T>(apis: Router) -> Router
where
    T: OpenApi + 'static,
{
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .nest("/api", apis)
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CompressionLayer::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode, routing::get};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    #[derive(OpenApi)]
    #[openapi(info(title = "test"))]
    struct TestDoc;

    fn app() -> Router {
        create_router::<TestDoc>(Router::new().route("/ping", get(|| async { "pong" })))
    }

    #[tokio::test]
    async fn test_api_routes_are_nested() {
        let response = app()
            .oneshot(Request::get("/api/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_route_returns_json_404() {
        let response = app()
            .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["code"], 1004);
        assert_eq!(body["error"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let response = app()
            .oneshot(
                Request::get("/api-docs/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
