use super::shutdown::shutdown_signal;
use crate::errors::handlers::not_found;
use axum::{Json, Router, routing::get};
use core_config::server::ServerConfig;
use std::io;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;

/// Route serving the generated OpenAPI document as JSON.
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// Starts the Axum server with graceful shutdown.
///
/// # Errors
/// Returns an error if:
/// - The TCP listener fails to bind to the configured address
/// - The server encounters an error during operation
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use core_config::server::ServerConfig;
/// use axum_helpers::server::create_app;
///
/// let config = ServerConfig::default();
/// create_app(Router::new(), &config).await?;
/// ```
pub async fn create_app(router: Router, server_config: &ServerConfig) -> io::Result<()> {
    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;

    info!("Server starting on {}", listener.local_addr()?);
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        })?;

    info!("Server stopped");
    Ok(())
}

/// Wraps domain routes with the cross-cutting pieces every app shares.
///
/// This sets up:
/// - The OpenAPI document at [`OPENAPI_PATH`]
/// - Request tracing
/// - A JSON 404 fallback for unmatched routes
///
/// `apis` must already have its state applied. Health endpoints are merged
/// separately with [`health_router`](super::health_router).
///
/// # Example
/// ```ignore
/// #[derive(OpenApi)]
/// #[openapi(nest((path = "/tasks", api = domain_tasks::ApiDoc)))]
/// struct ApiDoc;
///
/// let api_routes = Router::new().nest("/tasks", domain_tasks::handlers::router(service));
/// let router = create_router::<ApiDoc>(api_routes);
/// ```
pub fn create_router<T>(apis: Router) -> Router
where
    T: OpenApi + 'static,
{
    let doc = T::openapi();

    Router::new()
        .route(OPENAPI_PATH, get(move || async move { Json(doc) }))
        .merge(apis)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}
