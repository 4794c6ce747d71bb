use super::shutdown::{ShutdownCoordinator, coordinated_shutdown, shutdown_signal};
use crate::errors::handlers::{method_not_allowed, not_found};
use crate::http::cors::cors_layer_from_env;
use crate::http::security::security_headers;
use axum::{Router, middleware};
use core_config::server::ServerConfig;
use std::io;
use std::time::Duration;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;

/// Bind the configured address and serve `router` until SIGTERM or ctrl-c.
///
/// # Errors
/// Fails when the address cannot be bound or the server stops with an error.
pub async fn create_app(router: Router, server_config: &ServerConfig) -> io::Result<()> {
    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;

    info!("Server starting on {}", listener.local_addr()?);
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        })?;

    Ok(())
}

/// Wrap API routes with the shared middleware stack and documentation UIs.
///
/// The returned router serves Swagger UI, ReDoc, RapiDoc and Scalar from the
/// OpenAPI document of `T`, nests `apis` under `/api`, and answers anything
/// else with the JSON 404 fallback (or the JSON 405 when the path exists but
/// the method does not). Requests pass through request tracing, security
/// headers, CORS and response compression.
///
/// Liveness and readiness endpoints are the caller's business: merge
/// `health_router()` and a ready handler where the app wants them.
///
/// CORS origins come from `CORS_ALLOWED_ORIGIN`, a comma-separated list
/// (for example `https://example.com,https://app.example.com`). When the
/// variable is unset every origin is allowed, which is only meant for local
/// development.
///
/// # Errors
/// Fails when `CORS_ALLOWED_ORIGIN` is set but empty or unparseable.
///
/// # Example
/// ```ignore
/// use axum_helpers::server::create_router;
///
/// let router = create_router::<ApiDoc>(api_routes).await?;
/// ```
pub async fn create_router<T>(apis: Router) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    use utoipa_rapidoc::RapiDoc;
    use utoipa_redoc::{Redoc, Servable as RedocServable};
    use utoipa_scalar::{Scalar, Servable as ScalarServable};
    use utoipa_swagger_ui::SwaggerUi;

    let cors_layer = cors_layer_from_env()?;

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .merge(Redoc::with_url("/redoc", T::openapi()))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
        .merge(Scalar::with_url("/scalar", T::openapi()))
        .nest("/api", apis)
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(cors_layer)
        // Compresses responses based on the Accept-Encoding header
        .layer(CompressionLayer::new());

    Ok(router)
}

/// Serve `router` with coordinated shutdown and a bounded cleanup phase.
///
/// On SIGTERM or ctrl-c the server stops accepting connections, drains the
/// open ones, and then runs `cleanup` with `shutdown_timeout` as its budget.
/// A cleanup that overruns the budget is abandoned with a warning instead of
/// blocking process exit.
///
/// # Example
/// ```ignore
/// create_production_app(router, &config, Duration::from_secs(30), async move {
///     close_postgres(db, "main").await;
/// })
/// .await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let (coordinator, _rx) = ShutdownCoordinator::new();
    let shutdown_handle = coordinator.clone();

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let cleanup_task = tokio::spawn(async move {
        shutdown_handle.wait_for_signal().await;

        info!("Running cleanup (budget: {:?})", shutdown_timeout);
        match tokio::time::timeout(shutdown_timeout, cleanup).await {
            Ok(_) => info!("Cleanup finished"),
            Err(_) => {
                tracing::warn!("Cleanup still running after {:?}, abandoning it", shutdown_timeout);
            }
        }
    });

    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(coordinated_shutdown(coordinator))
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    // Exit only after the cleanup task has had its chance
    cleanup_task.await.ok();

    serve_result
}
