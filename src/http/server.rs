//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the resolver handler
//! - Wire up middleware (tracing, timeout, request ID, panic recovery)
//! - Hand the raw path-and-query string to the resolver
//! - Map resolver classifications onto status codes
//!
//! # Design Decisions
//! - A catch-all fallback instead of a route table: the resolver owns the
//!   whole path space, including the 404 classification
//! - Panic recovery at the boundary keeps one failed request from taking
//!   down the listening loop

use axum::{
    body::Body,
    extract::State,
    http::{header, Method, Request, StatusCode},
    response::{Html, IntoResponse, Response},
    Router,
};
use std::any::Any;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::limit::GlobalConcurrencyLimitLayer;
use tower_http::{
    catch_panic::CatchPanicLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServiceConfig;
use crate::http::response;
use crate::resolver::{ResolveError, SubnetResolver};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<SubnetResolver>,
}

/// HTTP server for the subnet service.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServiceConfig) -> Self {
        let resolver = Arc::new(SubnetResolver::from_config(&config.resolver));

        let state = AppState { resolver };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        Router::new()
            .fallback(resolve_handler)
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
            .layer(CatchPanicLayer::custom(handle_panic))
            .layer(GlobalConcurrencyLimitLayer::new(
                config.listener.max_connections,
            ))
    }

    /// Run the server, accepting connections on the given listener until
    /// the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

/// Single-endpoint handler.
/// Hands the raw path-and-query string to the resolver and maps its
/// classification onto a status code.
async fn resolve_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    let raw_path = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| request.uri().path())
        .to_string();

    tracing::debug!(
        request_id = %request_id,
        path = %raw_path,
        "Resolving request"
    );

    if request.method() != Method::GET {
        tracing::warn!(request_id = %request_id, method = %request.method(), "Unsupported method");
        return response::error_response(
            StatusCode::NOT_IMPLEMENTED,
            &format!("Unsupported method ({})", request.method()),
        );
    }

    match state.resolver.resolve(&raw_path) {
        Ok(result) => {
            tracing::debug!(request_id = %request_id, result = %result, "Query resolved");
            Html(response::subnet_page(&result)).into_response()
        }
        Err(error @ ResolveError::PrefixInvalid) => {
            tracing::warn!(request_id = %request_id, path = %raw_path, "Resource outside /subnet");
            response::error_response(StatusCode::NOT_FOUND, &error.to_string())
        }
        Err(error @ ResolveError::ShapeInvalid) => {
            tracing::warn!(request_id = %request_id, path = %raw_path, "Malformed query");
            response::error_response(StatusCode::BAD_REQUEST, &error.to_string())
        }
    }
}

/// Boundary recovery: report the fault, keep the listening loop alive.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> axum::http::Response<String> {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown internal fault".to_string()
    };

    tracing::error!(error = %detail, "Request handler panicked");

    axum::http::Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header(header::CONTENT_TYPE, "text/html")
        .body(response::error_page(
            StatusCode::INTERNAL_SERVER_ERROR,
            &detail,
        ))
        .unwrap()
}
