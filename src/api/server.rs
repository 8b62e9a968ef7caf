//! # HTTP Server
//!
//! Axum server wiring the review endpoints over the shared record
//! store. The store is immutable after startup, so handlers share it
//! through an `Arc` with no locking.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::observability::Logger;
use crate::store::RecordStore;

use super::config::ServerConfig;
use super::errors::ApiError;
use super::handler;

/// HTTP server for the review API.
pub struct ApiServer {
    config: ServerConfig,
    router: Router,
}

impl ApiServer {
    /// Creates a server with default configuration.
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self::with_config(ServerConfig::default(), store)
    }

    /// Creates a server with custom configuration.
    pub fn with_config(config: ServerConfig, store: Arc<RecordStore>) -> Self {
        let router = Self::build_router(&config, store);
        Self { config, router }
    }

    /// Builds the router with all endpoints and CORS.
    fn build_router(config: &ServerConfig, store: Arc<RecordStore>) -> Router {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .route("/api/review-items", get(handler::list_review_items))
            .route("/api/health", get(handler::health))
            .fallback(handler::not_found)
            .layer(CatchPanicLayer::custom(handle_panic))
            .layer(cors)
            .with_state(store)
    }

    /// The configured socket address.
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// The router, for driving the server in tests.
    pub fn router(self) -> Router {
        self.router
    }

    /// Binds and serves until the process exits.
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, format!("{}", e)))?;

        Logger::info("SERVER_START", &[("addr", &addr.to_string())]);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

/// Converts a handler panic into the generic internal-error response,
/// so the caller never sees a partial result or a bare 500 body.
fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| err.downcast_ref::<&str>().map(|s| s.to_string()))
        .unwrap_or_else(|| "unknown panic".to_string());

    Logger::error("REQUEST_PANIC", &[("detail", &detail)]);

    ApiError::Internal(detail).into_response()
}
