//! # HTTP Server
//!
//! Main HTTP server combining all endpoint routers.

use std::io;
use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::api_routes::api_routes;
use super::config::HttpServerConfig;
use super::doubt_routes::doubt_routes;
use super::observability_routes::{health_routes, observability_routes};
use super::state::AppState;
use crate::observability::{log_event, Event};

/// HTTP Server for the doubt desk
pub struct HttpServer {
    config: HttpServerConfig,
    state: Arc<AppState>,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default())
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(config: HttpServerConfig) -> Self {
        let state = Arc::new(AppState::new(config.clone()));
        let router = Self::build_router(&config, state.clone());
        Self {
            config,
            state,
            router,
        }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, state: Arc<AppState>) -> Router {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<HeaderValue> = config
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
            // Form page at root
            .merge(doubt_routes(state.clone()))
            // Health check at root level
            .merge(health_routes(state.clone()))
            // JSON API under /api
            .nest("/api", api_routes(state.clone()))
            // Observability routes under /observability
            .nest("/observability", observability_routes(state))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Shared state (metrics, config)
    pub fn state(&self) -> Arc<AppState> {
        self.state.clone()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind the listener, resolving `host` as a name or an IP literal
    pub async fn bind(&self) -> Result<TcpListener, io::Error> {
        TcpListener::bind((self.config.host.as_str(), self.config.port)).await
    }

    /// Start the HTTP server and run until Ctrl-C
    pub async fn start(self) -> Result<(), io::Error> {
        let listener = self.bind().await?;
        let addr = listener.local_addr()?;
        tracing::info!(
            event = %Event::Serving,
            addr = %addr,
            "doubt desk available at http://{}",
            addr
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        log_event(Event::ShutdownComplete);
        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
