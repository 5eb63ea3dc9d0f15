//! # doubtdesk HTTP Server Module
//!
//! Serves the doubt form and a small JSON API on a single Axum router.
//!
//! # Endpoints
//!
//! - `/` - Doubt form (GET renders, POST explains)
//! - `/health` - Health check
//! - `/api/*` - Catalog lookups and JSON explanations
//! - `/observability/*` - Health and metrics

pub mod api_routes;
pub mod config;
pub mod doubt_routes;
pub mod errors;
pub mod observability_routes;
pub mod page;
pub mod server;
pub mod state;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;
pub use state::AppState;
