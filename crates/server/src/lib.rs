// crates/server/src/lib.rs
//! DevWell server library.
//!
//! Axum-based HTTP layer for the DevWell wellness tracker: email/password
//! auth with bearer tokens, wellness log endpoints, the weekly dashboard,
//! and the Paystack donation proxy.

pub mod auth;
pub mod config;
pub mod error;
pub mod metrics;
pub mod paystack;
pub mod routes;
pub mod state;

pub use config::{ServerConfig, DEFAULT_PORT};
pub use error::*;
pub use metrics::init_metrics;
pub use routes::api_routes;
pub use state::AppState;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the Axum application with all routes and middleware.
///
/// This sets up:
/// - API routes (auth, wellness logs, profile, dashboard, payments)
/// - CORS for the frontend dev server (allows any origin)
/// - Request tracing
pub fn create_app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(api_routes(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

// ============================================================================
// Integration Tests
// ============================================================================
