//! API route handlers for the DevWell server.

pub mod auth;
pub mod coding;
pub mod dashboard;
pub mod focus;
pub mod health;
pub mod hydration;
pub mod metrics;
pub mod mood;
pub mod payments;
pub mod profile;

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET / - Welcome message, mirrors the public root of the API.
pub async fn welcome() -> Json<Value> {
    Json(json!({ "message": "Welcome to DevWell API" }))
}

/// Create the combined API router with all routes under the /api prefix.
///
/// Routes:
/// - GET  /api/health - Health check
/// - GET  /api/metrics - Prometheus metrics
/// - POST /api/auth/signup - Register and receive a bearer token
/// - POST /api/auth/login - Exchange credentials for a bearer token
/// - POST /api/mood/log - Record a mood check-in
/// - GET  /api/mood/weekly-trends - Mood logs from the last 7 days
/// - POST /api/hydration/log - Record a hydration entry
/// - GET  /api/hydration/weekly-trends - Hydration logs from the last 7 days
/// - POST /api/coding/log - Record a coding session
/// - GET  /api/coding/weekly-trends - Coding sessions from the last 7 days
/// - POST /api/focus/log - Record a focus session
/// - GET  /api/focus/weekly-trends - Focus sessions from the last 7 days
/// - POST /api/profile/onboarding - Submit the onboarding profile
/// - GET  /api/profile/me - Fetch the caller's profile (null when absent)
/// - GET  /api/dashboard/stats - Aggregated weekly dashboard
/// - POST /api/payments/initialize - Start a donation transaction
/// - GET  /api/payments/verify/{reference} - Verify a transaction
/// - POST /api/payments/webhook - Paystack webhook receiver
pub fn api_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(welcome))
        .nest("/api", health::router())
        .nest("/api", metrics::router())
        .nest("/api", auth::router())
        .nest("/api", mood::router())
        .nest("/api", hydration::router())
        .nest("/api", coding::router())
        .nest("/api", focus::router())
        .nest("/api", profile::router())
        .nest("/api", dashboard::router())
        .nest("/api", payments::router())
        .with_state(state)
}
