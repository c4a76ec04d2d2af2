// crates/server/src/routes/dashboard.rs
//! Weekly dashboard endpoint.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;

use devwell_core::{build_dashboard, DashboardConfig, DashboardResponse};

use crate::auth::CurrentUser;
use crate::error::{ApiError, ApiResult};
use crate::metrics::record_request;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    pub days: Option<i64>,
}

/// GET /api/dashboard/stats - Aggregated stats over a trailing window.
///
/// `days` defaults to 7. Five sequential reads (four log categories plus
/// the profile) feed a pure reduction; a failed read propagates unmodified
/// as the request failure.
pub async fn dashboard_stats(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    Query(query): Query<DashboardQuery>,
) -> ApiResult<Json<DashboardResponse>> {
    let started = Instant::now();
    let days = query.days.unwrap_or(state.dashboard.window_days);
    if days < 1 {
        return Err(ApiError::Validation(
            "days must be a positive integer".to_string(),
        ));
    }

    let u = state.require_user(&user.email).await?;
    let since = Utc::now().timestamp() - days * 86_400;
    let logs = state.db.window_logs(u.id, since).await?;
    let profile = state.db.get_profile(u.id).await?;

    let cfg = DashboardConfig {
        window_days: days,
        ..state.dashboard.clone()
    };
    let response = build_dashboard(&logs, profile.as_ref(), &cfg);
    record_request("dashboard_stats", "200", started.elapsed());

    Ok(Json(response))
}

/// Create the dashboard routes router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/dashboard/stats", get(dashboard_stats))
}
