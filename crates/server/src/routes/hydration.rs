// crates/server/src/routes/hydration.rs
//! Hydration log endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;

use devwell_core::{HydrationLog, DEFAULT_WINDOW_DAYS};

use crate::auth::CurrentUser;
use crate::error::{ApiError, ApiResult};
use crate::metrics::record_log_entry;
use crate::state::AppState;

fn default_daily_goal() -> i64 {
    8
}

#[derive(Debug, Deserialize)]
pub struct LogHydrationRequest {
    pub water_glasses: i64,
    #[serde(default)]
    pub coffee_cups: i64,
    #[serde(default = "default_daily_goal")]
    pub daily_goal: i64,
}

/// POST /api/hydration/log - Record a hydration entry.
pub async fn log_hydration(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    Json(body): Json<LogHydrationRequest>,
) -> ApiResult<Json<HydrationLog>> {
    if body.water_glasses < 0 || body.coffee_cups < 0 || body.daily_goal < 0 {
        return Err(ApiError::Validation(
            "hydration counts must not be negative".to_string(),
        ));
    }

    let u = state.require_user(&user.email).await?;
    let log = state
        .db
        .insert_hydration_log(
            u.id,
            body.water_glasses,
            body.coffee_cups,
            body.daily_goal,
            Utc::now().timestamp(),
        )
        .await?;
    record_log_entry("hydration");

    Ok(Json(log))
}

/// GET /api/hydration/weekly-trends - Hydration logs from the last 7 days.
pub async fn weekly_trends(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
) -> ApiResult<Json<Vec<HydrationLog>>> {
    let u = state.require_user(&user.email).await?;
    let since = Utc::now().timestamp() - DEFAULT_WINDOW_DAYS * 86_400;
    Ok(Json(state.db.hydration_logs_since(u.id, since).await?))
}

/// Create the hydration routes router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/hydration/log", post(log_hydration))
        .route("/hydration/weekly-trends", get(weekly_trends))
}
