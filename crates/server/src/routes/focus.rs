// crates/server/src/routes/focus.rs
//! Focus session endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;

use devwell_core::{FocusSession, DEFAULT_WINDOW_DAYS};

use crate::auth::CurrentUser;
use crate::error::{ApiError, ApiResult};
use crate::metrics::record_log_entry;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LogFocusRequest {
    pub duration_minutes: i64,
}

/// POST /api/focus/log - Record a completed focus session.
pub async fn log_focus_session(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    Json(body): Json<LogFocusRequest>,
) -> ApiResult<Json<FocusSession>> {
    if body.duration_minutes < 1 {
        return Err(ApiError::Validation(
            "Duration must be at least 1 minute".to_string(),
        ));
    }

    let u = state.require_user(&user.email).await?;
    let session = state
        .db
        .insert_focus_session(u.id, body.duration_minutes, Utc::now().timestamp())
        .await?;
    record_log_entry("focus");

    Ok(Json(session))
}

/// GET /api/focus/weekly-trends - Focus sessions from the last 7 days.
pub async fn weekly_trends(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
) -> ApiResult<Json<Vec<FocusSession>>> {
    let u = state.require_user(&user.email).await?;
    let since = Utc::now().timestamp() - DEFAULT_WINDOW_DAYS * 86_400;
    Ok(Json(state.db.focus_sessions_since(u.id, since).await?))
}

/// Create the focus routes router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/focus/log", post(log_focus_session))
        .route("/focus/weekly-trends", get(weekly_trends))
}
