// crates/server/src/routes/coding.rs
//! Coding session endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;

use devwell_core::{CodingSession, DEFAULT_WINDOW_DAYS};

use crate::auth::CurrentUser;
use crate::error::{ApiError, ApiResult};
use crate::metrics::record_log_entry;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LogCodingRequest {
    pub duration_minutes: i64,
    pub notes: Option<String>,
}

/// POST /api/coding/log - Record a coding session.
pub async fn log_coding_session(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    Json(body): Json<LogCodingRequest>,
) -> ApiResult<Json<CodingSession>> {
    if body.duration_minutes < 1 {
        return Err(ApiError::Validation(
            "Duration must be at least 1 minute".to_string(),
        ));
    }

    let u = state.require_user(&user.email).await?;
    let session = state
        .db
        .insert_coding_session(
            u.id,
            body.duration_minutes,
            body.notes.as_deref(),
            Utc::now().timestamp(),
        )
        .await?;
    record_log_entry("coding");

    Ok(Json(session))
}

/// GET /api/coding/weekly-trends - Coding sessions from the last 7 days.
pub async fn weekly_trends(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
) -> ApiResult<Json<Vec<CodingSession>>> {
    let u = state.require_user(&user.email).await?;
    let since = Utc::now().timestamp() - DEFAULT_WINDOW_DAYS * 86_400;
    Ok(Json(state.db.coding_sessions_since(u.id, since).await?))
}

/// Create the coding routes router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/coding/log", post(log_coding_session))
        .route("/coding/weekly-trends", get(weekly_trends))
}
