// crates/server/src/routes/mood.rs
//! Mood log endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;

use devwell_core::{MoodLog, DEFAULT_WINDOW_DAYS};

use crate::auth::CurrentUser;
use crate::error::{ApiError, ApiResult};
use crate::metrics::record_log_entry;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LogMoodRequest {
    pub mood_score: f64,
    pub tiredness_level: Option<i64>,
    pub notes: Option<String>,
}

/// POST /api/mood/log - Record a mood check-in.
pub async fn log_mood(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    Json(body): Json<LogMoodRequest>,
) -> ApiResult<Json<MoodLog>> {
    if !(0.0..=5.0).contains(&body.mood_score) {
        return Err(ApiError::Validation(
            "mood_score must be between 0 and 5".to_string(),
        ));
    }
    if let Some(level) = body.tiredness_level {
        if !(0..=10).contains(&level) {
            return Err(ApiError::Validation(
                "tiredness_level must be between 0 and 10".to_string(),
            ));
        }
    }

    let u = state.require_user(&user.email).await?;
    let log = state
        .db
        .insert_mood_log(
            u.id,
            body.mood_score,
            body.tiredness_level,
            body.notes.as_deref(),
            Utc::now().timestamp(),
        )
        .await?;
    record_log_entry("mood");

    Ok(Json(log))
}

/// GET /api/mood/weekly-trends - Mood logs from the last 7 days, ascending.
pub async fn weekly_trends(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
) -> ApiResult<Json<Vec<MoodLog>>> {
    let u = state.require_user(&user.email).await?;
    let since = Utc::now().timestamp() - DEFAULT_WINDOW_DAYS * 86_400;
    Ok(Json(state.db.mood_logs_since(u.id, since).await?))
}

/// Create the mood routes router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/mood/log", post(log_mood))
        .route("/mood/weekly-trends", get(weekly_trends))
}
