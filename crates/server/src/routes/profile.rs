// crates/server/src/routes/profile.rs
//! Onboarding profile endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;

use devwell_core::UserProfile;

use crate::auth::CurrentUser;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

fn default_diet_preference() -> String {
    "balanced".to_string()
}

/// Onboarding payload. The frontend submits whatever the user filled in;
/// only the diet preference has a server-side default.
#[derive(Debug, Deserialize)]
pub struct OnboardingRequest {
    pub nickname: Option<String>,
    pub timezone: Option<String>,
    pub work_hours_start: Option<String>,
    pub work_hours_end: Option<String>,
    pub coding_style: Option<String>,
    #[serde(default)]
    pub wellness_goals: Vec<String>,
    #[serde(default = "default_diet_preference")]
    pub diet_preference: String,
    pub reminder_frequency: Option<String>,
    pub age: Option<i64>,
    pub weight: Option<f64>,
}

/// POST /api/profile/onboarding - Submit the onboarding profile.
///
/// One profile per user; a second submission answers 400.
pub async fn submit_onboarding(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    Json(body): Json<OnboardingRequest>,
) -> ApiResult<Json<UserProfile>> {
    let u = state.require_user(&user.email).await?;
    if state.db.get_profile(u.id).await?.is_some() {
        return Err(ApiError::ProfileExists);
    }

    let profile = UserProfile {
        user_id: u.id,
        nickname: body.nickname,
        timezone: body.timezone,
        work_hours_start: body.work_hours_start,
        work_hours_end: body.work_hours_end,
        coding_style: body.coding_style,
        wellness_goals: body.wellness_goals,
        diet_preference: body.diet_preference,
        reminder_frequency: body.reminder_frequency,
        age: body.age,
        weight: body.weight,
        created_at: Utc::now().timestamp(),
    };
    state.db.insert_profile(&profile).await?;
    tracing::info!(user_id = u.id, "Onboarding profile created");

    Ok(Json(profile))
}

/// GET /api/profile/me - The caller's profile, or JSON `null` before
/// onboarding.
pub async fn my_profile(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
) -> ApiResult<Json<Option<UserProfile>>> {
    let u = state.require_user(&user.email).await?;
    Ok(Json(state.db.get_profile(u.id).await?))
}

/// Create the profile routes router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/profile/onboarding", post(submit_onboarding))
        .route("/profile/me", get(my_profile))
}
