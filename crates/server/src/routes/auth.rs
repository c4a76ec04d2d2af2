// crates/server/src/routes/auth.rs
//! Signup and login: email/password in, bearer token out.

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use ts_rs::TS;

use crate::auth::{hash_password, issue_token, verify_password};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Signup and login share one payload shape.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub remember_me: bool,
}

/// Issued bearer token.
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../../../frontend/src/types/generated/")]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

fn validate_credentials(body: &CredentialsRequest) -> ApiResult<()> {
    if body.email.trim().is_empty() || !body.email.contains('@') {
        return Err(ApiError::Validation("email must be a valid address".to_string()));
    }
    if body.password.is_empty() {
        return Err(ApiError::Validation("password must not be empty".to_string()));
    }
    Ok(())
}

fn token_for(state: &AppState, email: &str, remember_me: bool) -> ApiResult<TokenResponse> {
    let ttl = if remember_me {
        state.config.remember_me_ttl_secs
    } else {
        state.config.access_token_ttl_secs
    };
    let access_token = issue_token(&state.config.secret_key, email, ttl)?;
    Ok(TokenResponse {
        access_token,
        token_type: "bearer".to_string(),
    })
}

/// POST /api/auth/signup - Register a new account.
///
/// Returns a bearer token immediately so the frontend can continue to
/// onboarding without a second round-trip.
pub async fn signup(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CredentialsRequest>,
) -> ApiResult<Json<TokenResponse>> {
    validate_credentials(&body)?;

    if state.db.get_user_by_email(&body.email).await?.is_some() {
        return Err(ApiError::EmailTaken);
    }

    let password_hash = hash_password(&body.password);
    let user = state
        .db
        .insert_user(&body.email, &password_hash, Utc::now().timestamp())
        .await?;
    tracing::info!(user_id = user.id, "New user registered");

    Ok(Json(token_for(&state, &body.email, body.remember_me)?))
}

/// POST /api/auth/login - Exchange credentials for a bearer token.
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CredentialsRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let user = state.db.get_user_by_email(&body.email).await?;
    let valid = user
        .as_ref()
        .is_some_and(|u| verify_password(&body.password, &u.password_hash));
    if !valid {
        return Err(ApiError::InvalidCredentials);
    }

    Ok(Json(token_for(&state, &body.email, body.remember_me)?))
}

/// Create the auth routes router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
}
