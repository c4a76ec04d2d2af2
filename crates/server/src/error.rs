// crates/server/src/error.rs
use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use ts_rs::TS;

use devwell_db::DbError;

use crate::paystack::PaystackError;

/// Structured JSON error response for API errors
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../../../frontend/src/types/generated/")]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

/// API error types that map to HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Email already registered")]
    EmailTaken,

    #[error("Profile already exists")]
    ProfileExists,

    #[error("Incorrect email or password")]
    InvalidCredentials,

    #[error("Could not validate credentials")]
    Unauthorized,

    #[error("Invalid webhook signature: {0}")]
    InvalidSignature(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Payments not configured")]
    PaymentsNotConfigured,

    #[error("Payment provider error: {0}")]
    Payment(String),

    #[error("Database error: {0}")]
    Database(#[from] DbError),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<PaystackError> for ApiError {
    fn from(err: PaystackError) -> Self {
        ApiError::Payment(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Token-related 401s carry the challenge header the original API
        // contract promises.
        let bearer_challenge = matches!(
            self,
            ApiError::InvalidCredentials | ApiError::Unauthorized
        );

        let (status, error_response) = match &self {
            ApiError::UserNotFound(email) => {
                tracing::warn!(email = %email, "User not found");
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse::new("User not found"),
                )
            }
            ApiError::EmailTaken => {
                tracing::warn!("Signup with already-registered email");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new("Email already registered"),
                )
            }
            ApiError::ProfileExists => {
                tracing::warn!("Duplicate onboarding submission");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new("Profile already exists"),
                )
            }
            ApiError::InvalidCredentials => {
                tracing::warn!("Login with incorrect credentials");
                (
                    StatusCode::UNAUTHORIZED,
                    ErrorResponse::new("Incorrect email or password"),
                )
            }
            ApiError::Unauthorized => {
                tracing::warn!("Request with missing or invalid bearer token");
                (
                    StatusCode::UNAUTHORIZED,
                    ErrorResponse::new("Could not validate credentials"),
                )
            }
            ApiError::InvalidSignature(msg) => {
                tracing::warn!(message = %msg, "Webhook signature rejected");
                (StatusCode::UNAUTHORIZED, ErrorResponse::new(msg.clone()))
            }
            ApiError::Validation(msg) => {
                tracing::warn!(message = %msg, "Validation error");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    ErrorResponse::with_details("Validation error", msg.clone()),
                )
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!(message = %msg, "Bad request");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::with_details("Bad request", msg.clone()),
                )
            }
            ApiError::PaymentsNotConfigured => {
                tracing::warn!("Payments route hit without PAYSTACK_SECRET_KEY");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    ErrorResponse::new("Payments not configured"),
                )
            }
            ApiError::Payment(msg) => {
                tracing::error!(message = %msg, "Payment provider error");
                (
                    StatusCode::BAD_GATEWAY,
                    ErrorResponse::with_details("Payment provider error", msg.clone()),
                )
            }
            ApiError::Database(db_err) => {
                tracing::error!(error = %db_err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::with_details("Database error", db_err.to_string()),
                )
            }
            ApiError::Internal(msg) => {
                tracing::error!(message = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("Internal server error"),
                )
            }
        };

        if bearer_challenge {
            (
                status,
                [(header::WWW_AUTHENTICATE, "Bearer")],
                Json(error_response),
            )
                .into_response()
        } else {
            (status, Json(error_response)).into_response()
        }
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    /// Helper to extract status code and body from a response
    async fn extract_response(response: Response) -> (StatusCode, ErrorResponse) {
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let error_response: ErrorResponse = serde_json::from_slice(&body).unwrap();
        (status, error_response)
    }

    #[tokio::test]
    async fn test_user_not_found_returns_404() {
        let error = ApiError::UserNotFound("dev@example.com".to_string());
        let response = error.into_response();
        let (status, body) = extract_response(response).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error, "User not found");
    }

    #[tokio::test]
    async fn test_email_taken_returns_400() {
        let (status, body) = extract_response(ApiError::EmailTaken.into_response()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Email already registered");
    }

    #[tokio::test]
    async fn test_profile_exists_returns_400() {
        let (status, body) = extract_response(ApiError::ProfileExists.into_response()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Profile already exists");
    }

    #[tokio::test]
    async fn test_invalid_credentials_returns_401_with_challenge() {
        let response = ApiError::InvalidCredentials.into_response();
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
        let (status, body) = extract_response(response).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body.error, "Incorrect email or password");
    }

    #[tokio::test]
    async fn test_unauthorized_returns_401_with_challenge() {
        let response = ApiError::Unauthorized.into_response();
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
        let (status, body) = extract_response(response).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body.error, "Could not validate credentials");
    }

    #[tokio::test]
    async fn test_webhook_signature_401_has_no_challenge() {
        let response = ApiError::InvalidSignature("Signature missing".to_string()).into_response();
        assert!(response.headers().get(header::WWW_AUTHENTICATE).is_none());
        let (status, body) = extract_response(response).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body.error, "Signature missing");
    }

    #[tokio::test]
    async fn test_validation_returns_422() {
        let error = ApiError::Validation("mood_score must be between 0 and 5".to_string());
        let (status, body) = extract_response(error.into_response()).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body.error, "Validation error");
        assert!(body.details.unwrap().contains("mood_score"));
    }

    #[tokio::test]
    async fn test_payments_not_configured_returns_503() {
        let (status, body) =
            extract_response(ApiError::PaymentsNotConfigured.into_response()).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body.error, "Payments not configured");
    }

    #[tokio::test]
    async fn test_payment_error_returns_502() {
        let error = ApiError::Payment("connection refused".to_string());
        let (status, body) = extract_response(error.into_response()).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body.error, "Payment provider error");
    }

    #[tokio::test]
    async fn test_internal_error_hides_details() {
        let error = ApiError::Internal("something went wrong".to_string());
        let (status, body) = extract_response(error.into_response()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "Internal server error");
        // Internal errors should NOT expose details to clients
        assert!(body.details.is_none());
    }

    #[test]
    fn test_error_response_serialization() {
        let response = ErrorResponse::new("Test error");
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"error\":\"Test error\""));
        assert!(!json.contains("details")); // None should be skipped

        let response = ErrorResponse::with_details("Test error", "More info");
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"details\":\"More info\""));
    }

    #[test]
    fn test_api_error_display() {
        let err = ApiError::UserNotFound("dev@example.com".to_string());
        assert_eq!(err.to_string(), "User not found: dev@example.com");

        let err = ApiError::InvalidCredentials;
        assert_eq!(err.to_string(), "Incorrect email or password");
    }
}
