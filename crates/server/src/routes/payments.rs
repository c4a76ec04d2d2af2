// crates/server/src/routes/payments.rs
//! Buy-me-a-coffee payment endpoints, proxied to Paystack.
//!
//! All three routes answer 503 when `PAYSTACK_SECRET_KEY` is unset so the
//! wellness API keeps working without a payment configuration.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::HeaderMap,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{ApiError, ApiResult};
use crate::paystack::PaystackClient;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct InitializePaymentRequest {
    pub email: String,
    /// Amount in currency subunits.
    pub amount: i64,
}

#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct InitializePaymentResponse {
    pub access_code: String,
}

fn payments(state: &AppState) -> Result<&PaystackClient, ApiError> {
    state.payments.as_ref().ok_or(ApiError::PaymentsNotConfigured)
}

/// POST /api/payments/initialize - Start a donation transaction.
///
/// Returns the access code the frontend hands to the checkout widget.
/// The provider minimum is 100 subunits.
pub async fn initialize_payment(
    State(state): State<Arc<AppState>>,
    Json(body): Json<InitializePaymentRequest>,
) -> ApiResult<Json<InitializePaymentResponse>> {
    let client = payments(&state)?;
    if body.email.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "Email and amount are required".to_string(),
        ));
    }
    if body.amount < 100 {
        return Err(ApiError::BadRequest(
            "Amount must be at least 1 KES".to_string(),
        ));
    }

    let access_code = client
        .initialize_transaction(&body.email, body.amount)
        .await?;
    Ok(Json(InitializePaymentResponse { access_code }))
}

/// GET /api/payments/verify/{reference} - Verify a transaction.
///
/// Passes the provider's `data` object through verbatim.
pub async fn verify_payment(
    State(state): State<Arc<AppState>>,
    Path(reference): Path<String>,
) -> ApiResult<Json<Value>> {
    let client = payments(&state)?;
    Ok(Json(client.verify_transaction(&reference).await?))
}

/// POST /api/payments/webhook - Paystack event receiver.
///
/// The signature header is hex HMAC-SHA512 of the raw body keyed by the
/// API secret; anything unverifiable answers 401.
pub async fn payment_webhook(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Json<Value>> {
    let client = payments(&state)?;
    let signature = headers
        .get("x-paystack-signature")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| ApiError::InvalidSignature("Signature missing".to_string()))?;
    if !client.verify_webhook_signature(&body, signature) {
        return Err(ApiError::InvalidSignature("Invalid signature".to_string()));
    }

    let event: Value = serde_json::from_slice(&body)
        .map_err(|e| ApiError::BadRequest(format!("Malformed webhook body: {e}")))?;
    if event["event"] == "charge.success" {
        tracing::info!(
            reference = event["data"]["reference"].as_str().unwrap_or("unknown"),
            "Payment successful"
        );
    }

    Ok(Json(json!({ "status": "success" })))
}

/// Create the payments routes router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/payments/initialize", post(initialize_payment))
        .route("/payments/verify/{reference}", get(verify_payment))
        .route("/payments/webhook", post(payment_webhook))
}
