// crates/server/src/paystack.rs
//! Thin client for the Paystack transaction API.
//!
//! Wraps the three calls the payments routes need: initialize, verify, and
//! webhook signature checking (HMAC-SHA512 of the raw body with the secret
//! key, hex-encoded).

use hmac::{Hmac, Mac};
use serde_json::json;
use sha2::Sha512;
use thiserror::Error;

/// Production API base.
pub const PAYSTACK_API_URL: &str = "https://api.paystack.co";

type HmacSha512 = Hmac<Sha512>;

#[derive(Debug, Error)]
pub enum PaystackError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("rejected by provider: {0}")]
    Rejected(String),

    #[error("malformed provider response")]
    Malformed,
}

/// Client holding the secret key and HTTP connection pool.
#[derive(Debug, Clone)]
pub struct PaystackClient {
    http: reqwest::Client,
    base_url: String,
    secret_key: String,
    callback_url: Option<String>,
}

impl PaystackClient {
    pub fn new(secret_key: String, callback_url: Option<String>) -> Self {
        Self::with_base_url(secret_key, callback_url, PAYSTACK_API_URL.to_string())
    }

    /// Point the client at a different base URL (tests).
    pub fn with_base_url(
        secret_key: String,
        callback_url: Option<String>,
        base_url: String,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            secret_key,
            callback_url,
        }
    }

    /// Initialize a mobile-money transaction; returns the access code the
    /// frontend hands to the Paystack checkout widget.
    pub async fn initialize_transaction(
        &self,
        email: &str,
        amount: i64,
    ) -> Result<String, PaystackError> {
        let mut payload = json!({
            "email": email,
            "amount": amount,
            "currency": "KES",
            "metadata": {
                "custom_fields": [{
                    "display_name": "Buy Me a Coffee",
                    "variable_name": "buy_coffee",
                    "value": "Donation",
                }]
            },
            "channels": ["mobile_money"],
        });
        if let Some(url) = &self.callback_url {
            payload["callback_url"] = json!(url);
        }

        let body: serde_json::Value = self
            .http
            .post(format!("{}/transaction/initialize", self.base_url))
            .bearer_auth(&self.secret_key)
            .json(&payload)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if !body["status"].as_bool().unwrap_or(false) {
            let message = body["message"]
                .as_str()
                .unwrap_or("Failed to initialize transaction");
            return Err(PaystackError::Rejected(message.to_string()));
        }

        body["data"]["access_code"]
            .as_str()
            .map(str::to_string)
            .ok_or(PaystackError::Malformed)
    }

    /// Verify a transaction by reference; returns the provider's `data`
    /// object verbatim.
    pub async fn verify_transaction(
        &self,
        reference: &str,
    ) -> Result<serde_json::Value, PaystackError> {
        let body: serde_json::Value = self
            .http
            .get(format!(
                "{}/transaction/verify/{}",
                self.base_url, reference
            ))
            .bearer_auth(&self.secret_key)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if !body["status"].as_bool().unwrap_or(false) {
            let message = body["message"].as_str().unwrap_or("Verification failed");
            return Err(PaystackError::Rejected(message.to_string()));
        }

        Ok(body["data"].clone())
    }

    /// Check an `x-paystack-signature` header value against the raw webhook
    /// body. The signature is hex-encoded HMAC-SHA512 keyed by the secret.
    pub fn verify_webhook_signature(&self, body: &[u8], signature: &str) -> bool {
        let Ok(expected) = hex::decode(signature) else {
            return false;
        };
        let mut mac = HmacSha512::new_from_slice(self.secret_key.as_bytes())
            .expect("HMAC accepts keys of any length");
        mac.update(body);
        mac.verify_slice(&expected).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(base_url: String) -> PaystackClient {
        PaystackClient::with_base_url("sk_test_secret".to_string(), None, base_url)
    }

    fn sign(secret: &str, body: &[u8]) -> String {
        let mut mac = HmacSha512::new_from_slice(secret.as_bytes()).unwrap();
        mac.update(body);
        hex::encode(mac.finalize().into_bytes())
    }

    #[test]
    fn test_webhook_signature_accepts_valid() {
        let client = test_client("http://unused".to_string());
        let body = br#"{"event":"charge.success"}"#;
        let signature = sign("sk_test_secret", body);
        assert!(client.verify_webhook_signature(body, &signature));
    }

    #[test]
    fn test_webhook_signature_rejects_tampered_body() {
        let client = test_client("http://unused".to_string());
        let signature = sign("sk_test_secret", br#"{"event":"charge.success"}"#);
        assert!(!client.verify_webhook_signature(br#"{"event":"charge.failed"}"#, &signature));
    }

    #[test]
    fn test_webhook_signature_rejects_wrong_key_and_garbage() {
        let client = test_client("http://unused".to_string());
        let body = br#"{}"#;
        let signature = sign("some-other-secret", body);
        assert!(!client.verify_webhook_signature(body, &signature));
        assert!(!client.verify_webhook_signature(body, "not-hex"));
    }

    #[tokio::test]
    async fn test_initialize_transaction_returns_access_code() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/transaction/initialize")
            .match_header("authorization", "Bearer sk_test_secret")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"status":true,"data":{"access_code":"ac_12345"}}"#)
            .create_async()
            .await;

        let client = test_client(server.url());
        let code = client
            .initialize_transaction("fan@example.com", 500)
            .await
            .expect("initialize succeeds");
        assert_eq!(code, "ac_12345");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_initialize_transaction_surfaces_rejection() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/transaction/initialize")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"status":false,"message":"Invalid amount"}"#)
            .create_async()
            .await;

        let client = test_client(server.url());
        let err = client
            .initialize_transaction("fan@example.com", 500)
            .await
            .expect_err("provider rejection should error");
        assert!(matches!(err, PaystackError::Rejected(msg) if msg == "Invalid amount"));
    }

    #[tokio::test]
    async fn test_verify_transaction_passes_data_through() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/transaction/verify/ref_1")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"status":true,"data":{"reference":"ref_1","amount":500}}"#)
            .create_async()
            .await;

        let client = test_client(server.url());
        let data = client.verify_transaction("ref_1").await.unwrap();
        assert_eq!(data["reference"], "ref_1");
        assert_eq!(data["amount"], 500);
    }
}
