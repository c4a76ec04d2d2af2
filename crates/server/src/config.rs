// crates/server/src/config.rs
//! Server configuration from environment variables.

use rand::RngCore;

/// Default port for the server.
pub const DEFAULT_PORT: u16 = 8000;

/// Lifetime of a normal access token.
pub const ACCESS_TOKEN_TTL_SECS: i64 = 60 * 60;

/// Lifetime of a "remember me" token.
pub const REMEMBER_ME_TTL_SECS: i64 = 30 * 24 * 60 * 60;

/// Runtime configuration shared through `AppState`.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HMAC key for signing bearer tokens and password digests.
    pub secret_key: String,
    /// Paystack API secret. Payments routes answer 503 when unset.
    pub paystack_secret_key: Option<String>,
    /// Callback URL passed to Paystack on transaction initialization.
    pub payment_callback_url: Option<String>,
    pub access_token_ttl_secs: i64,
    pub remember_me_ttl_secs: i64,
}

impl ServerConfig {
    /// Build the configuration from the environment.
    ///
    /// `DEVWELL_SECRET_KEY` unset means a random per-process key: issued
    /// tokens stop validating after a restart.
    pub fn from_env() -> Self {
        let secret_key = std::env::var("DEVWELL_SECRET_KEY")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| {
                tracing::warn!(
                    "DEVWELL_SECRET_KEY not set; using a random key, tokens will not survive restart"
                );
                random_secret()
            });

        Self {
            secret_key,
            paystack_secret_key: std::env::var("PAYSTACK_SECRET_KEY")
                .ok()
                .filter(|s| !s.is_empty()),
            payment_callback_url: std::env::var("DEVWELL_PAYMENT_CALLBACK_URL")
                .ok()
                .filter(|s| !s.is_empty()),
            access_token_ttl_secs: ACCESS_TOKEN_TTL_SECS,
            remember_me_ttl_secs: REMEMBER_ME_TTL_SECS,
        }
    }
}

fn random_secret() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_secret_is_hex_and_unique() {
        let a = random_secret();
        let b = random_secret();
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
    }
}
