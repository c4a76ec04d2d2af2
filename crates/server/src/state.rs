// crates/server/src/state.rs
//! Application state for the Axum server.

use std::sync::Arc;
use std::time::Instant;

use devwell_core::DashboardConfig;
use devwell_db::{Database, UserRecord};

use crate::config::ServerConfig;
use crate::error::ApiError;
use crate::paystack::PaystackClient;

/// Shared application state accessible from all route handlers.
pub struct AppState {
    /// Server start time for uptime tracking.
    pub start_time: Instant,
    /// Database handle for user/log/profile queries.
    pub db: Database,
    /// Runtime configuration (secrets, token lifetimes).
    pub config: ServerConfig,
    /// Constants feeding the dashboard aggregation.
    pub dashboard: DashboardConfig,
    /// Paystack client; `None` when payments are not configured.
    pub payments: Option<PaystackClient>,
}

impl AppState {
    /// Create a new application state wrapped in an Arc for sharing.
    pub fn new(db: Database, config: ServerConfig) -> Arc<Self> {
        let payments = config
            .paystack_secret_key
            .clone()
            .map(|key| PaystackClient::new(key, config.payment_callback_url.clone()));

        Arc::new(Self {
            start_time: Instant::now(),
            db,
            config,
            dashboard: DashboardConfig::default(),
            payments,
        })
    }

    /// Seconds since the server started.
    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Resolve the authenticated email to a user row.
    ///
    /// The token only proves the email was valid at issue time; the row
    /// may have been deleted since.
    pub async fn require_user(&self, email: &str) -> Result<UserRecord, ApiError> {
        self.db
            .get_user_by_email(email)
            .await?
            .ok_or_else(|| ApiError::UserNotFound(email.to_string()))
    }
}
