// crates/db/src/queries/dashboard.rs
// Window fetch feeding the dashboard aggregation.

use crate::{Database, DbResult};
use devwell_core::WindowLogs;

impl Database {
    /// Fetch all four log categories for one user over a trailing window.
    ///
    /// Four sequential reads, no transaction: the dashboard is informational
    /// and tolerates a write racing the window. A failed read propagates to
    /// the caller unmodified.
    pub async fn window_logs(&self, user_id: i64, since: i64) -> DbResult<WindowLogs> {
        let moods = self.mood_logs_since(user_id, since).await?;
        let hydration = self.hydration_logs_since(user_id, since).await?;
        let coding = self.coding_sessions_since(user_id, since).await?;
        let focus = self.focus_sessions_since(user_id, since).await?;

        Ok(WindowLogs {
            moods,
            hydration,
            coding,
            focus,
        })
    }
}
