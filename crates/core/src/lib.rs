// crates/core/src/lib.rs
//! Domain types and the dashboard aggregation logic for DevWell.
//!
//! Everything in this crate is pure: rows go in, a dashboard payload comes
//! out. Persistence lives in `devwell-db`, HTTP in `devwell-server`.

pub mod dashboard;
pub mod insights;
mod types;

pub use dashboard::{build_dashboard, DashboardConfig, WindowLogs, DEFAULT_WINDOW_DAYS};
pub use insights::{generate_insights, snack_for_preference, InsightInputs, DEFAULT_SNACK, SNACK_SUGGESTIONS};
pub use types::{
    CodingSession, DashboardResponse, DashboardStat, FocusSession, HydrationLog, MoodLog,
    UserProfile,
};
