// crates/core/src/types.rs
//! Shared domain types: log rows, the onboarding profile, and the dashboard
//! payload shapes consumed by the frontend.
//!
//! All timestamps are unix epoch seconds. Wire names are snake_case — the
//! frontend consumes these shapes as-is.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One mood check-in. `mood_score` is always present; tiredness is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../../frontend/src/types/generated/")]
pub struct MoodLog {
    pub id: i64,
    pub user_id: i64,
    /// 0.0 ..= 5.0
    pub mood_score: f64,
    /// 0 ..= 10 when recorded.
    pub tiredness_level: Option<i64>,
    pub notes: Option<String>,
    pub created_at: i64,
}

/// One hydration entry: glasses drunk against a daily goal, plus coffee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../../frontend/src/types/generated/")]
pub struct HydrationLog {
    pub id: i64,
    pub user_id: i64,
    pub water_glasses: i64,
    pub coffee_cups: i64,
    pub daily_goal: i64,
    pub created_at: i64,
}

/// One logged coding session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../../frontend/src/types/generated/")]
pub struct CodingSession {
    pub id: i64,
    pub user_id: i64,
    pub duration_minutes: i64,
    pub notes: Option<String>,
    pub created_at: i64,
}

/// One completed focus (deep-work) session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../../frontend/src/types/generated/")]
pub struct FocusSession {
    pub id: i64,
    pub user_id: i64,
    pub duration_minutes: i64,
    pub created_at: i64,
}

/// Onboarding profile. At most one row per user.
///
/// Only `diet_preference` feeds the dashboard (snack lookup); the rest is
/// surfaced verbatim through `/api/profile/me`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../../frontend/src/types/generated/")]
pub struct UserProfile {
    pub user_id: i64,
    pub nickname: Option<String>,
    pub timezone: Option<String>,
    pub work_hours_start: Option<String>,
    pub work_hours_end: Option<String>,
    pub coding_style: Option<String>,
    pub wellness_goals: Vec<String>,
    /// Free-form preference string ("balanced", "vegan", ...). Unrecognized
    /// values fall back to the default snack at lookup time.
    pub diet_preference: String,
    pub reminder_frequency: Option<String>,
    pub age: Option<i64>,
    pub weight: Option<f64>,
    pub created_at: i64,
}

/// One summary card on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../../frontend/src/types/generated/")]
pub struct DashboardStat {
    pub title: String,
    /// Pre-formatted display value ("4.3/5", "100%", "12", "1.5h").
    pub value: String,
    pub description: String,
    pub trend: i64,
    pub color: String,
}

/// The full dashboard payload: exactly four stats (mood, hydration, coding,
/// focus — in that order) and zero to four insight sentences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../../frontend/src/types/generated/")]
pub struct DashboardResponse {
    pub stats: Vec<DashboardStat>,
    pub insights: Vec<String>,
}
