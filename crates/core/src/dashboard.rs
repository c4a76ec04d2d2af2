// crates/core/src/dashboard.rs
//! Weekly dashboard aggregation.
//!
//! A single-pass, stateless reduction: the caller fetches one user's log
//! rows for a trailing window plus their profile, and this module folds
//! them into four summary cards and the insight list. Missing data never
//! fails — empty categories reduce to zero-valued stats.

use crate::insights::{generate_insights, snack_for_preference, InsightInputs};
use crate::types::{
    CodingSession, DashboardResponse, DashboardStat, FocusSession, HydrationLog, MoodLog,
    UserProfile,
};

/// Trailing window length used when the request does not specify one.
pub const DEFAULT_WINDOW_DAYS: i64 = 7;

/// Constants feeding the dashboard cards.
///
/// Trend percentages and color tags are fixed display values; they live
/// here rather than inline so the reduction stays a pure function of its
/// inputs.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub window_days: i64,
    pub mood_trend: i64,
    pub mood_color: &'static str,
    pub hydration_trend: i64,
    pub hydration_color: &'static str,
    pub coding_trend: i64,
    pub coding_color: &'static str,
    pub focus_trend: i64,
    pub focus_color: &'static str,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            window_days: DEFAULT_WINDOW_DAYS,
            mood_trend: 12,
            mood_color: "mood-excellent",
            hydration_trend: 8,
            hydration_color: "hydration-excellent",
            coding_trend: -5,
            coding_color: "emerald-500",
            focus_trend: 15,
            focus_color: "productivity-high",
        }
    }
}

/// All log rows fetched for one user over the trailing window.
#[derive(Debug, Clone, Default)]
pub struct WindowLogs {
    pub moods: Vec<MoodLog>,
    pub hydration: Vec<HydrationLog>,
    pub coding: Vec<CodingSession>,
    pub focus: Vec<FocusSession>,
}

/// Mean of the selected values, skipping rows where the selector yields
/// `None`. Empty selections reduce to `0.0`.
fn mean_of<T>(items: &[T], select: impl Fn(&T) -> Option<f64>) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for item in items {
        if let Some(value) = select(item) {
            sum += value;
            count += 1;
        }
    }
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Sum of the selected values.
fn sum_of<T>(items: &[T], select: impl Fn(&T) -> i64) -> i64 {
    items.iter().map(select).sum()
}

/// Reduce one user's window of logs into the dashboard payload.
///
/// Always returns exactly four stats in the order mood, hydration, coding,
/// focus. Every ratio guards its denominator, so empty input sets yield
/// "0.0/5", "0%", "0", "0.0h" and no insights.
pub fn build_dashboard(
    logs: &WindowLogs,
    profile: Option<&UserProfile>,
    cfg: &DashboardConfig,
) -> DashboardResponse {
    // Mood: average score, plus average tiredness over rows that recorded it.
    // A true all-zero tiredness average is indistinguishable from "no data"
    // here; the description guard is `> 0` on purpose.
    let avg_mood = mean_of(&logs.moods, |m| Some(m.mood_score));
    let avg_tiredness = mean_of(&logs.moods, |m| m.tiredness_level.map(|t| t as f64));
    let mood_description = if avg_tiredness > 0.0 {
        format!("Average tiredness: {avg_tiredness:.1}/10")
    } else {
        "No tiredness data".to_string()
    };

    // Hydration: summed glasses against the summed goal.
    let total_glasses = sum_of(&logs.hydration, |h| h.water_glasses);
    let total_coffee = sum_of(&logs.hydration, |h| h.coffee_cups);
    let total_goal = sum_of(&logs.hydration, |h| h.daily_goal);
    let hydration_pct = if total_goal > 0 {
        total_glasses as f64 / total_goal as f64 * 100.0
    } else {
        0.0
    };

    // Coding: session count and total minutes.
    let total_coding_sessions = logs.coding.len() as i64;
    let total_coding_minutes = sum_of(&logs.coding, |c| c.duration_minutes);

    // Focus: daily average hours over the window.
    let total_focus_hours = sum_of(&logs.focus, |f| f.duration_minutes) as f64 / 60.0;
    let avg_focus_hours = if cfg.window_days > 0 {
        total_focus_hours / cfg.window_days as f64
    } else {
        0.0
    };

    let stats = vec![
        DashboardStat {
            title: "Avg. Mood Score".to_string(),
            value: format!("{avg_mood:.1}/5"),
            description: mood_description,
            trend: cfg.mood_trend,
            color: cfg.mood_color.to_string(),
        },
        DashboardStat {
            title: "Hydration Goal".to_string(),
            value: format!("{hydration_pct:.0}%"),
            description: format!(
                "{total_glasses} glasses, {total_coffee} coffee cups, goal {total_goal} glasses"
            ),
            trend: cfg.hydration_trend,
            color: cfg.hydration_color.to_string(),
        },
        DashboardStat {
            title: "Coding Sessions".to_string(),
            value: total_coding_sessions.to_string(),
            description: format!("Total {total_coding_minutes} minutes this week"),
            trend: cfg.coding_trend,
            color: cfg.coding_color.to_string(),
        },
        DashboardStat {
            title: "Focus Time".to_string(),
            value: format!("{avg_focus_hours:.1}h"),
            description: "Daily average focus time".to_string(),
            trend: cfg.focus_trend,
            color: cfg.focus_color.to_string(),
        },
    ];

    let snack = snack_for_preference(
        profile.map(|p| p.diet_preference.as_str()).unwrap_or(""),
    );
    let insights = generate_insights(&InsightInputs {
        avg_mood,
        avg_tiredness,
        hydration_pct,
        total_coding_sessions,
        snack,
    });

    DashboardResponse { stats, insights }
}
