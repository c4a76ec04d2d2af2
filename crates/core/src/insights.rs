// crates/core/src/insights.rs
//! Threshold-based insight sentences and the snack suggestion table.

/// Snack suggestion per diet preference.
pub const SNACK_SUGGESTIONS: &[(&str, &str)] = &[
    ("vegetarian", "Dark Chocolate Almonds"),
    ("vegan", "Roasted Chickpeas"),
    ("protein-focused", "Beef Jerky"),
    ("balanced", "Trail Mix"),
    ("other", "Granola Bar"),
];

/// Fallback when no profile exists or the preference is unrecognized.
pub const DEFAULT_SNACK: &str = "Trail Mix";

/// Look up the snack suggestion for a diet preference string.
pub fn snack_for_preference(preference: &str) -> &'static str {
    SNACK_SUGGESTIONS
        .iter()
        .find(|(pref, _)| *pref == preference)
        .map(|(_, snack)| *snack)
        .unwrap_or(DEFAULT_SNACK)
}

/// Computed weekly figures the insight rules are evaluated against.
#[derive(Debug, Clone, Copy)]
pub struct InsightInputs<'a> {
    pub avg_mood: f64,
    pub avg_tiredness: f64,
    pub hydration_pct: f64,
    pub total_coding_sessions: i64,
    pub snack: &'a str,
}

/// Evaluate the insight rules in their fixed order.
///
/// Append order is part of the API contract (mood, tiredness, hydration,
/// coding); each condition is checked independently, so the result holds
/// zero to four sentences.
pub fn generate_insights(inputs: &InsightInputs) -> Vec<String> {
    let mut insights = Vec::new();

    if inputs.avg_mood >= 4.0 {
        insights.push(
            "Great work this week! Maintain excellent hydration and consistent coding sessions."
                .to_string(),
        );
    }
    if inputs.avg_tiredness > 7.0 {
        insights.push(format!(
            "You seem quite tired. Consider taking short breaks or trying some {}.",
            inputs.snack
        ));
    }
    if inputs.hydration_pct >= 80.0 {
        insights.push("Your hydration levels are strong. Keep it up!".to_string());
    }
    if inputs.total_coding_sessions > 20 {
        insights.push(
            "Impressive coding consistency. Consider adding short breaks for sustained productivity."
                .to_string(),
        );
    }

    insights
}
