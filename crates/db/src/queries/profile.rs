// crates/db/src/queries/profile.rs
// Onboarding profile persistence. One row per user; `wellness_goals` is
// stored as a JSON array string.

use crate::{Database, DbResult};
use devwell_core::UserProfile;

impl Database {
    /// Insert a user's onboarding profile.
    ///
    /// The `user_profiles` primary key is the user id, so a second insert
    /// for the same user fails; callers check existence first to return a
    /// friendly error.
    pub async fn insert_profile(&self, profile: &UserProfile) -> DbResult<()> {
        let goals = serde_json::to_string(&profile.wellness_goals)?;

        sqlx::query(
            r#"
            INSERT INTO user_profiles (
                user_id, nickname, timezone, work_hours_start, work_hours_end,
                coding_style, wellness_goals, diet_preference, reminder_frequency,
                age, weight, created_at
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
            "#,
        )
        .bind(profile.user_id)
        .bind(&profile.nickname)
        .bind(&profile.timezone)
        .bind(&profile.work_hours_start)
        .bind(&profile.work_hours_end)
        .bind(&profile.coding_style)
        .bind(goals)
        .bind(&profile.diet_preference)
        .bind(&profile.reminder_frequency)
        .bind(profile.age)
        .bind(profile.weight)
        .bind(profile.created_at)
        .execute(self.pool())
        .await?;

        Ok(())
    }

    /// Fetch a user's profile, if they completed onboarding.
    pub async fn get_profile(&self, user_id: i64) -> DbResult<Option<UserProfile>> {
        type ProfileRow = (
            i64,
            Option<String>,
            Option<String>,
            Option<String>,
            Option<String>,
            Option<String>,
            String,
            String,
            Option<String>,
            Option<i64>,
            Option<f64>,
            i64,
        );

        let row: Option<ProfileRow> = sqlx::query_as(
            r#"
            SELECT user_id, nickname, timezone, work_hours_start, work_hours_end,
                   coding_style, wellness_goals, diet_preference, reminder_frequency,
                   age, weight, created_at
            FROM user_profiles
            WHERE user_id = ?1
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.pool())
        .await?;

        Ok(row.map(
            |(
                user_id,
                nickname,
                timezone,
                work_hours_start,
                work_hours_end,
                coding_style,
                wellness_goals,
                diet_preference,
                reminder_frequency,
                age,
                weight,
                created_at,
            )| {
                UserProfile {
                    user_id,
                    nickname,
                    timezone,
                    work_hours_start,
                    work_hours_end,
                    coding_style,
                    // Rows written by this crate always hold a valid array;
                    // tolerate hand-edited databases.
                    wellness_goals: serde_json::from_str(&wellness_goals).unwrap_or_default(),
                    diet_preference,
                    reminder_frequency,
                    age,
                    weight,
                    created_at,
                }
            },
        ))
    }
}
