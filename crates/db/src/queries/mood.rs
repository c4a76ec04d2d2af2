// crates/db/src/queries/mood.rs
// Mood log persistence and trailing-window reads.

use crate::{Database, DbResult};
use devwell_core::MoodLog;

impl Database {
    /// Insert a mood log and return the created row.
    pub async fn insert_mood_log(
        &self,
        user_id: i64,
        mood_score: f64,
        tiredness_level: Option<i64>,
        notes: Option<&str>,
        created_at: i64,
    ) -> DbResult<MoodLog> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO mood_logs (user_id, mood_score, tiredness_level, notes, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            RETURNING id
            "#,
        )
        .bind(user_id)
        .bind(mood_score)
        .bind(tiredness_level)
        .bind(notes)
        .bind(created_at)
        .fetch_one(self.pool())
        .await?;

        Ok(MoodLog {
            id,
            user_id,
            mood_score,
            tiredness_level,
            notes: notes.map(str::to_string),
            created_at,
        })
    }

    /// Mood logs for one user with `created_at >= since`, ascending.
    pub async fn mood_logs_since(&self, user_id: i64, since: i64) -> DbResult<Vec<MoodLog>> {
        let rows: Vec<(i64, i64, f64, Option<i64>, Option<String>, i64)> = sqlx::query_as(
            r#"
            SELECT id, user_id, mood_score, tiredness_level, notes, created_at
            FROM mood_logs
            WHERE user_id = ?1 AND created_at >= ?2
            ORDER BY created_at ASC
            "#,
        )
        .bind(user_id)
        .bind(since)
        .fetch_all(self.pool())
        .await?;

        Ok(rows
            .into_iter()
            .map(
                |(id, user_id, mood_score, tiredness_level, notes, created_at)| MoodLog {
                    id,
                    user_id,
                    mood_score,
                    tiredness_level,
                    notes,
                    created_at,
                },
            )
            .collect())
    }
}
