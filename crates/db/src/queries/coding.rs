// crates/db/src/queries/coding.rs
// Coding session persistence and trailing-window reads.

use crate::{Database, DbResult};
use devwell_core::CodingSession;

impl Database {
    /// Insert a coding session and return the created row.
    pub async fn insert_coding_session(
        &self,
        user_id: i64,
        duration_minutes: i64,
        notes: Option<&str>,
        created_at: i64,
    ) -> DbResult<CodingSession> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO coding_sessions (user_id, duration_minutes, notes, created_at)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id
            "#,
        )
        .bind(user_id)
        .bind(duration_minutes)
        .bind(notes)
        .bind(created_at)
        .fetch_one(self.pool())
        .await?;

        Ok(CodingSession {
            id,
            user_id,
            duration_minutes,
            notes: notes.map(str::to_string),
            created_at,
        })
    }

    /// Coding sessions for one user with `created_at >= since`, ascending.
    pub async fn coding_sessions_since(
        &self,
        user_id: i64,
        since: i64,
    ) -> DbResult<Vec<CodingSession>> {
        let rows: Vec<(i64, i64, i64, Option<String>, i64)> = sqlx::query_as(
            r#"
            SELECT id, user_id, duration_minutes, notes, created_at
            FROM coding_sessions
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
                |(id, user_id, duration_minutes, notes, created_at)| CodingSession {
                    id,
                    user_id,
                    duration_minutes,
                    notes,
                    created_at,
                },
            )
            .collect())
    }
}
