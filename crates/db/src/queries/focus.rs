// crates/db/src/queries/focus.rs
// Focus session persistence and trailing-window reads.

use crate::{Database, DbResult};
use devwell_core::FocusSession;

impl Database {
    /// Insert a focus session and return the created row.
    pub async fn insert_focus_session(
        &self,
        user_id: i64,
        duration_minutes: i64,
        created_at: i64,
    ) -> DbResult<FocusSession> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO focus_sessions (user_id, duration_minutes, created_at)
            VALUES (?1, ?2, ?3)
            RETURNING id
            "#,
        )
        .bind(user_id)
        .bind(duration_minutes)
        .bind(created_at)
        .fetch_one(self.pool())
        .await?;

        Ok(FocusSession {
            id,
            user_id,
            duration_minutes,
            created_at,
        })
    }

    /// Focus sessions for one user with `created_at >= since`, ascending.
    pub async fn focus_sessions_since(
        &self,
        user_id: i64,
        since: i64,
    ) -> DbResult<Vec<FocusSession>> {
        let rows: Vec<(i64, i64, i64, i64)> = sqlx::query_as(
            r#"
            SELECT id, user_id, duration_minutes, created_at
            FROM focus_sessions
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
            .map(|(id, user_id, duration_minutes, created_at)| FocusSession {
                id,
                user_id,
                duration_minutes,
                created_at,
            })
            .collect())
    }
}
