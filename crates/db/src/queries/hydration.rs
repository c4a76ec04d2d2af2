// crates/db/src/queries/hydration.rs
// Hydration log persistence and trailing-window reads.

use crate::{Database, DbResult};
use devwell_core::HydrationLog;

impl Database {
    /// Insert a hydration log and return the created row.
    pub async fn insert_hydration_log(
        &self,
        user_id: i64,
        water_glasses: i64,
        coffee_cups: i64,
        daily_goal: i64,
        created_at: i64,
    ) -> DbResult<HydrationLog> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO hydration_logs (user_id, water_glasses, coffee_cups, daily_goal, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            RETURNING id
            "#,
        )
        .bind(user_id)
        .bind(water_glasses)
        .bind(coffee_cups)
        .bind(daily_goal)
        .bind(created_at)
        .fetch_one(self.pool())
        .await?;

        Ok(HydrationLog {
            id,
            user_id,
            water_glasses,
            coffee_cups,
            daily_goal,
            created_at,
        })
    }

    /// Hydration logs for one user with `created_at >= since`, ascending.
    pub async fn hydration_logs_since(
        &self,
        user_id: i64,
        since: i64,
    ) -> DbResult<Vec<HydrationLog>> {
        let rows: Vec<(i64, i64, i64, i64, i64, i64)> = sqlx::query_as(
            r#"
            SELECT id, user_id, water_glasses, coffee_cups, daily_goal, created_at
            FROM hydration_logs
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
                |(id, user_id, water_glasses, coffee_cups, daily_goal, created_at)| HydrationLog {
                    id,
                    user_id,
                    water_glasses,
                    coffee_cups,
                    daily_goal,
                    created_at,
                },
            )
            .collect())
    }
}
