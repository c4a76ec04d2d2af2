// crates/db/src/queries/users.rs
// User account lookup and creation.

use crate::{Database, DbResult};

/// A row from the `users` table. Carries the password hash, so this type
/// never leaves the server process.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    pub created_at: i64,
}

impl Database {
    /// Insert a new user and return the created record.
    ///
    /// The email must be unique; a duplicate surfaces as `DbError::Sqlx`.
    /// Callers that want a friendly error check existence first.
    pub async fn insert_user(
        &self,
        email: &str,
        password_hash: &str,
        created_at: i64,
    ) -> DbResult<UserRecord> {
        let (id,): (i64,) = sqlx::query_as(
            "INSERT INTO users (email, password_hash, created_at) VALUES (?1, ?2, ?3) RETURNING id",
        )
        .bind(email)
        .bind(password_hash)
        .bind(created_at)
        .fetch_one(self.pool())
        .await?;

        Ok(UserRecord {
            id,
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            created_at,
        })
    }

    /// Look up a user by email.
    pub async fn get_user_by_email(&self, email: &str) -> DbResult<Option<UserRecord>> {
        let row: Option<(i64, String, String, i64)> = sqlx::query_as(
            "SELECT id, email, password_hash, created_at FROM users WHERE email = ?1",
        )
        .bind(email)
        .fetch_optional(self.pool())
        .await?;

        Ok(row.map(|(id, email, password_hash, created_at)| UserRecord {
            id,
            email,
            password_hash,
            created_at,
        }))
    }

    /// Look up a user by id.
    pub async fn get_user_by_id(&self, user_id: i64) -> DbResult<Option<UserRecord>> {
        let row: Option<(i64, String, String, i64)> = sqlx::query_as(
            "SELECT id, email, password_hash, created_at FROM users WHERE id = ?1",
        )
        .bind(user_id)
        .fetch_optional(self.pool())
        .await?;

        Ok(row.map(|(id, email, password_hash, created_at)| UserRecord {
            id,
            email,
            password_hash,
            created_at,
        }))
    }
}
