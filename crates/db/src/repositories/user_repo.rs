//! Repository for the `users` table.

use sqlx::PgPool;

use crate::models::user::{UpsertUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, email, display_name, avatar_url, created_at, updated_at";

/// Provides lookup and sign-in upsert for users.
pub struct UserRepo;

impl UserRepo {
    /// Find a user by provider-assigned id.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert the user, or refresh identity fields if they changed.
    ///
    /// `updated_at` only moves when a field actually differs, so repeated
    /// sign-ins with the same profile are no-ops.
    pub async fn upsert(pool: &PgPool, input: &UpsertUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (id, email, display_name, avatar_url)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (id) DO UPDATE SET
                 email = EXCLUDED.email,
                 display_name = EXCLUDED.display_name,
                 avatar_url = EXCLUDED.avatar_url,
                 updated_at = now()
             WHERE users.email IS DISTINCT FROM EXCLUDED.email
                OR users.display_name IS DISTINCT FROM EXCLUDED.display_name
                OR users.avatar_url IS DISTINCT FROM EXCLUDED.avatar_url
             RETURNING {COLUMNS}"
        );
        let upserted = sqlx::query_as::<_, User>(&query)
            .bind(&input.id)
            .bind(&input.email)
            .bind(&input.display_name)
            .bind(&input.avatar_url)
            .fetch_optional(pool)
            .await?;

        // The conditional DO UPDATE returns no row when nothing changed.
        match upserted {
            Some(user) => Ok(user),
            None => Self::find_by_id(pool, &input.id)
                .await?
                .ok_or(sqlx::Error::RowNotFound),
        }
    }
}
