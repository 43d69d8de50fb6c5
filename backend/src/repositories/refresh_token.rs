//! Refresh token whitelist repository
//!
//! Rows are keyed by the SHA-256 digest of the raw token; the raw value
//! never reaches the database.

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// A `refresh_tokens` row.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct RefreshTokenRecord {
    pub id: Uuid,
    pub hashed_token: String,
    pub user_id: Uuid,
    pub revoked: bool,
    pub expire_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RefreshTokenRecord {
    /// A token is usable only while unrevoked and unexpired.
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        !self.revoked && self.expire_at > now
    }
}

/// Input for whitelisting a refresh token
#[derive(Debug, Clone)]
pub struct CreateRefreshToken {
    pub hashed_token: String,
    pub user_id: Uuid,
    pub expire_at: DateTime<Utc>,
}

pub struct RefreshTokenRepository;

impl RefreshTokenRepository {
    /// Insert a whitelist row for a freshly issued token
    pub async fn create(pool: &PgPool, input: CreateRefreshToken) -> Result<RefreshTokenRecord> {
        let record = sqlx::query_as::<_, RefreshTokenRecord>(
            r#"
            INSERT INTO refresh_tokens (hashed_token, user_id, expire_at)
            VALUES ($1, $2, $3)
            RETURNING id, hashed_token, user_id, revoked, expire_at, created_at, updated_at
            "#,
        )
        .bind(&input.hashed_token)
        .bind(input.user_id)
        .bind(input.expire_at)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Find a whitelist row by token digest
    pub async fn find_by_hashed_token(
        pool: &PgPool,
        hashed_token: &str,
    ) -> Result<Option<RefreshTokenRecord>> {
        let record = sqlx::query_as::<_, RefreshTokenRecord>(
            r#"
            SELECT id, hashed_token, user_id, revoked, expire_at, created_at, updated_at
            FROM refresh_tokens
            WHERE hashed_token = $1
            "#,
        )
        .bind(hashed_token)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Mark one token revoked, keeping the row for auditability
    pub async fn revoke_by_id(pool: &PgPool, id: Uuid) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE refresh_tokens
            SET revoked = TRUE, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Mark every token of a user revoked
    pub async fn revoke_all_for_user(pool: &PgPool, user_id: Uuid) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE refresh_tokens
            SET revoked = TRUE, updated_at = NOW()
            WHERE user_id = $1 AND revoked = FALSE
            "#,
        )
        .bind(user_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Remove a whitelist row entirely
    pub async fn delete_by_id(pool: &PgPool, id: Uuid) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM refresh_tokens
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
