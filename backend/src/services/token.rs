//! Refresh token whitelist service
//!
//! Issued refresh tokens are only honored while a matching whitelist row
//! exists. Lookups go through the SHA-256 digest, so this service is the
//! only place that needs the raw token.

use crate::auth::hash_token;
use crate::error::ApiError;
use crate::repositories::{CreateRefreshToken, RefreshTokenRecord, RefreshTokenRepository};
use chrono::{Duration, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Token whitelist service
pub struct TokenService;

impl TokenService {
    /// Whitelist a freshly issued refresh token for `expiry_secs` seconds
    pub async fn add_to_whitelist(
        pool: &PgPool,
        refresh_token: &str,
        user_id: Uuid,
        expiry_secs: i64,
    ) -> Result<RefreshTokenRecord, ApiError> {
        let input = CreateRefreshToken {
            hashed_token: hash_token(refresh_token),
            user_id,
            expire_at: Utc::now() + Duration::seconds(expiry_secs),
        };

        RefreshTokenRepository::create(pool, input)
            .await
            .map_err(ApiError::Internal)
    }

    /// Look up the whitelist row for a raw refresh token
    pub async fn find(
        pool: &PgPool,
        refresh_token: &str,
    ) -> Result<Option<RefreshTokenRecord>, ApiError> {
        RefreshTokenRepository::find_by_hashed_token(pool, &hash_token(refresh_token))
            .await
            .map_err(ApiError::Internal)
    }

    /// Soft-revoke a single whitelist row
    pub async fn revoke_by_id(pool: &PgPool, id: Uuid) -> Result<bool, ApiError> {
        RefreshTokenRepository::revoke_by_id(pool, id)
            .await
            .map_err(ApiError::Internal)
    }

    /// Soft-revoke every active token a user holds
    pub async fn revoke_all_for_user(pool: &PgPool, user_id: Uuid) -> Result<u64, ApiError> {
        RefreshTokenRepository::revoke_all_for_user(pool, user_id)
            .await
            .map_err(ApiError::Internal)
    }

    /// Hard-delete a whitelist row (logout)
    pub async fn delete_by_id(pool: &PgPool, id: Uuid) -> Result<bool, ApiError> {
        RefreshTokenRepository::delete_by_id(pool, id)
            .await
            .map_err(ApiError::Internal)
    }
}
