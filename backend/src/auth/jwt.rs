//! JWT access token generation and validation
//!
//! Access tokens are HS256-signed and self-contained. Refresh tokens
//! are opaque and live in [`super::refresh`].

use anyhow::Result;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// JWT claims
///
/// The wire name of the subject claim is `userId`, which is what the
/// existing clients were issued and still send back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Owning user ID
    #[serde(rename = "userId")]
    pub user_id: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Signing and verification keys derived once from the shared secret.
///
/// Both halves sit behind an `Arc`, so cloning the pair is two
/// reference-count bumps.
#[derive(Clone)]
pub struct JwtKeys {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
}

impl JwtKeys {
    /// Derive both keys from the configured secret.
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
        }
    }

    pub fn encoding(&self) -> &EncodingKey {
        &self.encoding
    }

    pub fn decoding(&self) -> &DecodingKey {
        &self.decoding
    }
}

/// Token lifetimes, in seconds.
#[derive(Clone)]
pub struct JwtConfig {
    pub access_token_expiry_secs: i64,
    pub refresh_token_expiry_secs: i64,
}

/// Issues and verifies access tokens.
///
/// Constructed once at startup and shared through `AppState`; the keys
/// inside are already derived, so handlers never touch the raw secret.
#[derive(Clone)]
pub struct JwtService {
    keys: JwtKeys,
    config: JwtConfig,
}

impl JwtService {
    /// Build a service from the secret and the configured lifetimes.
    pub fn new(secret: &str, access_token_expiry_secs: i64, refresh_token_expiry_secs: i64) -> Self {
        Self {
            keys: JwtKeys::new(secret),
            config: JwtConfig {
                access_token_expiry_secs,
                refresh_token_expiry_secs,
            },
        }
    }

    /// Sign a fresh access token for the given user.
    #[inline]
    pub fn generate_access_token(&self, user_id: Uuid) -> Result<String> {
        let now = Utc::now();
        let exp = now + Duration::seconds(self.config.access_token_expiry_secs);

        let claims = Claims {
            user_id: user_id.to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        encode(&Header::default(), &claims, self.keys.encoding())
            .map_err(|e| anyhow::anyhow!("Failed to generate access token: {}", e))
    }

    /// Validate an access token and return its claims
    ///
    /// Every failure collapses to the same error so callers cannot tell
    /// a bad signature from an expired or malformed token.
    #[inline]
    pub fn verify_access_token(&self, token: &str) -> Result<Claims> {
        let token_data = decode::<Claims>(token, self.keys.decoding(), &Validation::default())
            .map_err(|_| anyhow::anyhow!("Invalid token"))?;

        Ok(token_data.claims)
    }

    /// Configured access token lifetime in seconds.
    #[inline]
    pub fn access_token_expiry_secs(&self) -> i64 {
        self.config.access_token_expiry_secs
    }

    /// Configured refresh token lifetime in seconds (drives the whitelist window).
    #[inline]
    pub fn refresh_token_expiry_secs(&self) -> i64 {
        self.config.refresh_token_expiry_secs
    }
}
