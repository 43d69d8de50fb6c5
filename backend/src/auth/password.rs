//! Password hashing using bcrypt
//!
//! Bcrypt burns CPU on purpose, so handlers must go through the
//! `*_async` variants; the blocking ones exist for tests and tooling.

use anyhow::Result;

/// Work factor for bcrypt. Stored hashes were produced at this cost, so
/// changing it only affects newly registered users.
const HASH_COST: u32 = 10;

/// Bcrypt hashing and verification.
pub struct PasswordService;

impl PasswordService {
    /// Hash a password. Blocks the calling thread for the full bcrypt
    /// run; async callers use [`Self::hash_async`].
    pub fn hash(password: &str) -> Result<String> {
        bcrypt::hash(password, HASH_COST)
            .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))
    }

    /// Hash on the blocking thread pool.
    pub async fn hash_async(password: String) -> Result<String> {
        tokio::task::spawn_blocking(move || Self::hash(&password))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))?
    }

    /// Check a password against a stored hash. Blocking, like
    /// [`Self::hash`]; async callers use [`Self::verify_async`].
    pub fn verify(password: &str, hash: &str) -> Result<bool> {
        bcrypt::verify(password, hash)
            .map_err(|e| anyhow::anyhow!("Invalid hash format: {}", e))
    }

    /// Verify on the blocking thread pool.
    pub async fn verify_async(password: String, hash: String) -> Result<bool> {
        tokio::task::spawn_blocking(move || Self::verify(&password, &hash))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))?
    }
}
