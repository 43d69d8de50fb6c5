//! Opaque refresh token material
//!
//! Refresh tokens carry no claims. Each one is random bytes encoded as
//! URL-safe base64, and the whitelist stores only a SHA-256 digest, so a
//! leaked table cannot be replayed against the API.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use rand::{rngs::OsRng, RngCore};
use sha2::{Digest, Sha256};

/// Number of random bytes behind each refresh token.
const TOKEN_BYTES: usize = 16;

/// Generate a cryptographically secure opaque refresh token.
pub fn generate_refresh_token() -> String {
    let mut random_bytes = [0u8; TOKEN_BYTES];
    OsRng.fill_bytes(&mut random_bytes);
    URL_SAFE_NO_PAD.encode(random_bytes)
}

/// Hash a raw token into the hex digest the whitelist is keyed by.
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}
