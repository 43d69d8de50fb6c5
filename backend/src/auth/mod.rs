//! Authentication module
//!
//! Provides JWT-based access tokens, opaque whitelisted refresh tokens,
//! and bcrypt password hashing.

mod jwt;
mod middleware;
mod password;
mod refresh;

pub use jwt::{Claims, JwtService};
pub use middleware::{AdminUser, AuthUser};
pub use password::PasswordService;
pub use refresh::{generate_refresh_token, hash_token};
