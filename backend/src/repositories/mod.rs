//! Database repositories
//!
//! All SQL lives in this layer. One repository per table, each a unit
//! struct with static async methods taking the pool.

pub mod comment;
pub mod favorite;
pub mod refresh_token;
pub mod user;

pub use comment::{CommentRecord, CommentRepository, CommentWithAuthorRecord, CreateComment};
pub use favorite::{FavoriteRecord, FavoriteRepository};
pub use refresh_token::{CreateRefreshToken, RefreshTokenRecord, RefreshTokenRepository};
pub use user::{UserRecord, UserRepository};
