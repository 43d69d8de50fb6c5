//! Business logic services
//!
//! The rules live here, between the HTTP handlers above and the
//! repositories below. Services decide what a request means; they
//! never write SQL and never touch response encoding.

pub mod comment;
pub mod favorite;
pub mod token;
pub mod user;

pub use comment::CommentService;
pub use favorite::FavoriteService;
pub use token::TokenService;
pub use user::UserService;
