//! API request and response types
//!
//! The HTTP surface speaks camelCase JSON, so every type that crosses the
//! wire carries a `rename_all` attribute. Request fields that the handlers
//! must reject with a 400 body arrive as `Option` and are checked after
//! deserialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// API error response, a single flat message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Generic acknowledgement body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ============================================================================
// Authentication Types
// ============================================================================

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Body carrying an opaque refresh token (logout and refresh)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    pub refresh_token: Option<String>,
}

/// Public user shape embedded in authentication responses
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

/// Token pair plus the signed-in user
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: PublicUser,
}

/// Rotated token pair returned by the refresh endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPairResponse {
    pub access_token: String,
    pub refresh_token: String,
}

// ============================================================================
// User Types
// ============================================================================

/// User profile response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// User entry in the admin listing (never includes the password hash)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUserEntry {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub user_type_id: i32,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Favorite Types
// ============================================================================

/// Add-favorite request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddFavoriteRequest {
    pub movie_id: Option<String>,
}

/// Favorite entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub movie_id: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Comment Types
// ============================================================================

/// Create-comment request; a present `parent_id` marks a reply
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    pub movie_id: Option<String>,
    pub text: Option<String>,
    pub parent_id: Option<String>,
}

/// Newly created comment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: Uuid,
    pub text: String,
    pub user_id: Uuid,
    pub movie_id: String,
    pub parent_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Comment author as embedded in threads
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentAuthor {
    pub id: Uuid,
    pub name: String,
}

/// Reply nested under a top-level comment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentReply {
    pub id: Uuid,
    pub text: String,
    pub user_id: Uuid,
    pub movie_id: String,
    pub parent_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub user: CommentAuthor,
}

/// Top-level comment with its author and direct replies
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentThread {
    pub id: Uuid,
    pub text: String,
    pub user_id: Uuid,
    pub movie_id: String,
    pub parent_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub user: CommentAuthor,
    pub replies: Vec<CommentReply>,
}
