//! Comment routes
//!
//! Writing requires authentication; reading a movie's thread is public.

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::CommentService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use movie_catalog_shared::types::{
    CommentResponse, CommentThread, CreateCommentRequest, MessageResponse,
};

/// Comment route group.
pub fn comment_routes() -> Router<AppState> {
    Router::new()
        .route("/comments", post(create_comment))
        .route("/comments/:comment_id", delete(delete_comment))
        .route("/movies/:movie_id/comments", get(movie_comments))
}

/// POST /comments - Comment on a movie, or reply when `parentId` is set
async fn create_comment(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(req): Json<CreateCommentRequest>,
) -> ApiResult<(StatusCode, Json<CommentResponse>)> {
    let comment = CommentService::create(state.db(), auth_user.user_id, req).await?;
    Ok((StatusCode::CREATED, Json(comment)))
}

/// DELETE /comments/:comment_id - Delete one of the calling user's comments
async fn delete_comment(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(comment_id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let response = CommentService::delete(state.db(), auth_user.user_id, &comment_id).await?;
    Ok(Json(response))
}

/// GET /movies/:movie_id/comments - Public thread listing for a movie
async fn movie_comments(
    State(state): State<AppState>,
    Path(movie_id): Path<String>,
) -> ApiResult<Json<Vec<CommentThread>>> {
    let threads = CommentService::movie_comments(state.db(), &movie_id).await?;
    Ok(Json(threads))
}
