//! Favorites routes
//!
//! The favorite's owner always comes from the bearer token, never from
//! the request body.

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::FavoriteService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use movie_catalog_shared::types::{AddFavoriteRequest, FavoriteResponse, MessageResponse};

/// Favorites route group.
pub fn favorite_routes() -> Router<AppState> {
    Router::new()
        .route("/favorites", get(list_favorites).post(add_favorite))
        .route("/favorites/:favorite_id", delete(remove_favorite))
}

/// GET /favorites - List the calling user's favorites
async fn list_favorites(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> ApiResult<Json<Vec<FavoriteResponse>>> {
    let favorites = FavoriteService::list_for_user(state.db(), auth_user.user_id).await?;
    Ok(Json(favorites))
}

/// POST /favorites - Add a movie to the calling user's favorites
async fn add_favorite(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(req): Json<AddFavoriteRequest>,
) -> ApiResult<(StatusCode, Json<FavoriteResponse>)> {
    let favorite = FavoriteService::add(state.db(), auth_user.user_id, req).await?;
    Ok((StatusCode::CREATED, Json(favorite)))
}

/// DELETE /favorites/:favorite_id - Remove one of the calling user's favorites
async fn remove_favorite(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(favorite_id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let response = FavoriteService::remove(state.db(), auth_user.user_id, &favorite_id).await?;
    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    // Covered by routes::auth_tests and the integration suite
}
