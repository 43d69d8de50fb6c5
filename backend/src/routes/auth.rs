//! Authentication routes: register, login, logout, and refresh.
//!
//! Handlers stay thin. Request bodies land here as loosely-typed
//! payloads (all fields optional) and the user service decides what a
//! missing field means, so validation errors come out uniform.

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::UserService;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use movie_catalog_shared::types::{
    AuthResponse, LoginRequest, MessageResponse, RefreshTokenRequest, RegisterRequest,
    TokenPairResponse,
};

/// Authentication route group.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/refresh", post(refresh))
}

/// POST /register - create an account, answering 201 with the first
/// token pair.
async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    let response = UserService::register(&state.db, state.jwt(), req).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /login - trade credentials for a token pair.
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let response = UserService::login(&state.db, state.jwt(), req).await?;
    Ok(Json(response))
}

/// POST /logout - drop a refresh token from the whitelist.
///
/// Needs a valid Bearer token; the body names the refresh token to
/// drop.
async fn logout(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Json(req): Json<RefreshTokenRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let response = UserService::logout(&state.db, req).await?;
    Ok(Json(response))
}

/// POST /refresh - rotate a refresh token into a fresh pair.
async fn refresh(
    State(state): State<AppState>,
    Json(req): Json<RefreshTokenRequest>,
) -> ApiResult<Json<TokenPairResponse>> {
    let response = UserService::refresh_tokens(&state.db, state.jwt(), req).await?;
    Ok(Json(response))
}
