//! Admin routes

use crate::auth::AdminUser;
use crate::error::ApiResult;
use crate::services::UserService;
use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use movie_catalog_shared::types::AdminUserEntry;

/// Admin route group.
pub fn admin_routes() -> Router<AppState> {
    Router::new().route("/admin/users", get(list_users))
}

/// GET /admin/users - every registered user.
///
/// The [`AdminUser`] extractor gates this: a valid token for a
/// non-admin account gets 403, no token at all gets 401.
async fn list_users(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> ApiResult<Json<Vec<AdminUserEntry>>> {
    let users = UserService::list_users(state.db()).await?;
    Ok(Json(users))
}
