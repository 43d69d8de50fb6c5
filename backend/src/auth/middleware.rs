//! Authentication extractors
//!
//! Handlers that name [`AuthUser`] or [`AdminUser`] as a parameter are
//! gated by them; there is no separate middleware registration to keep
//! in sync with the route table.

use crate::error::ApiError;
use crate::repositories::user::{UserRepository, ADMIN_USER_TYPE_ID};
use crate::state::AppState;
use axum::{
    extract::FromRef,
    http::{header::AUTHORIZATION, request::Parts},
};
use uuid::Uuid;

/// Clients get one uniform body for every authentication failure shape.
fn unauthorized() -> ApiError {
    ApiError::Unauthorized("Unauthorized".to_string())
}

/// The caller's identity, proven by a valid bearer token.
///
/// Carries the claims the token was issued with. Verification goes
/// through the `JwtService` held in `AppState`.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub iat: i64,
    pub exp: i64,
}

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(unauthorized)?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(unauthorized)?;

        let claims = app_state
            .jwt()
            .verify_access_token(token)
            .map_err(|_| unauthorized())?;

        // A non-UUID subject means the token was not minted by us.
        let user_id = Uuid::parse_str(&claims.user_id).map_err(|_| unauthorized())?;

        Ok(AuthUser {
            user_id,
            iat: claims.iat,
            exp: claims.exp,
        })
    }
}

/// Authenticated admin extracted from JWT plus a user lookup
///
/// Builds on [`AuthUser`] and additionally requires the stored user to
/// carry the admin type. A valid token whose user is missing or is not
/// an admin is rejected with 403, not 401.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub user_id: Uuid,
}

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for AdminUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth = AuthUser::from_request_parts(parts, state).await?;
        let app_state = AppState::from_ref(state);

        let user = UserRepository::find_by_id(app_state.db(), auth.user_id)
            .await
            .map_err(ApiError::Internal)?;

        match user {
            Some(user) if user.user_type_id == ADMIN_USER_TYPE_ID => Ok(AdminUser {
                user_id: auth.user_id,
            }),
            _ => Err(ApiError::Forbidden("Forbidden".to_string())),
        }
    }
}
