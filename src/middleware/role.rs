//! Role-based authorization.
//!
//! The only elevated gate in the system is the admin check: a verified
//! identity whose stored user document carries `role: "admin"`. Surveyor
//! status is informational (see the check endpoints in the users module)
//! and gates nothing.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use surveyhub_core::AppError;

use crate::middleware::auth::AuthUser;
use crate::modules::users::model::UserRole;
use crate::modules::users::service::UserService;
use crate::state::AppState;

/// Extractor for admin-only routes.
///
/// Runs after identity extraction: looks up the user document by the claim
/// email and requires its stored role to be `admin`. A missing document or
/// any other role rejects with 403 `forbidden access`.
///
/// # Example
///
/// ```ignore
/// pub async fn get_users(
///     State(state): State<AppState>,
///     RequireAdmin(auth_user): RequireAdmin,
/// ) -> Result<Json<Vec<Value>>, AppError> {
///     // Only admins reach this point.
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_user = AuthUser::from_request_parts(parts, state).await?;

        let user = UserService::find_by_email(&state.db, Some(auth_user.email())).await?;
        let role = user
            .as_ref()
            .and_then(|u| u.field_str("role"))
            .map(UserRole::parse)
            .unwrap_or_default();

        if role != UserRole::Admin {
            return Err(AppError::forbidden("forbidden access"));
        }

        Ok(RequireAdmin(auth_user))
    }
}
