use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Value, json};
use tracing::instrument;
use uuid::Uuid;

use surveyhub_core::AppError;
use surveyhub_db::{InsertResult, UpdateResult};

use crate::middleware::auth::AuthUser;
use crate::middleware::role::RequireAdmin;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::users::model::{AdminStatus, SurveyorStatus, UserRole};
use crate::modules::users::service::UserService;
use crate::state::AppState;

/// Get all users (admin only)
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "List of user documents"),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - caller is not an admin", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_users(
    State(state): State<AppState>,
    _admin: RequireAdmin,
) -> Result<Json<Vec<Value>>, AppError> {
    let users = UserService::list(&state.db).await?;
    let users = users
        .into_iter()
        .map(|user| user.into_api_value())
        .collect();
    Ok(Json(users))
}

/// Register a user document
///
/// Stores the body verbatim. If a user with the same `email` already
/// exists the document is left alone and a null-id acknowledgement is
/// returned instead.
#[utoipa::path(
    post,
    path = "/users",
    responses(
        (status = 200, description = "Insert acknowledgement, or an existing-user notice with a null insertedId", body = InsertResult),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, AppError> {
    let email = payload.get("email").and_then(Value::as_str);

    let existing = UserService::find_by_email(&state.db, email).await?;
    if existing.is_some() {
        return Ok(Json(
            json!({ "message": "user already exists", "insertedId": null }),
        ));
    }

    let id = UserService::insert(&state.db, payload).await?;
    Ok(Json(serde_json::to_value(InsertResult::new(id))?))
}

/// Check whether a user holds the admin role
#[utoipa::path(
    get,
    path = "/users/admin/{key}",
    params(
        ("key" = String, Path, description = "Email of the user to check")
    ),
    responses(
        (status = 200, description = "Admin status", body = AdminStatus),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - token does not match the requested email", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn check_admin(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(email): Path<String>,
) -> Result<Json<AdminStatus>, AppError> {
    if auth_user.email() != email {
        return Err(AppError::forbidden("forbidden access"));
    }

    let user = UserService::find_by_email(&state.db, Some(&email)).await?;
    let admin = stored_role(user.as_ref()) == UserRole::Admin;
    Ok(Json(AdminStatus { admin }))
}

/// Promote a user to admin (admin only)
#[utoipa::path(
    patch,
    path = "/users/admin/{key}",
    params(
        ("key" = String, Path, description = "Id of the user to promote")
    ),
    responses(
        (status = 200, description = "Update acknowledgement", body = UpdateResult),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - caller is not an admin", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn promote_admin(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(key): Path<String>,
) -> Result<Json<UpdateResult>, AppError> {
    let id = key.parse::<Uuid>().map_err(AppError::internal)?;
    let matched = UserService::set_role(&state.db, id, UserRole::Admin).await?;
    Ok(Json(UpdateResult::new(matched)))
}

/// Check whether a user holds the surveyor role
#[utoipa::path(
    get,
    path = "/users/surveyor/{key}",
    params(
        ("key" = String, Path, description = "Email of the user to check")
    ),
    responses(
        (status = 200, description = "Surveyor status", body = SurveyorStatus),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - token does not match the requested email", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn check_surveyor(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(email): Path<String>,
) -> Result<Json<SurveyorStatus>, AppError> {
    if auth_user.email() != email {
        return Err(AppError::forbidden("forbidden access"));
    }

    let user = UserService::find_by_email(&state.db, Some(&email)).await?;
    let surveyor = stored_role(user.as_ref()) == UserRole::Surveyor;
    Ok(Json(SurveyorStatus { surveyor }))
}

/// Promote a user to surveyor
#[utoipa::path(
    patch,
    path = "/users/surveyor/{key}",
    params(
        ("key" = String, Path, description = "Id of the user to promote")
    ),
    responses(
        (status = 200, description = "Update acknowledgement", body = UpdateResult),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn promote_surveyor(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(key): Path<String>,
) -> Result<Json<UpdateResult>, AppError> {
    let id = key.parse::<Uuid>().map_err(AppError::internal)?;
    let matched = UserService::set_role(&state.db, id, UserRole::Surveyor).await?;
    Ok(Json(UpdateResult::new(matched)))
}

fn stored_role(user: Option<&surveyhub_db::StoredDocument>) -> UserRole {
    user.and_then(|u| u.field_str("role"))
        .map(UserRole::parse)
        .unwrap_or_default()
}
