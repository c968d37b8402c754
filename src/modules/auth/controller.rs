use axum::{Json, extract::State};
use serde::Serialize;
use tracing::instrument;
use utoipa::ToSchema;

use surveyhub_auth::issue_token;
use surveyhub_core::AppError;

use super::model::{TokenRequest, TokenResponse};
use crate::state::AppState;

/// Error body shared by every endpoint.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
}

/// Issue a JWT for the given identity
///
/// Trusts the body as-is: the caller asserts its own identity and any
/// extra claim fields are signed into the token unchanged.
#[utoipa::path(
    post,
    path = "/jwt",
    request_body = TokenRequest,
    responses(
        (status = 200, description = "Signed token", body = TokenResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state))]
pub async fn create_token(
    State(state): State<AppState>,
    Json(body): Json<TokenRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let token = issue_token(&body.email, body.extra, &state.jwt_config)?;
    Ok(Json(TokenResponse { token }))
}
