use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde_json::Value;
use tracing::instrument;
use uuid::Uuid;

use surveyhub_core::AppError;
use surveyhub_db::{InsertResult, UpdateResult};

use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::surveys::model::{SurveyListQuery, UpdateSurveyDto};
use crate::modules::surveys::service::SurveyService;
use crate::state::AppState;

/// Submit a survey document
#[utoipa::path(
    post,
    path = "/surveys",
    responses(
        (status = 200, description = "Insert acknowledgement", body = InsertResult),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Surveys"
)]
#[instrument(skip(state))]
pub async fn create_survey(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Json(payload): Json<Value>,
) -> Result<Json<InsertResult>, AppError> {
    let id = SurveyService::insert(&state.db, payload).await?;
    Ok(Json(InsertResult::new(id)))
}

/// List surveys owned by an email
#[utoipa::path(
    get,
    path = "/surveys",
    params(SurveyListQuery),
    responses(
        (status = 200, description = "Survey documents matching the email filter"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Surveys"
)]
#[instrument(skip(state))]
pub async fn list_surveys(
    State(state): State<AppState>,
    Query(query): Query<SurveyListQuery>,
) -> Result<Json<Vec<Value>>, AppError> {
    let surveys = SurveyService::list_by_email(&state.db, query.email.as_deref()).await?;
    let surveys = surveys
        .into_iter()
        .map(|survey| survey.into_api_value())
        .collect();
    Ok(Json(surveys))
}

/// Fetch a single survey document
///
/// An unknown id answers 200 with a null body rather than 404.
#[utoipa::path(
    get,
    path = "/surveys/{id}",
    params(
        ("id" = Uuid, Path, description = "Survey id")
    ),
    responses(
        (status = 200, description = "The survey document, or null when the id is unknown"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Surveys"
)]
#[instrument(skip(state))]
pub async fn get_survey(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let id = id.parse::<Uuid>().map_err(AppError::internal)?;
    let survey = SurveyService::find_by_id(&state.db, id).await?;
    let body = survey.map(|s| s.into_api_value()).unwrap_or(Value::Null);
    Ok(Json(body))
}

/// Update the editable fields of a survey
#[utoipa::path(
    patch,
    path = "/surveys/{id}",
    params(
        ("id" = Uuid, Path, description = "Survey id")
    ),
    request_body = UpdateSurveyDto,
    responses(
        (status = 200, description = "Update acknowledgement", body = UpdateResult),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Surveys"
)]
#[instrument(skip(state))]
pub async fn update_survey(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(dto): Json<UpdateSurveyDto>,
) -> Result<Json<UpdateResult>, AppError> {
    let id = id.parse::<Uuid>().map_err(AppError::internal)?;
    let matched = SurveyService::update_fields(&state.db, id, dto).await?;
    Ok(Json(UpdateResult::new(matched)))
}
