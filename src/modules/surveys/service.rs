use anyhow::Context;
use serde_json::{Value, json};
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use surveyhub_core::AppError;
use surveyhub_db::StoredDocument;

use crate::modules::surveys::model::UpdateSurveyDto;

pub struct SurveyService;

impl SurveyService {
    /// Stores a survey document verbatim and returns the generated id.
    pub async fn insert(db: &PgPool, doc: Value) -> Result<Uuid, AppError> {
        let id =
            sqlx::query_scalar::<_, Uuid>("INSERT INTO surveys (doc) VALUES ($1) RETURNING id")
                .bind(Json(doc))
                .fetch_one(db)
                .await
                .context("Failed to insert survey")
                .map_err(AppError::database)?;

        Ok(id)
    }

    /// Lists surveys whose `email` key matches the filter.
    ///
    /// A `None` filter matches surveys that have no `email` key, not the
    /// whole table.
    pub async fn list_by_email(
        db: &PgPool,
        email: Option<&str>,
    ) -> Result<Vec<StoredDocument>, AppError> {
        let surveys = sqlx::query_as::<_, StoredDocument>(
            "SELECT id, doc FROM surveys WHERE doc->>'email' IS NOT DISTINCT FROM $1 ORDER BY id",
        )
        .bind(email)
        .fetch_all(db)
        .await
        .context("Failed to fetch surveys")
        .map_err(AppError::database)?;

        Ok(surveys)
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> Result<Option<StoredDocument>, AppError> {
        let survey =
            sqlx::query_as::<_, StoredDocument>("SELECT id, doc FROM surveys WHERE id = $1")
                .bind(id)
                .fetch_optional(db)
                .await
                .context("Failed to fetch survey by id")
                .map_err(AppError::database)?;

        Ok(survey)
    }

    /// Overwrites the three editable keys of a survey document. Keys the
    /// caller left out are written as null. Returns the number of matched
    /// rows.
    pub async fn update_fields(
        db: &PgPool,
        id: Uuid,
        dto: UpdateSurveyDto,
    ) -> Result<u64, AppError> {
        let patch = json!({
            "surveyName": dto.survey_name,
            "description": dto.description,
            "category": dto.category,
        });

        let result = sqlx::query("UPDATE surveys SET doc = doc || $2 WHERE id = $1")
            .bind(id)
            .bind(Json(patch))
            .execute(db)
            .await
            .context("Failed to update survey")
            .map_err(AppError::database)?;

        Ok(result.rows_affected())
    }
}
