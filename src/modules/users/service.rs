use anyhow::Context;
use serde_json::Value;
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use surveyhub_core::AppError;
use surveyhub_db::StoredDocument;

use crate::modules::users::model::UserRole;

pub struct UserService;

impl UserService {
    pub async fn list(db: &PgPool) -> Result<Vec<StoredDocument>, AppError> {
        let users = sqlx::query_as::<_, StoredDocument>("SELECT id, doc FROM users ORDER BY id")
            .fetch_all(db)
            .await
            .context("Failed to fetch users")
            .map_err(AppError::database)?;

        Ok(users)
    }

    /// Looks up a user by the `email` key of its document.
    ///
    /// `IS NOT DISTINCT FROM` makes a `None` filter match documents that
    /// have no `email` key at all, mirroring how a missing filter value
    /// compares equal to a missing field.
    pub async fn find_by_email(
        db: &PgPool,
        email: Option<&str>,
    ) -> Result<Option<StoredDocument>, AppError> {
        let user = sqlx::query_as::<_, StoredDocument>(
            "SELECT id, doc FROM users WHERE doc->>'email' IS NOT DISTINCT FROM $1 LIMIT 1",
        )
        .bind(email)
        .fetch_optional(db)
        .await
        .context("Failed to fetch user by email")
        .map_err(AppError::database)?;

        Ok(user)
    }

    /// Stores a user document verbatim and returns the generated id.
    pub async fn insert(db: &PgPool, doc: Value) -> Result<Uuid, AppError> {
        let id = sqlx::query_scalar::<_, Uuid>("INSERT INTO users (doc) VALUES ($1) RETURNING id")
            .bind(Json(doc))
            .fetch_one(db)
            .await
            .context("Failed to insert user")
            .map_err(AppError::database)?;

        Ok(id)
    }

    /// Overwrites the `role` key of a user document, creating it if absent.
    /// Returns the number of matched rows.
    pub async fn set_role(db: &PgPool, id: Uuid, role: UserRole) -> Result<u64, AppError> {
        let result = sqlx::query(
            "UPDATE users SET doc = jsonb_set(doc, '{role}', to_jsonb($2::text), true) WHERE id = $1",
        )
        .bind(id)
        .bind(role.as_str())
        .execute(db)
        .await
        .context("Failed to update user role")
        .map_err(AppError::database)?;

        Ok(result.rows_affected())
    }
}
