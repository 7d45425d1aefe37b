use serde_json::Value;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::version::{VersionRow, VersionSummary};
use crate::snapshot;
use crate::versions::seed;

/// Creates a new version. An absent (or empty) name and an absent payload
/// fall back to the timestamp-derived default and the seed document; the
/// payload is validated before the insert.
pub async fn create_version(
    pool: &PgPool,
    name: Option<String>,
    payload: Option<Value>,
) -> Result<VersionRow, AppError> {
    let name = seed::resolve_name(name);
    let payload = payload.unwrap_or_else(seed::default_payload);
    snapshot::validate(&payload).map_err(|e| AppError::Validation(e.to_string()))?;

    let row = sqlx::query_as::<_, VersionRow>(
        "INSERT INTO versions (id, name, payload) VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(Uuid::new_v4())
    .bind(&name)
    .bind(&payload)
    .fetch_one(pool)
    .await?;

    info!("Created version {} ({})", row.id, row.name);
    Ok(row)
}

/// Returns all versions, newest first, payload omitted.
pub async fn list_versions(pool: &PgPool) -> Result<Vec<VersionSummary>, AppError> {
    Ok(sqlx::query_as::<_, VersionSummary>(
        "SELECT id, name, created_at, updated_at FROM versions ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await?)
}

pub async fn get_version(pool: &PgPool, id: Uuid) -> Result<VersionRow, AppError> {
    sqlx::query_as::<_, VersionRow>("SELECT * FROM versions WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Version {id} not found")))
}

/// Updates the display name only; `updated_at` is refreshed in the same statement.
pub async fn rename_version(
    pool: &PgPool,
    id: Uuid,
    name: &str,
) -> Result<VersionSummary, AppError> {
    sqlx::query_as::<_, VersionSummary>(
        r#"
        UPDATE versions
        SET name = $2, updated_at = now()
        WHERE id = $1
        RETURNING id, name, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(name)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Version {id} not found")))
}

/// Swaps the payload wholesale. Validation runs first so an invalid document
/// never touches the stored row; concurrent replaces are last-write-wins.
pub async fn replace_version(
    pool: &PgPool,
    id: Uuid,
    payload: Value,
) -> Result<VersionRow, AppError> {
    snapshot::validate(&payload).map_err(|e| AppError::Validation(e.to_string()))?;

    sqlx::query_as::<_, VersionRow>(
        r#"
        UPDATE versions
        SET payload = $2, updated_at = now()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(&payload)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Version {id} not found")))
}
