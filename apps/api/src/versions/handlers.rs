use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::version::{VersionRow, VersionSummary};
use crate::state::AppState;
use crate::versions::store;

#[derive(Debug, Default, Deserialize)]
pub struct CreateVersionRequest {
    pub name: Option<String>,
    // Clients send either key; `payload` wins when both are present.
    pub payload: Option<Value>,
    pub data: Option<Value>,
}

impl CreateVersionRequest {
    fn into_payload(self) -> Option<Value> {
        self.payload.or(self.data)
    }
}

#[derive(Debug, Deserialize)]
pub struct RenameVersionRequest {
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ReplaceVersionRequest {
    pub payload: Option<Value>,
    pub data: Option<Value>,
}

impl ReplaceVersionRequest {
    /// Same key rule as create, but replace has no fallback document:
    /// a body carrying neither key is rejected outright.
    fn into_payload(self) -> Result<Value, AppError> {
        self.payload.or(self.data).ok_or(AppError::MissingPayload)
    }
}

/// GET /api/versions
pub async fn handle_list_versions(
    State(state): State<AppState>,
) -> Result<Json<Vec<VersionSummary>>, AppError> {
    Ok(Json(store::list_versions(&state.db).await?))
}

/// POST /api/versions
/// The body is optional; an empty create yields the seed document under a
/// timestamp-derived name.
pub async fn handle_create_version(
    State(state): State<AppState>,
    body: Option<Json<CreateVersionRequest>>,
) -> Result<Json<VersionRow>, AppError> {
    let mut req = body.map(|Json(b)| b).unwrap_or_default();
    let name = req.name.take();
    let row = store::create_version(&state.db, name, req.into_payload()).await?;
    Ok(Json(row))
}

/// GET /api/versions/:id
pub async fn handle_get_version(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<VersionRow>, AppError> {
    Ok(Json(store::get_version(&state.db, id).await?))
}

/// PATCH /api/versions/:id/rename
pub async fn handle_rename_version(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<RenameVersionRequest>,
) -> Result<Json<VersionSummary>, AppError> {
    Ok(Json(store::rename_version(&state.db, id, &req.name).await?))
}

/// PUT /api/versions/:id
pub async fn handle_replace_version(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    body: Option<Json<ReplaceVersionRequest>>,
) -> Result<Json<VersionRow>, AppError> {
    let req = body.map(|Json(b)| b).unwrap_or_default();
    let payload = req.into_payload()?;
    Ok(Json(store::replace_version(&state.db, id, payload).await?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_replace_empty_body_is_missing_payload() {
        let err = ReplaceVersionRequest::default().into_payload().unwrap_err();
        assert!(matches!(err, AppError::MissingPayload));
    }

    #[test]
    fn test_replace_accepts_data_key() {
        let req = ReplaceVersionRequest {
            payload: None,
            data: Some(json!({"resume": {"contact": {}}})),
        };
        assert_eq!(
            req.into_payload().unwrap(),
            json!({"resume": {"contact": {}}})
        );
    }

    #[test]
    fn test_replace_payload_wins_over_data() {
        let req = ReplaceVersionRequest {
            payload: Some(json!({"which": "payload"})),
            data: Some(json!({"which": "data"})),
        };
        assert_eq!(req.into_payload().unwrap(), json!({"which": "payload"}));
    }

    #[test]
    fn test_create_payload_wins_over_data() {
        let req = CreateVersionRequest {
            name: None,
            payload: Some(json!({"which": "payload"})),
            data: Some(json!({"which": "data"})),
        };
        assert_eq!(req.into_payload(), Some(json!({"which": "payload"})));
    }

    #[test]
    fn test_create_empty_body_has_no_payload() {
        assert_eq!(CreateVersionRequest::default().into_payload(), None);
    }
}
