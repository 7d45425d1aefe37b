use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// A persisted resume snapshot version, payload included.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VersionRow {
    pub id: Uuid,
    /// Reserved owner reference; always NULL until accounts land.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    pub name: String,
    pub payload: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Listing shape: everything but the payload body.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VersionSummary {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
