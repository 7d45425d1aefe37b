use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct CompleteRequest {
    #[serde(default)]
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct CompleteResponse {
    /// The configured selector, not the active provider; an unimplemented
    /// selector still echoes its own name while the null stub answers.
    pub provider: String,
    pub output: String,
}

/// POST /api/llm/complete
pub async fn handle_complete(
    State(state): State<AppState>,
    body: Option<Json<CompleteRequest>>,
) -> Result<Json<CompleteResponse>, AppError> {
    let req = body.map(|Json(b)| b).unwrap_or_default();
    let output = state.llm.complete(&req.prompt).await?;
    Ok(Json(CompleteResponse {
        provider: state.config.default_llm_provider.clone(),
        output,
    }))
}
