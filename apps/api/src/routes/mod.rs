pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::llm::handlers as llm_handlers;
use crate::state::AppState;
use crate::versions::handlers as version_handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/ping", get(health::ping_handler))
        .route("/api/health/live", get(health::live_handler))
        .route("/api/health/ready", get(health::ready_handler))
        // Version store
        .route(
            "/api/versions",
            get(version_handlers::handle_list_versions)
                .post(version_handlers::handle_create_version),
        )
        .route(
            "/api/versions/:id",
            get(version_handlers::handle_get_version)
                .put(version_handlers::handle_replace_version),
        )
        .route(
            "/api/versions/:id/rename",
            patch(version_handlers::handle_rename_version),
        )
        // Completion stub
        .route("/api/llm/complete", post(llm_handlers::handle_complete))
        .with_state(state)
}
