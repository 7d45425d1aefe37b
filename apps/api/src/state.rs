use std::sync::Arc;

use sqlx::PgPool;

use crate::cache::HitCounter;
use crate::config::Config;
use crate::llm::CompletionProvider;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Best-effort request counter; Redis-backed when configured.
    pub hits: Arc<HitCounter>,
    /// Pluggable completion provider. Default: NullProvider echo stub.
    pub llm: Arc<dyn CompletionProvider>,
    pub config: Config,
}
