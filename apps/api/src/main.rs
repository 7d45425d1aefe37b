mod cache;
mod config;
mod db;
mod errors;
mod llm;
mod models;
mod routes;
mod snapshot;
mod state;
mod versions;

use anyhow::Result;
use axum::http::HeaderValue;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cache::HitCounter;
use crate::config::Config;
use crate::db::{create_pool, init_schema};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.rust_log)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Vitae API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL and make sure the versions table exists
    let pool = create_pool(&config).await?;
    init_schema(&pool).await?;

    // Optional Redis client for the request counter
    let redis = match &config.redis_url {
        Some(url) => {
            let client = redis::Client::open(url.clone())?;
            info!("Redis client initialized");
            Some(client)
        }
        None => {
            info!("REDIS_URL not set; request counter runs in-process");
            None
        }
    };
    let hits = Arc::new(HitCounter::new(redis));

    // Completion provider (null echo stub unless a real one is configured)
    let llm = llm::provider_from_config(&config);
    info!("Completion provider initialized ({})", llm.name());

    // Build app state
    let state = AppState {
        db: pool,
        hits,
        llm,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(build_cors(&config));

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// CORS layer from config: an explicit origin allowlist when `CORS_ORIGINS`
/// is set, otherwise wide open for dev.
fn build_cors(config: &Config) -> CorsLayer {
    if config.cors_origins.is_empty() {
        return CorsLayer::permissive();
    }
    CorsLayer::new()
        .allow_origin(parse_cors_origins(&config.cors_origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Parses configured origins into header values, logging any entry that
/// cannot be used so an operator sees why requests from it are rejected.
fn parse_cors_origins(origins: &[String]) -> Vec<HeaderValue> {
    origins
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring malformed CORS origin '{o}': {e}");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cors_origins_drops_malformed_entries() {
        let origins = vec![
            "http://localhost:5173".to_string(),
            "http://bad\u{7f}origin".to_string(),
        ];
        let parsed = parse_cors_origins(&origins);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0], HeaderValue::from_static("http://localhost:5173"));
    }

    #[test]
    fn test_parse_cors_origins_keeps_all_valid() {
        let origins = vec![
            "http://localhost:5173".to_string(),
            "https://app.example.com".to_string(),
        ];
        assert_eq!(parse_cors_origins(&origins).len(), 2);
    }
}
