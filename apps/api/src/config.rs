use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub db_pool_size: u32,
    pub db_max_overflow: u32,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub rust_log: String,
    pub redis_url: Option<String>,
    pub default_llm_provider: String,
    pub openai_api_key: Option<String>,
    pub gemini_api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            db_pool_size: parse_env("DB_POOL_SIZE", 10)?,
            db_max_overflow: parse_env("DB_MAX_OVERFLOW", 10)?,
            port: parse_env("PORT", 8000)?,
            cors_origins: parse_origins(optional_env("CORS_ORIGINS").as_deref()),
            rust_log: optional_env("RUST_LOG")
                .or_else(|| optional_env("LOG_LEVEL"))
                .unwrap_or_else(|| "info".to_string())
                .to_lowercase(),
            redis_url: optional_env("REDIS_URL"),
            default_llm_provider: optional_env("DEFAULT_LLM_PROVIDER")
                .unwrap_or_else(|| "null".to_string()),
            openai_api_key: optional_env("OPENAI_API_KEY"),
            gemini_api_key: optional_env("GEMINI_API_KEY"),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("'{key}' must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

/// Splits a comma-separated origin list. Empty input means no restriction
/// (the router falls back to a permissive CORS layer for dev).
fn parse_origins(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}
