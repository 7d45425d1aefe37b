use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::config::Config;

/// Creates and returns a PostgreSQL connection pool.
/// Pool capacity is base size plus overflow, matching the deployment knobs.
pub async fn create_pool(config: &Config) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(config.db_pool_size + config.db_max_overflow)
        .connect(&config.database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Creates the versions table and its indexes if they do not exist.
/// Idempotent, runs at every startup.
pub async fn init_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS versions (
            id UUID PRIMARY KEY,
            user_id UUID,
            name VARCHAR(200) NOT NULL,
            payload JSONB NOT NULL DEFAULT '{}'::jsonb,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS versions_user_id_idx ON versions (user_id)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS versions_name_idx ON versions (name)")
        .execute(pool)
        .await?;
    // GIN index for JSONB containment queries over payload
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS versions_payload_gin ON versions USING GIN (payload)",
    )
    .execute(pool)
    .await?;

    info!("Database schema ready");
    Ok(())
}
