use std::time::Duration;

use configs::{AppConfig, DatabaseConfig};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

/// Connect using `config.toml` / `DATABASE_URL`. A missing URL is an error.
pub async fn connect() -> anyhow::Result<DatabaseConnection> {
    // Load .env if present
    let _ = dotenvy::dotenv();
    let cfg = AppConfig::load_and_validate()?;
    connect_with_config(&cfg.database).await
}

pub fn connect_options(cfg: &DatabaseConfig) -> ConnectOptions {
    let mut opts = ConnectOptions::new(cfg.url.clone());
    opts.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs))
        .sqlx_logging(cfg.sqlx_logging);
    opts
}

/// Build the shared pool. The handle is cheap to clone and is handed to the
/// router state rather than kept in a global.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let db = Database::connect(connect_options(cfg)).await?;
    info!(max_connections = cfg.max_connections, min_connections = cfg.min_connections, "database pool ready");
    Ok(db)
}
