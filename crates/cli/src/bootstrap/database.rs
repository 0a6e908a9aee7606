use govpl_verifier_domain::config::StorageConfig;
use govpl_verifier_infrastructure::database::{create_pool, database_url};
use sqlx::SqlitePool;
use tracing::{error, info};

pub async fn init_database(cfg: &StorageConfig) -> anyhow::Result<SqlitePool> {
    let url = database_url(&cfg.path);
    info!("Initializing database: {}", url);

    let pool = create_pool(&url, cfg.max_connections).await.map_err(|e| {
        error!("Failed to initialize database: {}", e);
        anyhow::anyhow!(e)
    })?;

    info!(
        "Database initialized successfully (max_connections={})",
        cfg.max_connections
    );

    Ok(pool)
}
