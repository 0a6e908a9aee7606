#![allow(dead_code)]
pub mod http_server_mock;

use govpl_verifier_infrastructure::database::init_schema;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

pub use http_server_mock::MockHttpServer;

/// In-memory database; a single connection so every query sees the same data.
pub async fn create_test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    init_schema(&pool).await.unwrap();
    pool
}
