use async_trait::async_trait;
use govpl_verifier_application::ports::{KeyValueStore, StoredRecord};
use govpl_verifier_domain::DomainError;
use sqlx::{Row, SqlitePool};
use tracing::warn;

/// [`KeyValueStore`] backed by the `kv_store` table. Values are stored as
/// JSON text.
pub struct SqliteKeyValueStore {
    pool: SqlitePool,
}

impl SqliteKeyValueStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn storage_error(e: sqlx::Error) -> DomainError {
    DomainError::Storage(format!("Database error: {}", e))
}

#[async_trait]
impl KeyValueStore for SqliteKeyValueStore {
    async fn get(&self, keys: &[&str]) -> Result<StoredRecord, DomainError> {
        let mut record = StoredRecord::with_capacity(keys.len());
        if keys.is_empty() {
            return Ok(record);
        }

        let placeholders = vec!["?"; keys.len()].join(", ");
        let sql = format!(
            "SELECT key, value FROM kv_store WHERE key IN ({})",
            placeholders
        );

        let mut query = sqlx::query(&sql);
        for key in keys {
            query = query.bind(*key);
        }

        let rows = query.fetch_all(&self.pool).await.map_err(storage_error)?;

        for row in rows {
            let key: String = row.get("key");
            let raw: String = row.get("value");
            match serde_json::from_str(&raw) {
                Ok(value) => {
                    record.insert(key, value);
                }
                Err(e) => {
                    warn!(key = %key, error = %e, "Stored value is not valid JSON, skipping");
                }
            }
        }

        Ok(record)
    }

    async fn set(&self, items: StoredRecord) -> Result<(), DomainError> {
        let mut tx = self.pool.begin().await.map_err(storage_error)?;

        for (key, value) in items {
            sqlx::query(
                "INSERT INTO kv_store (key, value, updated_at)
                 VALUES (?, ?, CURRENT_TIMESTAMP)
                 ON CONFLICT(key) DO UPDATE SET
                    value = excluded.value,
                    updated_at = excluded.updated_at",
            )
            .bind(&key)
            .bind(value.to_string())
            .execute(&mut *tx)
            .await
            .map_err(storage_error)?;
        }

        tx.commit().await.map_err(storage_error)?;
        Ok(())
    }
}
