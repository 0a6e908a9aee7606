use async_trait::async_trait;
use govpl_verifier_domain::DomainError;
use std::collections::HashMap;

pub type StoredRecord = HashMap<String, serde_json::Value>;

/// Durable key-value storage.
///
/// `get` returns only the keys that exist. `set` writes all given keys as one
/// unit: readers observe either none or all of them.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, keys: &[&str]) -> Result<StoredRecord, DomainError>;
    async fn set(&self, items: StoredRecord) -> Result<(), DomainError>;
}
