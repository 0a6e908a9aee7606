use async_trait::async_trait;
use govpl_verifier_domain::{CacheInfo, DomainSet, ListKind};
use std::sync::Arc;

#[async_trait]
pub trait ListCachePort: Send + Sync {
    fn kind(&self) -> ListKind;

    /// Current list: cached if fresh, refetched if expired, stale if the
    /// refetch fails. `None` only when nothing was ever stored and the fetch
    /// fails.
    async fn get(&self) -> Option<Arc<DomainSet>>;

    /// Unconditional refetch. `true` when a new copy was fetched and stored.
    async fn refresh(&self) -> bool;

    async fn info(&self) -> CacheInfo;
}
