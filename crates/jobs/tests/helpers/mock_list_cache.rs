#![allow(dead_code)]

use async_trait::async_trait;
use govpl_verifier_application::ports::ListCachePort;
use govpl_verifier_domain::{CacheInfo, DomainSet, ListKind};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

pub struct MockListCache {
    kind: ListKind,
    refresh_count: Arc<AtomicU64>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockListCache {
    pub fn new(kind: ListKind) -> Self {
        Self {
            kind,
            refresh_count: Arc::new(AtomicU64::new(0)),
            should_fail: Arc::new(RwLock::new(false)),
        }
    }

    pub async fn set_should_fail(&self, fail: bool) {
        *self.should_fail.write().await = fail;
    }

    pub fn refresh_count(&self) -> u64 {
        self.refresh_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ListCachePort for MockListCache {
    fn kind(&self) -> ListKind {
        self.kind
    }

    async fn get(&self) -> Option<Arc<DomainSet>> {
        Some(Arc::new(DomainSet::from_entries(["gov.pl"])))
    }

    async fn refresh(&self) -> bool {
        self.refresh_count.fetch_add(1, Ordering::SeqCst);
        !*self.should_fail.read().await
    }

    async fn info(&self) -> CacheInfo {
        CacheInfo::from_entry(self.kind, None, 0, self.kind.default_ttl())
    }
}
