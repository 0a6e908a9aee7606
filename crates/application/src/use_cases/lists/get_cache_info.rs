use crate::ports::ListCachePort;
use govpl_verifier_domain::CacheInfo;
use std::sync::Arc;

pub struct GetCacheInfoUseCase {
    caches: Vec<Arc<dyn ListCachePort>>,
}

impl GetCacheInfoUseCase {
    pub fn new(caches: Vec<Arc<dyn ListCachePort>>) -> Self {
        Self { caches }
    }

    pub async fn execute(&self) -> Vec<CacheInfo> {
        let mut out = Vec::with_capacity(self.caches.len());
        for cache in &self.caches {
            out.push(cache.info().await);
        }
        out
    }
}
