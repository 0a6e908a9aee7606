//! Time-boxed, persisted copy of one remote domain list.
//!
//! The durable record lives in the [`KeyValueStore`] under the list's two
//! keys (`<list>_cache`, `<list>_timestamp`) and is replaced wholesale on
//! every successful fetch. An in-process mirror of the last decoded entry
//! avoids re-parsing the whole list on every lookup; it is only reused while
//! the stored timestamp still matches it, so writes from another process are
//! picked up on the next read.

use crate::ports::{Clock, KeyValueStore, ListCachePort, ListFetcher, StoredRecord};
use arc_swap::ArcSwapOption;
use async_trait::async_trait;
use govpl_verifier_domain::{CacheEntry, CacheInfo, DomainSet, ListKind};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

enum FetchOutcome {
    Stored(Arc<DomainSet>),
    /// Fetched fine but the write to storage failed.
    NotPersisted(Arc<DomainSet>),
    Failed,
}

pub struct DomainListCache {
    kind: ListKind,
    ttl: Duration,
    fetcher: Arc<dyn ListFetcher>,
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    mirror: ArcSwapOption<CacheEntry>,
}

impl DomainListCache {
    pub fn new(
        kind: ListKind,
        fetcher: Arc<dyn ListFetcher>,
        store: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            kind,
            ttl: kind.default_ttl(),
            fetcher,
            store,
            clock,
            mirror: ArcSwapOption::empty(),
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    async fn load_entry(&self) -> Option<Arc<CacheEntry>> {
        let timestamp_key = self.kind.timestamp_key();

        let stamp = match self.store.get(&[timestamp_key]).await {
            Ok(mut record) => record.remove(timestamp_key),
            Err(e) => {
                error!(list = %self.kind, error = %e, "Failed to read list timestamp from storage");
                return None;
            }
        };
        let stored_at_ms = stamp.as_ref().and_then(Value::as_i64)?;

        if let Some(mirrored) = self.mirror.load_full() {
            if mirrored.stored_at_ms == stored_at_ms {
                return Some(mirrored);
            }
        }

        let cache_key = self.kind.cache_key();
        let mut record = match self.store.get(&[cache_key, timestamp_key]).await {
            Ok(record) => record,
            Err(e) => {
                error!(list = %self.kind, error = %e, "Failed to read list cache from storage");
                return None;
            }
        };

        let entry = Arc::new(self.decode_record(&mut record)?);
        self.mirror.store(Some(Arc::clone(&entry)));
        Some(entry)
    }

    fn decode_record(&self, record: &mut StoredRecord) -> Option<CacheEntry> {
        let domains = record.remove(self.kind.cache_key())?;
        let stored_at_ms = record.remove(self.kind.timestamp_key())?.as_i64()?;

        // Negative stamps, or stamps further ahead than one TTL, cannot come
        // from a real write.
        let latest_valid_ms = self.clock.now_ms().saturating_add(ttl_ms(self.ttl));
        if stored_at_ms < 0 || stored_at_ms > latest_valid_ms {
            warn!(list = %self.kind, stored_at_ms, "Stored list timestamp is out of range, ignoring it");
            return None;
        }

        match serde_json::from_value::<DomainSet>(domains) {
            Ok(set) => Some(CacheEntry::new(Arc::new(set), stored_at_ms)),
            Err(e) => {
                warn!(list = %self.kind, error = %e, "Stored list is malformed, ignoring it");
                None
            }
        }
    }

    async fn fetch_and_store(&self) -> FetchOutcome {
        let domains = match self.fetcher.fetch().await {
            Ok(set) => Arc::new(set),
            Err(e) => {
                warn!(
                    list = %self.kind,
                    url = %self.fetcher.source_url(),
                    error = %e,
                    "List fetch failed"
                );
                return FetchOutcome::Failed;
            }
        };

        let now_ms = self.clock.now_ms();
        let mut record = StoredRecord::with_capacity(2);
        record.insert(
            self.kind.cache_key().to_string(),
            Value::from(domains.to_sorted_vec()),
        );
        record.insert(self.kind.timestamp_key().to_string(), Value::from(now_ms));

        match self.store.set(record).await {
            Ok(()) => {
                self.mirror.store(Some(Arc::new(CacheEntry::new(
                    Arc::clone(&domains),
                    now_ms,
                ))));
                info!(list = %self.kind, count = domains.len(), "List refreshed and stored");
                FetchOutcome::Stored(domains)
            }
            Err(e) => {
                error!(list = %self.kind, error = %e, "Failed to persist fetched list");
                FetchOutcome::NotPersisted(domains)
            }
        }
    }
}

fn ttl_ms(ttl: Duration) -> i64 {
    i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX)
}

#[async_trait]
impl ListCachePort for DomainListCache {
    fn kind(&self) -> ListKind {
        self.kind
    }

    async fn get(&self) -> Option<Arc<DomainSet>> {
        let cached = self.load_entry().await;
        let now_ms = self.clock.now_ms();

        if let Some(entry) = &cached {
            if entry.is_fresh(now_ms, self.ttl) {
                debug!(list = %self.kind, count = entry.domains.len(), "Using cached list");
                return Some(Arc::clone(&entry.domains));
            }
        }

        debug!(list = %self.kind, has_entry = cached.is_some(), "Cache expired or missing, fetching");
        match self.fetch_and_store().await {
            FetchOutcome::Stored(domains) | FetchOutcome::NotPersisted(domains) => Some(domains),
            FetchOutcome::Failed => match cached {
                Some(entry) => {
                    warn!(
                        list = %self.kind,
                        age_ms = entry.age_ms(now_ms),
                        "Using expired list due to fetch failure"
                    );
                    Some(Arc::clone(&entry.domains))
                }
                None => {
                    error!(list = %self.kind, "No list available (fetch failed and nothing cached)");
                    None
                }
            },
        }
    }

    async fn refresh(&self) -> bool {
        matches!(self.fetch_and_store().await, FetchOutcome::Stored(_))
    }

    async fn info(&self) -> CacheInfo {
        let entry = self.load_entry().await;
        CacheInfo::from_entry(self.kind, entry.as_deref(), self.clock.now_ms(), self.ttl)
    }
}
