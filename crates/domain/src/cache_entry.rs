use crate::{DomainSet, ListKind};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// A fetched list together with the wall-clock time (epoch ms) it was stored.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub domains: Arc<DomainSet>,
    pub stored_at_ms: i64,
}

impl CacheEntry {
    pub fn new(domains: Arc<DomainSet>, stored_at_ms: i64) -> Self {
        Self {
            domains,
            stored_at_ms,
        }
    }

    pub fn age_ms(&self, now_ms: i64) -> i64 {
        now_ms.saturating_sub(self.stored_at_ms)
    }

    /// Fresh while `now - stored_at < ttl`. An entry stamped in the future
    /// (clock moved backwards) counts as fresh.
    pub fn is_fresh(&self, now_ms: i64, ttl: Duration) -> bool {
        self.age_ms(now_ms) < ttl_ms(ttl)
    }
}

pub(crate) fn ttl_ms(ttl: Duration) -> i64 {
    i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX)
}

/// Diagnostic snapshot of one list cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheInfo {
    pub kind: ListKind,
    pub count: usize,
    pub timestamp_ms: Option<i64>,
    pub age_ms: Option<i64>,
    pub is_expired: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_url: Option<String>,
}

impl CacheInfo {
    pub fn from_entry(kind: ListKind, entry: Option<&CacheEntry>, now_ms: i64, ttl: Duration) -> Self {
        let reference_url = kind.reference_url().map(str::to_string);
        match entry {
            Some(entry) => Self {
                kind,
                count: entry.domains.len(),
                timestamp_ms: Some(entry.stored_at_ms),
                age_ms: Some(entry.age_ms(now_ms)),
                is_expired: !entry.is_fresh(now_ms, ttl),
                reference_url,
            },
            None => Self {
                kind,
                count: 0,
                timestamp_ms: None,
                age_ms: None,
                is_expired: true,
                reference_url,
            },
        }
    }
}
