#![allow(dead_code)]

use async_trait::async_trait;
use govpl_verifier_application::ports::{
    Clock, KeyValueStore, ListFetcher, NavigationEvent, NavigationEventSource, StoredRecord,
};
use govpl_verifier_domain::{DomainError, DomainSet, ListKind};
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
use std::sync::RwLock;
use std::time::Duration;

pub const NOW_MS: i64 = 1_700_000_000_000;

pub struct MockListFetcher {
    url: String,
    domains: RwLock<Option<Vec<String>>>,
    calls: AtomicUsize,
}

impl MockListFetcher {
    pub fn with_domains(domains: Vec<&str>) -> Self {
        Self {
            url: "https://lists.example.test/domains.txt".to_string(),
            domains: RwLock::new(Some(domains.into_iter().map(String::from).collect())),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            url: "https://lists.example.test/domains.txt".to_string(),
            domains: RwLock::new(None),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn set_domains(&self, domains: Vec<&str>) {
        *self.domains.write().unwrap() = Some(domains.into_iter().map(String::from).collect());
    }

    pub fn set_failing(&self) {
        *self.domains.write().unwrap() = None;
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ListFetcher for MockListFetcher {
    async fn fetch(&self) -> Result<DomainSet, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.domains.read().unwrap().as_ref() {
            Some(domains) if !domains.is_empty() => Ok(DomainSet::from_entries(domains)),
            Some(_) => Err(DomainError::EmptyList(self.url.clone())),
            None => Err(DomainError::ListFetch("connection refused".to_string())),
        }
    }

    fn source_url(&self) -> &str {
        &self.url
    }
}

pub struct MemoryKeyValueStore {
    data: RwLock<HashMap<String, Value>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    writes: AtomicUsize,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self {
            data: RwLock::new(HashMap::new()),
            fail_reads: AtomicBool::new(false),
            fail_writes: AtomicBool::new(false),
            writes: AtomicUsize::new(0),
        }
    }

    pub fn with_list(kind: ListKind, domains: Vec<&str>, stored_at_ms: i64) -> Self {
        let store = Self::new();
        store.put_list(kind, domains, stored_at_ms);
        store
    }

    pub fn put_list(&self, kind: ListKind, domains: Vec<&str>, stored_at_ms: i64) {
        let set = DomainSet::from_entries(domains);
        let mut data = self.data.write().unwrap();
        data.insert(kind.cache_key().to_string(), Value::from(set.to_sorted_vec()));
        data.insert(kind.timestamp_key().to_string(), Value::from(stored_at_ms));
    }

    pub fn insert_raw(&self, key: &str, value: Value) {
        self.data.write().unwrap().insert(key.to_string(), value);
    }

    pub fn raw(&self, key: &str) -> Option<Value> {
        self.data.read().unwrap().get(key).cloned()
    }

    pub fn stored_timestamp(&self, kind: ListKind) -> Option<i64> {
        self.raw(kind.timestamp_key()).and_then(|v| v.as_i64())
    }

    pub fn stored_domains(&self, kind: ListKind) -> Option<Vec<String>> {
        self.raw(kind.cache_key())
            .and_then(|v| serde_json::from_value(v).ok())
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl Default for MemoryKeyValueStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyValueStore for MemoryKeyValueStore {
    async fn get(&self, keys: &[&str]) -> Result<StoredRecord, DomainError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(DomainError::Storage("disk I/O error".to_string()));
        }
        let data = self.data.read().unwrap();
        Ok(keys
            .iter()
            .filter_map(|k| data.get(*k).map(|v| (k.to_string(), v.clone())))
            .collect())
    }

    async fn set(&self, items: StoredRecord) -> Result<(), DomainError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DomainError::Storage("database is locked".to_string()));
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.data.write().unwrap().extend(items);
        Ok(())
    }
}

pub struct MockClock {
    now_ms: AtomicI64,
}

impl MockClock {
    pub fn at(now_ms: i64) -> Self {
        Self {
            now_ms: AtomicI64::new(now_ms),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now_ms
            .fetch_add(by.as_millis() as i64, Ordering::SeqCst);
    }

    pub fn set(&self, now_ms: i64) {
        self.now_ms.store(now_ms, Ordering::SeqCst);
    }
}

impl Clock for MockClock {
    fn now_ms(&self) -> i64 {
        self.now_ms.load(Ordering::SeqCst)
    }
}

pub struct ScriptedEventSource {
    events: VecDeque<NavigationEvent>,
}

impl ScriptedEventSource {
    pub fn new(events: Vec<NavigationEvent>) -> Self {
        Self {
            events: events.into(),
        }
    }
}

#[async_trait]
impl NavigationEventSource for ScriptedEventSource {
    async fn next_event(&mut self) -> Option<NavigationEvent> {
        self.events.pop_front()
    }
}
