use govpl_verifier_application::ports::{Clock, KeyValueStore};
use govpl_verifier_application::services::DomainListCache;
use govpl_verifier_domain::{Config, DomainError, ListKind};
use govpl_verifier_infrastructure::lists::{build_http_client, HttpListFetcher};
use govpl_verifier_infrastructure::repositories::SqliteKeyValueStore;
use govpl_verifier_infrastructure::system::SystemClock;
use sqlx::SqlitePool;
use std::sync::Arc;

/// Both list caches, built once per process and shared by every use case
/// and job.
pub struct Repositories {
    pub official: Arc<DomainListCache>,
    pub malicious: Arc<DomainListCache>,
}

impl Repositories {
    pub fn new(pool: SqlitePool, config: &Config) -> Result<Self, DomainError> {
        let client = build_http_client(&config.http)?;
        let store: Arc<dyn KeyValueStore> = Arc::new(SqliteKeyValueStore::new(pool));
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);

        let build = |kind: ListKind| {
            let source = config.lists.get(kind);
            let fetcher =
                HttpListFetcher::for_kind(client.clone(), kind, source.url.clone());
            Arc::new(
                DomainListCache::new(kind, Arc::new(fetcher), store.clone(), clock.clone())
                    .with_ttl(source.ttl()),
            )
        };

        Ok(Self {
            official: build(ListKind::Official),
            malicious: build(ListKind::Malicious),
        })
    }
}
