use govpl_verifier_application::ports::ListCachePort;
use govpl_verifier_domain::ListKind;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Background job that periodically re-downloads one domain list.
///
/// The first interval tick is consumed immediately: the lists are warmed up
/// at startup, so the first refresh happens one full period later. A failed
/// refresh is logged and retried on the next tick.
pub struct ListRefreshJob {
    cache: Arc<dyn ListCachePort>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl ListRefreshJob {
    /// Uses the list's default TTL as the refresh period.
    pub fn new(cache: Arc<dyn ListCachePort>) -> Self {
        let interval_secs = cache.kind().default_ttl().as_secs();
        Self {
            cache,
            interval_secs,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub fn kind(&self) -> ListKind {
        self.cache.kind()
    }

    pub fn interval_secs(&self) -> u64 {
        self.interval_secs
    }

    pub async fn start(self: Arc<Self>) {
        let kind = self.kind();
        info!(list = %kind, interval_secs = self.interval_secs, "Starting list refresh job");

        tokio::spawn(async move {
            let mut interval =
                tokio::time::interval(Duration::from_secs(self.interval_secs.max(1)));
            interval.tick().await;

            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!(list = %kind, "ListRefreshJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        info!(list = %kind, "ListRefreshJob: refreshing list");
                        if self.cache.refresh().await {
                            let snapshot = self.cache.info().await;
                            info!(list = %kind, count = snapshot.count, "ListRefreshJob: refresh completed");
                        } else {
                            error!(list = %kind, "ListRefreshJob: refresh failed, retrying on next tick");
                        }
                    }
                }
            }
        });
    }
}
