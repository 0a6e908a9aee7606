use crate::ports::ListCachePort;
use govpl_verifier_domain::ListKind;
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, instrument, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RefreshReport {
    pub official: bool,
    pub malicious: bool,
}

impl RefreshReport {
    pub fn all_succeeded(&self) -> bool {
        self.official && self.malicious
    }

    pub fn get(&self, kind: ListKind) -> bool {
        match kind {
            ListKind::Official => self.official,
            ListKind::Malicious => self.malicious,
        }
    }
}

/// Forces a refetch of one or both lists regardless of their TTL.
pub struct RefreshListsUseCase {
    official: Arc<dyn ListCachePort>,
    malicious: Arc<dyn ListCachePort>,
}

impl RefreshListsUseCase {
    pub fn new(official: Arc<dyn ListCachePort>, malicious: Arc<dyn ListCachePort>) -> Self {
        Self {
            official,
            malicious,
        }
    }

    fn cache(&self, kind: ListKind) -> &Arc<dyn ListCachePort> {
        match kind {
            ListKind::Official => &self.official,
            ListKind::Malicious => &self.malicious,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, kind: ListKind) -> bool {
        let ok = self.cache(kind).refresh().await;
        if ok {
            info!(list = %kind, "List refresh succeeded");
        } else {
            warn!(list = %kind, "List refresh failed, keeping previous copy");
        }
        ok
    }

    /// Refreshes both lists concurrently. One failing does not affect the
    /// other.
    pub async fn execute_all(&self) -> RefreshReport {
        let (official, malicious) = tokio::join!(
            self.execute(ListKind::Official),
            self.execute(ListKind::Malicious)
        );
        RefreshReport {
            official,
            malicious,
        }
    }
}
