use crate::ports::ListCachePort;
use govpl_verifier_domain::{classify, TrustLevel, Verdict};
use std::sync::Arc;
use tracing::{debug, warn};

/// Classifies a hostname against the current snapshots of both lists.
///
/// Each list is read through its cache, which may fetch if expired; the
/// classification itself never fails.
pub struct ClassifyDomainUseCase {
    official: Arc<dyn ListCachePort>,
    malicious: Arc<dyn ListCachePort>,
}

impl ClassifyDomainUseCase {
    pub fn new(official: Arc<dyn ListCachePort>, malicious: Arc<dyn ListCachePort>) -> Self {
        Self {
            official,
            malicious,
        }
    }

    pub async fn execute(&self, hostname: &str, protocol: &str) -> Verdict {
        let (official, malicious) = tokio::join!(self.official.get(), self.malicious.get());

        let verdict = classify(hostname, protocol, official.as_deref(), malicious.as_deref());

        if verdict.trust_level == TrustLevel::Danger && verdict.is_on_block_list {
            warn!(hostname = %verdict.hostname, "Visited domain is on the malicious list");
        }
        debug!(
            hostname = %verdict.hostname,
            trust_level = %verdict.trust_level,
            allow_list = %verdict.allow_list,
            "Domain classified"
        );
        verdict
    }
}
