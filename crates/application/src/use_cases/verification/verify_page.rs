use super::ClassifyDomainUseCase;
use govpl_verifier_domain::{PageAddress, PageCheck};
use std::sync::Arc;
use tracing::debug;

/// Verifies the page behind a URL, as the popup does for the active tab.
pub struct VerifyPageUseCase {
    classify: Arc<ClassifyDomainUseCase>,
}

impl VerifyPageUseCase {
    pub fn new(classify: Arc<ClassifyDomainUseCase>) -> Self {
        Self { classify }
    }

    /// `None` stands for "no active tab / no URL".
    pub async fn execute(&self, url: Option<&str>) -> PageCheck {
        let Some(raw) = url else {
            return PageCheck::unreadable();
        };

        let page = match PageAddress::parse(raw) {
            Ok(page) => page,
            Err(e) => {
                debug!(error = %e, "Cannot read page address");
                return PageCheck::unreadable();
            }
        };

        let verdict = self.classify.execute(&page.hostname, &page.protocol).await;
        PageCheck::verified(page.url, verdict)
    }
}
