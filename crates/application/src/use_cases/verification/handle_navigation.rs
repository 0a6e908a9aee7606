use super::VerifyPageUseCase;
use crate::ports::{LifecycleEvent, NavigationEvent};
use crate::use_cases::lists::{RefreshReport, WarmUpListsUseCase, WarmUpTrigger};
use govpl_verifier_domain::PageCheck;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    Checked { tab_id: u64, check: PageCheck },
    WarmedUp(RefreshReport),
}

/// Routes one browser event: page events are verified, install/update
/// events re-warm both lists.
pub struct HandleNavigationEventUseCase {
    verify_page: Arc<VerifyPageUseCase>,
    warm_up: Arc<WarmUpListsUseCase>,
}

impl HandleNavigationEventUseCase {
    pub fn new(verify_page: Arc<VerifyPageUseCase>, warm_up: Arc<WarmUpListsUseCase>) -> Self {
        Self {
            verify_page,
            warm_up,
        }
    }

    pub async fn execute(&self, event: NavigationEvent) -> NavigationOutcome {
        match event {
            NavigationEvent::PageLoaded { tab_id, url }
            | NavigationEvent::TabActivated { tab_id, url } => {
                let check = self.verify_page.execute(url.as_deref()).await;
                NavigationOutcome::Checked { tab_id, check }
            }
            NavigationEvent::Lifecycle(LifecycleEvent::Installed) => {
                NavigationOutcome::WarmedUp(self.warm_up.execute(WarmUpTrigger::Installed).await)
            }
            NavigationEvent::Lifecycle(LifecycleEvent::Updated) => {
                NavigationOutcome::WarmedUp(self.warm_up.execute(WarmUpTrigger::Updated).await)
            }
        }
    }
}
