use super::{RefreshListsUseCase, RefreshReport};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WarmUpTrigger {
    Startup,
    Installed,
    Updated,
}

impl std::fmt::Display for WarmUpTrigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            WarmUpTrigger::Startup => "startup",
            WarmUpTrigger::Installed => "installed",
            WarmUpTrigger::Updated => "updated",
        })
    }
}

/// Fills both caches eagerly so that the first checks hit warm data.
///
/// Runs after construction at process start and again on install/update. The
/// caller awaits it and receives the report; a failed list stays on whatever
/// copy it had (or none) and is retried by the scheduler.
pub struct WarmUpListsUseCase {
    refresh: Arc<RefreshListsUseCase>,
}

impl WarmUpListsUseCase {
    pub fn new(refresh: Arc<RefreshListsUseCase>) -> Self {
        Self { refresh }
    }

    pub async fn execute(&self, trigger: WarmUpTrigger) -> RefreshReport {
        info!(trigger = %trigger, "Warming up domain lists");
        let report = self.refresh.execute_all().await;

        if report.all_succeeded() {
            info!(trigger = %trigger, "Domain lists warmed up");
        } else {
            warn!(
                trigger = %trigger,
                official = report.official,
                malicious = report.malicious,
                "Warm-up incomplete, scheduled refresh will retry"
            );
        }
        report
    }
}
