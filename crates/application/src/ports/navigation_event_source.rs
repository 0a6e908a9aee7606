use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleEvent {
    Installed,
    Updated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationEvent {
    /// A page finished loading in a tab.
    PageLoaded { tab_id: u64, url: Option<String> },
    /// The user switched to a tab.
    TabActivated { tab_id: u64, url: Option<String> },
    Lifecycle(LifecycleEvent),
}

/// Stream of browser events. `None` means the source is exhausted.
#[async_trait]
pub trait NavigationEventSource: Send {
    async fn next_event(&mut self) -> Option<NavigationEvent>;
}
