use crate::ListKind;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Source settings for one remote list.
///
/// Fields left out of the file deserialize as empty / zero and are filled in
/// from the list's built-in defaults by [`ListSourceConfig::fill_defaults`].
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ListSourceConfig {
    #[serde(default)]
    pub url: String,

    /// How long a fetched copy is served without contacting the source.
    #[serde(default)]
    pub ttl_secs: u64,

    /// Period of the background refresh. Defaults to the TTL.
    #[serde(default)]
    pub refresh_interval_secs: u64,
}

impl ListSourceConfig {
    pub fn for_kind(kind: ListKind) -> Self {
        let ttl_secs = kind.default_ttl().as_secs();
        Self {
            url: kind.default_url().to_string(),
            ttl_secs,
            refresh_interval_secs: ttl_secs,
        }
    }

    pub fn fill_defaults(&mut self, kind: ListKind) {
        if self.url.trim().is_empty() {
            self.url = kind.default_url().to_string();
        }
        if self.ttl_secs == 0 {
            self.ttl_secs = kind.default_ttl().as_secs();
        }
        if self.refresh_interval_secs == 0 {
            self.refresh_interval_secs = self.ttl_secs;
        }
    }

    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListsConfig {
    #[serde(default = "default_official")]
    pub official: ListSourceConfig,

    #[serde(default = "default_malicious")]
    pub malicious: ListSourceConfig,
}

impl ListsConfig {
    pub fn get(&self, kind: ListKind) -> &ListSourceConfig {
        match kind {
            ListKind::Official => &self.official,
            ListKind::Malicious => &self.malicious,
        }
    }

    pub fn fill_defaults(&mut self) {
        self.official.fill_defaults(ListKind::Official);
        self.malicious.fill_defaults(ListKind::Malicious);
    }
}

impl Default for ListsConfig {
    fn default() -> Self {
        Self {
            official: default_official(),
            malicious: default_malicious(),
        }
    }
}

fn default_official() -> ListSourceConfig {
    ListSourceConfig::for_kind(ListKind::Official)
}

fn default_malicious() -> ListSourceConfig {
    ListSourceConfig::for_kind(ListKind::Malicious)
}
