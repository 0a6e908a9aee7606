use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;

pub const OFFICIAL_LIST_URL: &str = "https://www.dns.pl/lista_gov_pl_z_www.csv";
pub const MALICIOUS_LIST_URL: &str = "https://hole.cert.pl/domains/v2/domains.txt";
pub const CERT_WARNINGS_URL: &str = "https://cert.pl/lista-ostrzezen/";

const OFFICIAL_TTL_SECS: u64 = 24 * 60 * 60;
const MALICIOUS_TTL_SECS: u64 = 6 * 60 * 60;

/// The two remote registries the verifier keeps a local copy of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    /// Registry of confirmed gov.pl domains published by NASK (dns.pl).
    Official,
    /// Domains reported as malicious by CERT Polska.
    Malicious,
}

impl ListKind {
    pub const ALL: [ListKind; 2] = [ListKind::Official, ListKind::Malicious];

    pub fn to_str(&self) -> &'static str {
        match self {
            ListKind::Official => "official",
            ListKind::Malicious => "malicious",
        }
    }

    pub fn cache_key(&self) -> &'static str {
        match self {
            ListKind::Official => "govpl_domains_cache",
            ListKind::Malicious => "malicious_domains_cache",
        }
    }

    pub fn timestamp_key(&self) -> &'static str {
        match self {
            ListKind::Official => "govpl_domains_timestamp",
            ListKind::Malicious => "malicious_domains_timestamp",
        }
    }

    pub fn default_url(&self) -> &'static str {
        match self {
            ListKind::Official => OFFICIAL_LIST_URL,
            ListKind::Malicious => MALICIOUS_LIST_URL,
        }
    }

    pub fn default_ttl(&self) -> Duration {
        match self {
            ListKind::Official => Duration::from_secs(OFFICIAL_TTL_SECS),
            ListKind::Malicious => Duration::from_secs(MALICIOUS_TTL_SECS),
        }
    }

    /// Human-facing page that explains the list, if the publisher has one.
    pub fn reference_url(&self) -> Option<&'static str> {
        match self {
            ListKind::Official => None,
            ListKind::Malicious => Some(CERT_WARNINGS_URL),
        }
    }
}

impl std::fmt::Display for ListKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for ListKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "official" | "govpl" => Ok(ListKind::Official),
            "malicious" | "cert" => Ok(ListKind::Malicious),
            other => Err(format!("unknown list '{}'", other)),
        }
    }
}
