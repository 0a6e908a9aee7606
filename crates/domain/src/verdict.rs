use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrustLevel {
    Safe,
    Warning,
    Danger,
}

impl TrustLevel {
    pub fn to_str(&self) -> &'static str {
        match self {
            TrustLevel::Safe => "safe",
            TrustLevel::Warning => "warning",
            TrustLevel::Danger => "danger",
        }
    }
}

impl std::fmt::Display for TrustLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_str())
    }
}

/// Membership of a hostname in a registry that may itself be unreachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Membership {
    Present,
    Absent,
    /// The registry could not be consulted (no cached copy and fetch failed).
    Unknown,
}

impl Membership {
    pub fn from_lookup(found: Option<bool>) -> Self {
        match found {
            Some(true) => Membership::Present,
            Some(false) => Membership::Absent,
            None => Membership::Unknown,
        }
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            Membership::Present => "present",
            Membership::Absent => "absent",
            Membership::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Membership {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_str())
    }
}

/// Full-page warning to put in front of a page before the user interacts with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// The hostname is on the malicious-domain list.
    Malicious,
    /// A government-suffix page served without HTTPS.
    InsecureTransport,
}

impl WarningKind {
    pub fn to_str(&self) -> &'static str {
        match self {
            WarningKind::Malicious => "malicious",
            WarningKind::InsecureTransport => "insecure_transport",
        }
    }
}

impl std::fmt::Display for WarningKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_str())
    }
}

/// Classification of one hostname + protocol pair. Never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub hostname: String,
    pub trust_level: TrustLevel,
    pub is_gov_suffix: bool,
    pub has_secure_transport: bool,
    pub allow_list: Membership,
    pub is_on_block_list: bool,
    pub reasons: Vec<String>,
}

impl Verdict {
    /// Whether the page may be handed to the mObywatel app for verification.
    pub fn can_verify(&self) -> bool {
        self.is_gov_suffix && self.has_secure_transport && !self.is_on_block_list
    }

    /// Block-list hits take precedence over the transport check. Other
    /// dangers (e.g. a gov.pl lookalike) only get the badge.
    pub fn interstitial(&self) -> Option<WarningKind> {
        if self.is_on_block_list {
            Some(WarningKind::Malicious)
        } else if self.is_gov_suffix && !self.has_secure_transport {
            Some(WarningKind::InsecureTransport)
        } else {
            None
        }
    }
}

/// Outcome of verifying a page address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PageCheck {
    Verified {
        url: String,
        #[serde(flatten)]
        verdict: Verdict,
        interstitial: Option<WarningKind>,
    },
    /// The page address could not be read. Terminal, not retried.
    Unreadable { message: String },
}

impl PageCheck {
    pub fn verified(url: String, verdict: Verdict) -> Self {
        let interstitial = verdict.interstitial();
        PageCheck::Verified {
            url,
            verdict,
            interstitial,
        }
    }

    pub fn unreadable() -> Self {
        PageCheck::Unreadable {
            message: "Cannot read the page address".to_string(),
        }
    }

    pub fn verdict(&self) -> Option<&Verdict> {
        match self {
            PageCheck::Verified { verdict, .. } => Some(verdict),
            PageCheck::Unreadable { .. } => None,
        }
    }

    pub fn interstitial(&self) -> Option<WarningKind> {
        match self {
            PageCheck::Verified { interstitial, .. } => *interstitial,
            PageCheck::Unreadable { .. } => None,
        }
    }
}
