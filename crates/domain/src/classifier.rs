//! Trust classification of a single hostname.
//!
//! Rules, first match wins:
//!   1. hostname or any parent domain on the block-list        -> Danger
//!   2. gov.pl suffix + HTTPS + on the allow-list                -> Safe
//!   3. gov.pl suffix + HTTPS + missing from the allow-list      -> Warning
//!   4. gov.pl suffix + HTTPS + allow-list unavailable           -> Safe
//!   5. gov.pl suffix without HTTPS                              -> Warning
//!   6. anything else                                            -> Danger

use crate::hostname::{is_official_suffix, is_secure_protocol, self_and_parents};
use crate::{DomainSet, Membership, TrustLevel, Verdict};

/// Classifies `hostname` as seen over `protocol` against the current list
/// snapshots. `None` means that list is unavailable.
///
/// An unavailable block-list counts as "not listed"; an unavailable
/// allow-list yields [`Membership::Unknown`].
pub fn classify(
    hostname: &str,
    protocol: &str,
    official: Option<&DomainSet>,
    malicious: Option<&DomainSet>,
) -> Verdict {
    let hostname = hostname.to_lowercase();
    let is_gov_suffix = is_official_suffix(&hostname);
    let has_secure_transport = is_secure_protocol(protocol);
    let allow_list = Membership::from_lookup(official.map(|set| set.contains(&hostname)));
    let blocked_by = malicious.and_then(|set| block_list_hit(&hostname, set));
    let is_on_block_list = blocked_by.is_some();

    let mut reasons = Vec::new();

    let trust_level = if let Some(listed) = blocked_by {
        if listed == hostname {
            reasons.push(format!("{} is on the CERT Polska list of dangerous domains", hostname));
        } else {
            reasons.push(format!(
                "parent domain {} is on the CERT Polska list of dangerous domains",
                listed
            ));
        }
        TrustLevel::Danger
    } else if is_gov_suffix && has_secure_transport {
        reasons.push("domain ends with .gov.pl".to_string());
        reasons.push("connection is secured with HTTPS".to_string());
        match allow_list {
            Membership::Present => {
                reasons.push("domain is on the official gov.pl registry".to_string());
                TrustLevel::Safe
            }
            Membership::Absent => {
                reasons.push("domain is NOT on the official gov.pl registry".to_string());
                TrustLevel::Warning
            }
            Membership::Unknown => {
                reasons.push("official gov.pl registry is unavailable".to_string());
                TrustLevel::Safe
            }
        }
    } else if is_gov_suffix {
        reasons.push("domain ends with .gov.pl".to_string());
        reasons.push("connection is not secured (no HTTPS)".to_string());
        TrustLevel::Warning
    } else {
        reasons.push("domain is not a gov.pl domain".to_string());
        TrustLevel::Danger
    };

    Verdict {
        hostname,
        trust_level,
        is_gov_suffix,
        has_secure_transport,
        allow_list,
        is_on_block_list,
        reasons,
    }
}

fn block_list_hit<'a>(hostname: &'a str, malicious: &DomainSet) -> Option<&'a str> {
    self_and_parents(hostname)
        .into_iter()
        .find(|candidate| malicious.contains(candidate))
}
