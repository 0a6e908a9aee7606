use rustc_hash::FxHashSet;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const WWW_PREFIX: &str = "www.";

/// Immutable set of lowercase hostnames.
///
/// Every hostname is stored in both its bare and its `www.`-prefixed form, so
/// lookups are a single exact match with no prefix stripping at query time.
/// A set is built once from a parsed feed (or a persisted record) and never
/// mutated afterwards; refreshes replace the whole set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainSet {
    domains: FxHashSet<String>,
}

impl DomainSet {
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut domains = FxHashSet::default();
        for entry in entries {
            let domain = entry.as_ref().trim().to_lowercase();
            if domain.is_empty() {
                continue;
            }
            insert_canonical(&mut domains, domain);
        }
        Self { domains }
    }

    #[inline]
    pub fn contains(&self, hostname: &str) -> bool {
        self.domains.contains(hostname)
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.domains.iter().map(String::as_str)
    }

    /// Sorted copy of the entries, used for persistence so that identical
    /// sets always produce identical records.
    pub fn to_sorted_vec(&self) -> Vec<String> {
        let mut out: Vec<String> = self.domains.iter().cloned().collect();
        out.sort_unstable();
        out
    }
}

fn insert_canonical(domains: &mut FxHashSet<String>, domain: String) {
    match domain.strip_prefix(WWW_PREFIX) {
        Some("") => return,
        Some(bare) => {
            domains.insert(bare.to_string());
        }
        None => {
            domains.insert(format!("{WWW_PREFIX}{domain}"));
        }
    }
    domains.insert(domain);
}

impl<S: AsRef<str>> FromIterator<S> for DomainSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::from_entries(iter)
    }
}

impl Serialize for DomainSet {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        self.to_sorted_vec().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DomainSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Vec::<String>::deserialize(deserializer)?;
        Ok(Self::from_entries(entries))
    }
}
