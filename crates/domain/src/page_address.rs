use crate::DomainError;
use url::Url;

/// Hostname and scheme of a visited page, as read from its URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageAddress {
    pub url: String,
    pub hostname: String,
    /// Scheme in the URL-model form, e.g. `https:`.
    pub protocol: String,
}

impl PageAddress {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let raw = raw.trim();
        let url = Url::parse(raw)
            .map_err(|e| DomainError::InvalidPageAddress(format!("{}: {}", raw, e)))?;

        let hostname = url
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| DomainError::InvalidPageAddress(format!("{}: no host", raw)))?
            .to_lowercase();

        Ok(Self {
            protocol: format!("{}:", url.scheme()),
            hostname,
            url: url.to_string(),
        })
    }
}
