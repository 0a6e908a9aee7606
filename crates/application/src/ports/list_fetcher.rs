use async_trait::async_trait;
use govpl_verifier_domain::{DomainError, DomainSet};

#[async_trait]
pub trait ListFetcher: Send + Sync {
    /// Downloads and parses the list. Fails on transport errors, non-2xx
    /// responses and bodies that yield no domains.
    async fn fetch(&self) -> Result<DomainSet, DomainError>;

    fn source_url(&self) -> &str;
}
