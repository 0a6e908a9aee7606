//! GOV.PL Verifier Domain Layer
pub mod cache_entry;
pub mod classifier;
pub mod config;
pub mod domain_set;
pub mod errors;
pub mod hostname;
pub mod list_kind;
pub mod page_address;
pub mod verdict;

pub use cache_entry::{CacheEntry, CacheInfo};
pub use classifier::classify;
pub use config::{CliOverrides, Config, ConfigError};
pub use domain_set::DomainSet;
pub use errors::DomainError;
pub use list_kind::ListKind;
pub use page_address::PageAddress;
pub use verdict::{Membership, PageCheck, TrustLevel, Verdict, WarningKind};
