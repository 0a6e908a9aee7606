pub mod domain_list_cache;

pub use domain_list_cache::DomainListCache;
