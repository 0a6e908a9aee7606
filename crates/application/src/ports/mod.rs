mod clock;
mod key_value_store;
mod list_cache_port;
mod list_fetcher;
mod navigation_event_source;

pub use clock::Clock;
pub use key_value_store::{KeyValueStore, StoredRecord};
pub use list_cache_port::ListCachePort;
pub use list_fetcher::ListFetcher;
pub use navigation_event_source::{LifecycleEvent, NavigationEvent, NavigationEventSource};
