pub mod errors;
pub mod http;
pub mod lists;
pub mod logging;
pub mod root;
pub mod storage;

pub use errors::ConfigError;
pub use http::HttpConfig;
pub use lists::{ListSourceConfig, ListsConfig};
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use storage::StorageConfig;
