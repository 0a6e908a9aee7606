use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("List fetch error: {0}")]
    ListFetch(String),

    #[error("HTTP {status} for {url}")]
    HttpStatus { status: u16, url: String },

    #[error("List from {0} contained no domains")]
    EmptyList(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid page address: {0}")]
    InvalidPageAddress(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
