pub mod key_value_repository;

pub use key_value_repository::SqliteKeyValueStore;
