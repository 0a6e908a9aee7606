pub mod mock_list_cache;

pub use mock_list_cache::MockListCache;
