mod get_cache_info;
mod refresh_lists;
mod warm_up;

pub use get_cache_info::GetCacheInfoUseCase;
pub use refresh_lists::{RefreshListsUseCase, RefreshReport};
pub use warm_up::{WarmUpListsUseCase, WarmUpTrigger};
