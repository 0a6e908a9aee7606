pub mod lists;
pub mod verification;

// Re-export use cases
pub use lists::{GetCacheInfoUseCase, RefreshListsUseCase, RefreshReport, WarmUpListsUseCase, WarmUpTrigger};
pub use verification::{
    ClassifyDomainUseCase, HandleNavigationEventUseCase, NavigationOutcome, VerifyPageUseCase,
};
