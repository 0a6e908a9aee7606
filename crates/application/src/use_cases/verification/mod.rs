mod classify_domain;
mod handle_navigation;
mod verify_page;

pub use classify_domain::ClassifyDomainUseCase;
pub use handle_navigation::{HandleNavigationEventUseCase, NavigationOutcome};
pub use verify_page::VerifyPageUseCase;
