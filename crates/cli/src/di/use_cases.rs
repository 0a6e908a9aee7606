use super::Repositories;
use govpl_verifier_application::ports::ListCachePort;
use govpl_verifier_application::use_cases::{
    ClassifyDomainUseCase, GetCacheInfoUseCase, HandleNavigationEventUseCase,
    RefreshListsUseCase, VerifyPageUseCase, WarmUpListsUseCase,
};
use std::sync::Arc;

pub struct UseCases {
    pub verify_page: Arc<VerifyPageUseCase>,
    pub refresh: Arc<RefreshListsUseCase>,
    pub warm_up: Arc<WarmUpListsUseCase>,
    pub cache_info: Arc<GetCacheInfoUseCase>,
    pub handle_navigation: Arc<HandleNavigationEventUseCase>,
}

impl UseCases {
    pub fn new(repos: &Repositories) -> Self {
        let official: Arc<dyn ListCachePort> = repos.official.clone();
        let malicious: Arc<dyn ListCachePort> = repos.malicious.clone();

        let classify = Arc::new(ClassifyDomainUseCase::new(
            official.clone(),
            malicious.clone(),
        ));
        let verify_page = Arc::new(VerifyPageUseCase::new(classify));
        let refresh = Arc::new(RefreshListsUseCase::new(
            official.clone(),
            malicious.clone(),
        ));
        let warm_up = Arc::new(WarmUpListsUseCase::new(refresh.clone()));

        Self {
            handle_navigation: Arc::new(HandleNavigationEventUseCase::new(
                verify_page.clone(),
                warm_up.clone(),
            )),
            cache_info: Arc::new(GetCacheInfoUseCase::new(vec![official, malicious])),
            verify_page,
            refresh,
            warm_up,
        }
    }
}
