use govpl_verifier_application::ports::{
    LifecycleEvent, ListCachePort, NavigationEvent, NavigationEventSource,
};
use govpl_verifier_application::services::DomainListCache;
use govpl_verifier_application::use_cases::{
    ClassifyDomainUseCase, GetCacheInfoUseCase, HandleNavigationEventUseCase, NavigationOutcome,
    RefreshListsUseCase, RefreshReport, VerifyPageUseCase, WarmUpListsUseCase, WarmUpTrigger,
};
use govpl_verifier_domain::{ListKind, TrustLevel};
use std::sync::Arc;

mod helpers;
use helpers::{MemoryKeyValueStore, MockClock, MockListFetcher, ScriptedEventSource, NOW_MS};

struct Fixture {
    official_fetcher: Arc<MockListFetcher>,
    malicious_fetcher: Arc<MockListFetcher>,
    store: Arc<MemoryKeyValueStore>,
    official: Arc<dyn ListCachePort>,
    malicious: Arc<dyn ListCachePort>,
}

fn fixture(official: MockListFetcher, malicious: MockListFetcher) -> Fixture {
    let store = Arc::new(MemoryKeyValueStore::new());
    let clock = Arc::new(MockClock::at(NOW_MS));
    let official_fetcher = Arc::new(official);
    let malicious_fetcher = Arc::new(malicious);
    Fixture {
        official: Arc::new(DomainListCache::new(
            ListKind::Official,
            official_fetcher.clone(),
            store.clone(),
            clock.clone(),
        )),
        malicious: Arc::new(DomainListCache::new(
            ListKind::Malicious,
            malicious_fetcher.clone(),
            store.clone(),
            clock,
        )),
        official_fetcher,
        malicious_fetcher,
        store,
    }
}

impl Fixture {
    fn refresh(&self) -> Arc<RefreshListsUseCase> {
        Arc::new(RefreshListsUseCase::new(
            self.official.clone(),
            self.malicious.clone(),
        ))
    }

    fn navigation(&self) -> HandleNavigationEventUseCase {
        let classify = Arc::new(ClassifyDomainUseCase::new(
            self.official.clone(),
            self.malicious.clone(),
        ));
        HandleNavigationEventUseCase::new(
            Arc::new(VerifyPageUseCase::new(classify)),
            Arc::new(WarmUpListsUseCase::new(self.refresh())),
        )
    }
}

#[tokio::test]
async fn test_refresh_single_list() {
    let fx = fixture(
        MockListFetcher::with_domains(vec!["gov.pl"]),
        MockListFetcher::with_domains(vec!["evil.pl"]),
    );

    assert!(fx.refresh().execute(ListKind::Malicious).await);
    assert_eq!(fx.malicious_fetcher.call_count(), 1);
    assert_eq!(fx.official_fetcher.call_count(), 0);
    assert!(fx.store.stored_timestamp(ListKind::Malicious).is_some());
    assert!(fx.store.stored_timestamp(ListKind::Official).is_none());
}

#[tokio::test]
async fn test_refresh_all_reports_each_list_independently() {
    let fx = fixture(
        MockListFetcher::failing(),
        MockListFetcher::with_domains(vec!["evil.pl"]),
    );

    let report = fx.refresh().execute_all().await;

    assert_eq!(
        report,
        RefreshReport {
            official: false,
            malicious: true
        }
    );
    assert!(!report.all_succeeded());
    assert!(report.get(ListKind::Malicious));
}

#[tokio::test]
async fn test_warm_up_fills_both_caches() {
    let fx = fixture(
        MockListFetcher::with_domains(vec!["gov.pl"]),
        MockListFetcher::with_domains(vec!["evil.pl"]),
    );

    let report = WarmUpListsUseCase::new(fx.refresh())
        .execute(WarmUpTrigger::Startup)
        .await;

    assert!(report.all_succeeded());
    assert!(fx.official.get().await.unwrap().contains("gov.pl"));
    assert!(fx.malicious.get().await.unwrap().contains("evil.pl"));
    assert_eq!(fx.official_fetcher.call_count(), 1);
    assert_eq!(fx.malicious_fetcher.call_count(), 1);
}

#[tokio::test]
async fn test_cache_info_lists_both_caches() {
    let fx = fixture(
        MockListFetcher::with_domains(vec!["gov.pl", "obywatel.gov.pl"]),
        MockListFetcher::failing(),
    );
    fx.refresh().execute_all().await;

    let infos = GetCacheInfoUseCase::new(vec![fx.official.clone(), fx.malicious.clone()])
        .execute()
        .await;

    assert_eq!(infos.len(), 2);
    assert_eq!(infos[0].kind, ListKind::Official);
    assert_eq!(infos[0].count, 4);
    assert!(!infos[0].is_expired);
    assert_eq!(infos[1].kind, ListKind::Malicious);
    assert_eq!(infos[1].count, 0);
    assert!(infos[1].is_expired);
}

#[tokio::test]
async fn test_navigation_events_are_verified_and_lifecycle_warms_up() {
    let fx = fixture(
        MockListFetcher::with_domains(vec!["gov.pl"]),
        MockListFetcher::with_domains(vec!["evil.pl"]),
    );
    let handler = fx.navigation();
    let mut source = ScriptedEventSource::new(vec![
        NavigationEvent::Lifecycle(LifecycleEvent::Installed),
        NavigationEvent::PageLoaded {
            tab_id: 7,
            url: Some("https://www.gov.pl/".to_string()),
        },
        NavigationEvent::TabActivated {
            tab_id: 8,
            url: None,
        },
    ]);

    let mut outcomes = Vec::new();
    while let Some(event) = source.next_event().await {
        outcomes.push(handler.execute(event).await);
    }

    assert_eq!(outcomes.len(), 3);
    assert!(matches!(
        outcomes[0],
        NavigationOutcome::WarmedUp(report) if report.all_succeeded()
    ));
    match &outcomes[1] {
        NavigationOutcome::Checked { tab_id, check } => {
            assert_eq!(*tab_id, 7);
            assert_eq!(check.verdict().unwrap().trust_level, TrustLevel::Safe);
        }
        other => panic!("unexpected outcome {:?}", other),
    }
    match &outcomes[2] {
        NavigationOutcome::Checked { tab_id, check } => {
            assert_eq!(*tab_id, 8);
            assert!(check.verdict().is_none());
        }
        other => panic!("unexpected outcome {:?}", other),
    }

    // The install warm-up already fetched both lists; the page check hit cache.
    assert_eq!(fx.official_fetcher.call_count(), 1);
    assert_eq!(fx.malicious_fetcher.call_count(), 1);
}
