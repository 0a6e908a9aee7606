use govpl_verifier_application::ports::ListCachePort;
use govpl_verifier_application::services::DomainListCache;
use govpl_verifier_application::use_cases::{ClassifyDomainUseCase, VerifyPageUseCase};
use govpl_verifier_domain::{ListKind, PageCheck, TrustLevel};
use std::sync::Arc;

mod helpers;
use helpers::{MemoryKeyValueStore, MockClock, MockListFetcher, NOW_MS};

fn make_use_case(official: Vec<&str>, malicious: Vec<&str>) -> VerifyPageUseCase {
    let store = Arc::new(MemoryKeyValueStore::new());
    let clock = Arc::new(MockClock::at(NOW_MS));
    let official: Arc<dyn ListCachePort> = Arc::new(DomainListCache::new(
        ListKind::Official,
        Arc::new(MockListFetcher::with_domains(official)),
        store.clone(),
        clock.clone(),
    ));
    let malicious: Arc<dyn ListCachePort> = Arc::new(DomainListCache::new(
        ListKind::Malicious,
        Arc::new(MockListFetcher::with_domains(malicious)),
        store,
        clock,
    ));
    VerifyPageUseCase::new(Arc::new(ClassifyDomainUseCase::new(official, malicious)))
}

#[tokio::test]
async fn test_verify_page_without_url_is_unreadable() {
    let use_case = make_use_case(vec!["gov.pl"], vec!["evil.pl"]);
    assert_eq!(use_case.execute(None).await, PageCheck::unreadable());
}

#[tokio::test]
async fn test_verify_page_with_unparseable_url_is_unreadable() {
    let use_case = make_use_case(vec!["gov.pl"], vec!["evil.pl"]);

    let check = use_case.execute(Some("::::")).await;
    assert_eq!(check, PageCheck::unreadable());

    let check = use_case.execute(Some("about:blank")).await;
    assert_eq!(check, PageCheck::unreadable());
}

#[tokio::test]
async fn test_verify_browser_internal_page_is_distrusted() {
    let use_case = make_use_case(vec!["gov.pl"], vec!["evil.pl"]);

    let check = use_case.execute(Some("chrome://newtab")).await;
    assert_eq!(check.verdict().unwrap().trust_level, TrustLevel::Danger);
}

#[tokio::test]
async fn test_verify_page_uses_hostname_and_scheme() {
    let use_case = make_use_case(vec!["www.gov.pl"], vec!["evil.pl"]);

    let check = use_case
        .execute(Some("https://www.gov.pl/web/mobywatel"))
        .await;

    match check {
        PageCheck::Verified {
            url,
            verdict,
            interstitial,
        } => {
            assert_eq!(interstitial, None);
            assert_eq!(url, "https://www.gov.pl/web/mobywatel");
            assert_eq!(verdict.hostname, "www.gov.pl");
            assert_eq!(verdict.trust_level, TrustLevel::Safe);
        }
        PageCheck::Unreadable { .. } => panic!("expected a verdict"),
    }
}

#[tokio::test]
async fn test_verify_page_over_http_is_warning() {
    let use_case = make_use_case(vec!["gov.pl"], vec!["evil.pl"]);

    let check = use_case.execute(Some("http://gov.pl/")).await;

    assert_eq!(check.verdict().unwrap().trust_level, TrustLevel::Warning);
}

#[tokio::test]
async fn test_verify_page_flags_malicious_subdomain() {
    let use_case = make_use_case(vec!["gov.pl"], vec!["evil.pl"]);

    let check = use_case
        .execute(Some("https://login.evil.pl/gov.pl/"))
        .await;

    let verdict = check.verdict().unwrap();
    assert_eq!(verdict.trust_level, TrustLevel::Danger);
    assert!(verdict.is_on_block_list);
}
