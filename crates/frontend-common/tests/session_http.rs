//! Session cache against a mock console server

use console_core::{ApiConfig, ConsoleConfig};
use console_frontend_common::{AuthSessionCache, Clock, ConsoleState, HttpAuthApi, ManualClock};
use futures::future::join_all;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{body_json, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const START_MS: u64 = 1_700_000_000_000;

fn api_for(server: &MockServer) -> Arc<HttpAuthApi> {
    let config = ApiConfig {
        base_url: server.uri(),
        timeout_secs: Some(5),
    };
    Arc::new(HttpAuthApi::from_config(&config).unwrap())
}

fn cache_for(server: &MockServer, clock: &Arc<ManualClock>) -> AuthSessionCache {
    AuthSessionCache::builder(api_for(server))
        .clock(Arc::clone(clock) as Arc<dyn Clock>)
        .build()
}

#[tokio::test]
async fn test_login_check_logout_flow() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(serde_json::json!({ "password": "secret" })))
        .respond_with(
            ResponseTemplate::new(200).insert_header("set-cookie", "console_session=abc; Path=/"),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/auth/check"))
        .and(header_exists("cookie"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let clock = Arc::new(ManualClock::new(START_MS));
    let cache = cache_for(&server, &clock);

    cache.login("secret").await.unwrap();
    assert!(cache.is_logged_in());

    // Inside the window: no request
    clock.advance(Duration::from_secs(3));
    assert!(cache.check_auth().await);

    // Window lapsed: one request
    clock.advance(Duration::from_secs(10));
    assert!(cache.check_auth().await);
    assert_eq!(cache.last_checked_at(), START_MS + 13_000);

    cache.logout().await.unwrap();
    assert!(!cache.is_logged_in());
    assert_eq!(cache.last_checked_at(), 0);
}

#[tokio::test]
async fn test_concurrent_checks_send_one_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/check"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(200)))
        .expect(1)
        .mount(&server)
        .await;

    let clock = Arc::new(ManualClock::new(START_MS));
    let cache = cache_for(&server, &clock);

    let results = join_all((0..10).map(|_| cache.check_auth())).await;
    assert!(results.into_iter().all(|valid| valid));
    assert!(cache.is_logged_in());
    assert!(!cache.check_in_flight());
}

#[tokio::test]
async fn test_rejected_login_reports_auth_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid password"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/auth/check"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let clock = Arc::new(ManualClock::new(START_MS));
    let cache = cache_for(&server, &clock);

    let error = cache.login("wrong").await.unwrap_err();
    assert!(error.is_auth());
    assert!(!cache.is_logged_in());
    assert!(!cache.is_loading());
}

#[tokio::test]
async fn test_expired_session_after_window() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/auth/check"))
        .respond_with(ResponseTemplate::new(200))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/auth/check"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let clock = Arc::new(ManualClock::new(START_MS));
    let cache = cache_for(&server, &clock);

    cache.login("secret").await.unwrap();
    clock.advance(Duration::from_secs(11));

    assert!(!cache.check_auth().await);
    assert!(!cache.is_logged_in());
    assert_eq!(cache.last_checked_at(), START_MS + 11_000);
}

#[tokio::test]
async fn test_logout_with_server_down_clears_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/auth/check"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let mut config = ConsoleConfig::default();
    config.api.base_url = server.uri();
    let state = ConsoleState::from_config(&config).unwrap();

    state.auth().login("secret").await.unwrap();
    let error = state.auth().logout().await.unwrap_err();
    assert!(error.is_transport());
    assert!(!state.auth().is_logged_in());
}
