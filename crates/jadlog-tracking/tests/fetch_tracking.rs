//! Fetcher tests against a local mock of the tracking endpoint.

use chrono::{Datelike, Timelike};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use jadlog_tracking::{track, FetcherConfig, TrackingError, TrackingFetcher, TrackingSource};

const TRACKING_PATH: &str = "/siteInstitucional/tracking_dev.jad";
const PAGE: &str = include_str!("fixtures/tracking_page.html");

fn fetcher_for(server: &MockServer) -> TrackingFetcher {
    TrackingFetcher::new(FetcherConfig {
        base_url: format!("{}{TRACKING_PATH}", server.uri()),
        timeout_ms: 5_000,
        ..FetcherConfig::default()
    })
}

#[tokio::test]
async fn test_fetch_sends_cte_query_and_returns_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TRACKING_PATH))
        .and(query_param("cte", "10084512345678"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PAGE))
        .expect(1)
        .mount(&server)
        .await;

    let body = fetcher_for(&server).fetch("10084512345678").await.unwrap();
    assert_eq!(body, PAGE);
}

#[tokio::test]
async fn test_track_parses_fixture_rows_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TRACKING_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(PAGE))
        .mount(&server)
        .await;

    let events = track(&fetcher_for(&server), "10084512345678").await.unwrap();
    assert_eq!(events.len(), 3);

    let statuses: Vec<&str> = events.iter().map(|e| e.status.as_str()).collect();
    assert_eq!(statuses, ["EMISSAO", "TRANSFERENCIA", "ENTREGUE"]);

    assert_eq!(events[0].date_str, "15/03/2023 14:30");
    let first = events[0].timestamp.unwrap();
    assert_eq!((first.year(), first.month(), first.day()), (2023, 3, 15));
    assert_eq!((first.hour(), first.minute()), (14, 30));

    assert_eq!(events[1].origin, "CO SAO PAULO 01");
    assert_eq!(events[1].destination, "CO CURITIBA 02");
    assert!(events.iter().all(|e| e.document == "10084512345678"));
}

#[tokio::test]
async fn test_track_number_is_url_encoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("cte", "12 34&x=1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .expect(1)
        .mount(&server)
        .await;

    let events = track(&fetcher_for(&server), "12 34&x=1").await.unwrap();
    assert!(events.is_empty());
}

#[tokio::test]
async fn test_non_success_status_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .expect(1)
        .mount(&server)
        .await;

    let err = fetcher_for(&server).fetch("1").await.unwrap_err();
    assert!(matches!(err, TrackingError::Status { status: 503, .. }));
}

#[tokio::test]
async fn test_no_retry_on_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    assert!(track(&fetcher_for(&server), "1").await.is_err());
    // `expect(1)` is verified when the server drops.
}

#[tokio::test]
async fn test_timeout_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(PAGE)
                .set_delay(std::time::Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let fetcher = TrackingFetcher::new(FetcherConfig {
        base_url: format!("{}{TRACKING_PATH}", server.uri()),
        timeout_ms: 50,
        ..FetcherConfig::default()
    });

    let err = fetcher.fetch("1").await.unwrap_err();
    assert!(matches!(err, TrackingError::Transport(_)));
}
