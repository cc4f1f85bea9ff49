mod common;

use std::sync::Arc;
use std::time::Duration;

use tokio_test::{assert_err, assert_ok};
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use instafeed::app::FeedError;
use instafeed::config::ApiConfig;
use instafeed::credentials::StaticCredentials;
use instafeed::domain::ErrorDescriptor;
use instafeed::fetcher::{feed_request_url, FetchResult, Fetcher, HttpFetcher};
use instafeed::loader::{FeedLoader, LoadOutcome};

use common::{raw_item_json, Event, Recorder};

const FEED_PATH: &str = "/v1/users/self/feed";

fn feed_url(server: &MockServer, token: &str) -> Url {
    feed_request_url(&format!("{}{}", server.uri(), FEED_PATH), token).unwrap()
}

#[tokio::test]
async fn fetch_parses_envelope_and_sends_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(FEED_PATH))
        .and(query_param("access_token", "abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "meta": {"code": 200},
            "data": [raw_item_json("1"), raw_item_json("2")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new().unwrap();
    let result = assert_ok!(fetcher.fetch(&feed_url(&server, "abc")).await);

    match result {
        FetchResult::Envelope(envelope) => {
            let ids: Vec<&str> = envelope.data.iter().map(|i| i.id.as_str()).collect();
            assert_eq!(ids, vec!["1", "2"]);
        }
        FetchResult::Empty => panic!("expected envelope"),
    }
}

#[tokio::test]
async fn fetch_maps_provider_error_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(FEED_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "meta": {
                "code": 400,
                "error_type": "OAuthException",
                "error_message": "bad token"
            }
        })))
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new().unwrap();
    let err = assert_err!(fetcher.fetch(&feed_url(&server, "bad")).await);

    assert_eq!(
        err.descriptor(),
        ErrorDescriptor::new(400, "OAuthException", "bad token")
    );
}

#[tokio::test]
async fn fetch_maps_bare_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new().unwrap();
    let err = assert_err!(fetcher.fetch(&feed_url(&server, "abc")).await);

    assert!(matches!(err, FeedError::Api(_)));
    assert_eq!(
        err.descriptor(),
        ErrorDescriptor::new(503, "HttpError", "Service Unavailable")
    );
}

#[tokio::test]
async fn fetch_treats_meta_error_with_ok_status_as_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "meta": {
                "code": 429,
                "error_type": "OAuthRateLimitException",
                "error_message": "slow down"
            }
        })))
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new().unwrap();
    let err = assert_err!(fetcher.fetch(&feed_url(&server, "abc")).await);
    assert_eq!(err.descriptor().error_type, "OAuthRateLimitException");
}

#[tokio::test]
async fn fetch_empty_body_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new().unwrap();
    let result = assert_ok!(fetcher.fetch(&feed_url(&server, "abc")).await);
    assert!(matches!(result, FetchResult::Empty));
}

#[tokio::test]
async fn fetch_malformed_body_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"data\": [oops"))
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new().unwrap();
    let err = assert_err!(fetcher.fetch(&feed_url(&server, "abc")).await);
    assert!(matches!(err, FeedError::Json(_)));
    assert_eq!(err.descriptor().error_type, "ParseError");
}

#[tokio::test]
async fn fetch_timeout_is_timeout_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"data": []}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let settings = ApiConfig {
        timeout_secs: 1,
        ..ApiConfig::default()
    };
    let fetcher = HttpFetcher::with_settings(&settings).unwrap();
    let err = assert_err!(fetcher.fetch(&feed_url(&server, "abc")).await);

    let descriptor = err.descriptor();
    assert_eq!(descriptor.code, 0);
    assert_eq!(descriptor.error_type, "TimeoutError");
}

#[tokio::test]
async fn loader_over_http_surfaces_oauth_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(FEED_PATH))
        .and(query_param("access_token", "expired"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "meta": {
                "code": 400,
                "error_type": "OAuthException",
                "error_message": "bad token"
            }
        })))
        .mount(&server)
        .await;

    let recorder = Recorder::new();
    let loader = FeedLoader::new(
        Arc::new(HttpFetcher::new().unwrap()),
        Arc::new(StaticCredentials::new("expired")),
        format!("{}{}", server.uri(), FEED_PATH),
        recorder.sinks(),
    );

    let expected = ErrorDescriptor::new(400, "OAuthException", "bad token");
    assert_eq!(
        loader.load().await,
        LoadOutcome::Failed {
            generation: 1,
            error: expected.clone()
        }
    );
    assert_eq!(
        recorder.events(),
        vec![
            Event::Clear,
            Event::Indicator(true),
            Event::Indicator(false),
            Event::Error(expected),
        ]
    );
}

#[tokio::test]
async fn loader_over_http_renders_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(FEED_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [raw_item_json("A"), raw_item_json("B")]
        })))
        .mount(&server)
        .await;

    let recorder = Recorder::new();
    let loader = FeedLoader::new(
        Arc::new(HttpFetcher::new().unwrap()),
        Arc::new(StaticCredentials::new("abc")),
        format!("{}{}", server.uri(), FEED_PATH),
        recorder.sinks(),
    );

    assert_eq!(
        loader.load().await,
        LoadOutcome::Succeeded {
            generation: 1,
            count: 2
        }
    );
    assert_eq!(
        recorder.events(),
        vec![
            Event::Clear,
            Event::Indicator(true),
            Event::Append("A".into()),
            Event::Append("B".into()),
            Event::Indicator(false),
            Event::Reveal,
        ]
    );
}
