use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use url::Url;

use crate::app::{FeedError, Result};
use crate::config::ApiConfig;
use crate::domain::raw::ResponseMeta;
use crate::domain::{ErrorDescriptor, FeedEnvelope};
use crate::fetcher::{FetchResult, Fetcher};

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        Self::with_settings(&ApiConfig::default())
    }

    pub fn with_settings(settings: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .gzip(true)
            .brotli(true)
            .user_agent(settings.user_agent.as_str())
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchResult> {
        let response = self
            .client
            .get(url.as_str())
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let error = error_from_body(status, &body);
            tracing::debug!("Feed request failed with {}: {}", status, error);
            return Err(FeedError::Api(error));
        }

        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(FetchResult::Empty);
        }

        let envelope: FeedEnvelope = serde_json::from_slice(&body)?;
        if let Some(error) = envelope.error() {
            return Err(FeedError::Api(error));
        }

        Ok(FetchResult::Envelope(envelope))
    }
}

/// Provider errors show up either under `meta` or at the top level of the body.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    meta: Option<ResponseMeta>,
    #[serde(flatten)]
    top: ResponseMeta,
}

fn error_from_body(status: StatusCode, body: &[u8]) -> ErrorDescriptor {
    let status_code = i64::from(status.as_u16());

    let parsed = serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.meta.and_then(|m| m.error()).or_else(|| b.top.error()));

    match parsed {
        Some(mut error) => {
            if error.code == 0 {
                error.code = status_code;
            }
            error
        }
        None => ErrorDescriptor::new(
            status_code,
            "HttpError",
            status.canonical_reason().unwrap_or("HTTP error"),
        ),
    }
}
