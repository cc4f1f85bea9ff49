pub mod http_fetcher;

use async_trait::async_trait;
use url::Url;

use crate::app::Result;
use crate::domain::FeedEnvelope;

pub use http_fetcher::HttpFetcher;

#[derive(Debug)]
pub enum FetchResult {
    /// Page of media parsed from a successful response
    Envelope(FeedEnvelope),
    /// Request finished with neither a body nor an error
    Empty,
}

/// One GET against the feed endpoint. Resolves exactly once, after the
/// transport has fully finished; provider errors come back as
/// [`FeedError::Api`](crate::app::FeedError::Api).
#[async_trait]
pub trait Fetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchResult>;
}

/// `<endpoint>?access_token=<token>`, keeping any query the endpoint already has.
pub fn feed_request_url(endpoint: &str, access_token: &str) -> Result<Url> {
    let mut url = Url::parse(endpoint)?;
    url.query_pairs_mut().append_pair("access_token", access_token);
    Ok(url)
}
