use std::sync::Arc;

use crate::app::Result;
use crate::config::Config;
use crate::credentials::{ConfiguredCredentials, CredentialStore, StaticCredentials};
use crate::fetcher::{Fetcher, HttpFetcher};
use crate::loader::{FeedLoader, Sinks};
use crate::normalizer::Normalizer;
use crate::timefmt::TimeFormatter;

pub struct AppContext {
    pub config: Config,
    pub fetcher: Arc<dyn Fetcher + Send + Sync>,
    pub credentials: Arc<dyn CredentialStore>,
    pub normalizer: Normalizer,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self> {
        let fetcher: Arc<dyn Fetcher + Send + Sync> =
            Arc::new(HttpFetcher::with_settings(&config.api)?);
        let credentials: Arc<dyn CredentialStore> =
            Arc::new(ConfiguredCredentials::from_env(&config.auth));
        let normalizer = Normalizer::with_formatter(TimeFormatter::new(config.display.zone()));

        Ok(Self {
            config,
            fetcher,
            credentials,
            normalizer,
        })
    }

    /// Replace the configured credentials with a fixed token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.credentials = Arc::new(StaticCredentials::new(token));
        self
    }

    pub fn loader(&self, sinks: Sinks) -> Arc<FeedLoader> {
        let loader = FeedLoader::new(
            self.fetcher.clone(),
            self.credentials.clone(),
            self.config.api.endpoint.clone(),
            sinks,
        )
        .with_normalizer(self.normalizer);

        Arc::new(loader)
    }
}
