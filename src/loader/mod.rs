//! Feed request lifecycle.
//!
//! Each call to [`FeedLoader::load_feed`] or [`FeedLoader::load`] starts a new
//! generation: the list is cleared, the indicator switched on and the request
//! issued. When the request resolves, its result is applied to the sinks only
//! if no newer load has started in the meantime.
//!
//! ```text
//! Idle → Pending → Succeeded(items) | Failed(error)
//!           └────→ Idle  (finished with neither data nor error)
//! ```

mod sink;

pub use sink::{ErrorDisplay, FeedSink, LoadingIndicator, Sinks};

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use url::Url;

use crate::app::Result;
use crate::credentials::CredentialStore;
use crate::domain::{ErrorDescriptor, FeedRequestState, NormalizedFeedItem};
use crate::fetcher::{feed_request_url, FetchResult, Fetcher};
use crate::normalizer::Normalizer;

/// What a single load did once its request resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Succeeded { generation: u64, count: usize },
    Failed { generation: u64, error: ErrorDescriptor },
    /// Finished without data and without an error; nothing was surfaced.
    Unresolved { generation: u64 },
    /// A newer load started first; the result was dropped untouched.
    Superseded { generation: u64 },
}

impl LoadOutcome {
    pub fn generation(&self) -> u64 {
        match self {
            LoadOutcome::Succeeded { generation, .. }
            | LoadOutcome::Failed { generation, .. }
            | LoadOutcome::Unresolved { generation }
            | LoadOutcome::Superseded { generation } => *generation,
        }
    }
}

#[derive(Default)]
struct Current {
    generation: u64,
    state: FeedRequestState,
}

pub struct FeedLoader {
    fetcher: Arc<dyn Fetcher + Send + Sync>,
    credentials: Arc<dyn CredentialStore>,
    normalizer: Normalizer,
    endpoint: String,
    sinks: Sinks,
    current: Mutex<Current>,
}

impl FeedLoader {
    pub fn new(
        fetcher: Arc<dyn Fetcher + Send + Sync>,
        credentials: Arc<dyn CredentialStore>,
        endpoint: impl Into<String>,
        sinks: Sinks,
    ) -> Self {
        Self {
            fetcher,
            credentials,
            normalizer: Normalizer::new(),
            endpoint: endpoint.into(),
            sinks,
            current: Mutex::new(Current::default()),
        }
    }

    pub fn with_normalizer(mut self, normalizer: Normalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Start a load and return immediately.
    ///
    /// The list is cleared and the indicator activated before this returns;
    /// the request itself runs on the tokio runtime.
    pub fn load_feed(self: &Arc<Self>) -> JoinHandle<LoadOutcome> {
        let (generation, url) = self.begin();
        let loader = Arc::clone(self);
        tokio::spawn(async move { loader.resolve(generation, url).await })
    }

    /// Run a whole load cycle and wait for it to finish.
    pub async fn load(&self) -> LoadOutcome {
        let (generation, url) = self.begin();
        self.resolve(generation, url).await
    }

    pub fn state(&self) -> FeedRequestState {
        self.lock().state.clone()
    }

    pub fn generation(&self) -> u64 {
        self.lock().generation
    }

    fn lock(&self) -> MutexGuard<'_, Current> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn begin(&self) -> (u64, Result<Url>) {
        let generation = {
            let mut current = self.lock();
            current.generation += 1;
            let generation = current.generation;

            self.sinks.list.clear();
            self.sinks.indicator.set_active(true);
            current.state = FeedRequestState::Pending { generation };
            generation
        };
        debug!("Feed load {} pending", generation);

        // Read once here; a token change mid-flight only affects the next load.
        let url = self
            .credentials
            .stored_access_token()
            .and_then(|token| feed_request_url(&self.endpoint, &token));

        (generation, url)
    }

    async fn resolve(&self, generation: u64, url: Result<Url>) -> LoadOutcome {
        let result = match url {
            Ok(url) => self.fetcher.fetch(&url).await,
            Err(e) => Err(e),
        };
        self.complete(generation, result)
    }

    fn complete(&self, generation: u64, result: Result<FetchResult>) -> LoadOutcome {
        let page: std::result::Result<Option<Vec<NormalizedFeedItem>>, ErrorDescriptor> =
            match result {
                Ok(FetchResult::Envelope(envelope)) => {
                    Ok(Some(self.normalizer.normalize_page(&envelope, Utc::now())))
                }
                Ok(FetchResult::Empty) => Ok(None),
                Err(e) => Err(e.descriptor()),
            };

        let mut current = self.lock();
        if current.generation != generation {
            debug!(
                "Dropping result of feed load {} (current is {})",
                generation, current.generation
            );
            return LoadOutcome::Superseded { generation };
        }

        match page {
            Ok(Some(items)) => {
                for item in &items {
                    self.sinks.list.append(item.clone());
                }
                self.sinks.indicator.set_active(false);
                self.sinks.list.reveal();

                let count = items.len();
                current.state = FeedRequestState::Succeeded { generation, items };
                info!("Feed load {} succeeded with {} items", generation, count);
                LoadOutcome::Succeeded { generation, count }
            }
            Ok(None) => {
                self.sinks.indicator.set_active(false);
                current.state = FeedRequestState::Idle;
                warn!("Feed load {} finished without data", generation);
                LoadOutcome::Unresolved { generation }
            }
            Err(error) => {
                self.sinks.indicator.set_active(false);
                self.sinks.errors.show_error(&error);
                warn!("Feed load {} failed: {}", generation, error);
                current.state = FeedRequestState::Failed {
                    generation,
                    error: error.clone(),
                };
                LoadOutcome::Failed { generation, error }
            }
        }
    }
}
