#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};
use url::Url;

use instafeed::app::Result;
use instafeed::domain::{ErrorDescriptor, NormalizedFeedItem};
use instafeed::fetcher::{FetchResult, Fetcher};
use instafeed::loader::{ErrorDisplay, FeedSink, LoadingIndicator, Sinks};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Clear,
    Append(String),
    Reveal,
    Indicator(bool),
    Error(ErrorDescriptor),
}

/// Records every sink call, in order, across all three sinks.
#[derive(Default)]
pub struct Recorder {
    events: Arc<Mutex<Vec<Event>>>,
}

impl Recorder {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    pub fn take(&self) -> Vec<Event> {
        self.events.lock().unwrap().drain(..).collect()
    }

    pub fn sinks(self: &Arc<Self>) -> Sinks {
        Sinks::new(self.clone(), self.clone(), self.clone())
    }

    fn push(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }
}

impl FeedSink for Recorder {
    fn clear(&self) {
        self.push(Event::Clear);
    }

    fn append(&self, item: NormalizedFeedItem) {
        self.push(Event::Append(item.image_id));
    }

    fn reveal(&self) {
        self.push(Event::Reveal);
    }
}

impl LoadingIndicator for Recorder {
    fn set_active(&self, active: bool) {
        self.push(Event::Indicator(active));
    }
}

impl ErrorDisplay for Recorder {
    fn show_error(&self, error: &ErrorDescriptor) {
        self.push(Event::Error(error.clone()));
    }
}

type Scripted = (Option<oneshot::Receiver<()>>, Result<FetchResult>);

/// Serves queued results in request order. A gated result is held back until
/// its sender fires, to control completion order across loads.
pub struct ScriptedFetcher {
    responses: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<String>>,
    started: mpsc::UnboundedSender<String>,
}

impl ScriptedFetcher {
    pub fn new() -> (Arc<Self>, mpsc::UnboundedReceiver<String>) {
        let (started, rx) = mpsc::unbounded_channel();
        let fetcher = Self {
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
            started,
        };
        (Arc::new(fetcher), rx)
    }

    pub fn respond(&self, result: Result<FetchResult>) {
        self.responses.lock().unwrap().push_back((None, result));
    }

    pub fn respond_gated(&self, result: Result<FetchResult>) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.responses.lock().unwrap().push_back((Some(rx), result));
        tx
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Fetcher for ScriptedFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchResult> {
        let (gate, result) = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected feed request");
        self.requests.lock().unwrap().push(url.to_string());
        let _ = self.started.send(url.to_string());

        if let Some(gate) = gate {
            let _ = gate.await;
        }
        result
    }
}

pub fn raw_item_json(id: &str) -> serde_json::Value {
    serde_json::json!({
        "user": {"username": "a", "id": "1", "profile_picture": "p"},
        "images": {"thumbnail": {"url": "t"}, "standard_resolution": {"url": "o"}},
        "id": id,
        "likes": {"count": 3},
        "comments": {"count": 1},
        "created_time": "1000000000",
        "location": null,
        "user_has_liked": null,
        "link": null,
        "caption": null
    })
}

pub fn envelope(ids: &[&str]) -> FetchResult {
    let data: Vec<serde_json::Value> = ids.iter().map(|id| raw_item_json(id)).collect();
    let envelope = serde_json::from_value(serde_json::json!({ "data": data })).unwrap();
    FetchResult::Envelope(envelope)
}
